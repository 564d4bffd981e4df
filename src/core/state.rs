//! # Application State
//!
//! Core business state for VoiceChat. This module contains domain state
//! only - no TUI-specific types. Presentation state (scroll offsets,
//! selection cursors, cached waveforms) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── chats: Vec<Chat>           // fixed roster, never mutated
//! ├── active_tab: Tab            // Chats | Calls | Profile
//! ├── selected_chat: Option<u32> // open conversation (wins over tab)
//! ├── query: String              // chat list filter text
//! ├── recording: bool            // simulated capture in progress
//! ├── elapsed_ticks: u32         // 10 ticks = 1 displayed second
//! ├── audio_level: f32           // last tick's level, [0, 100)
//! ├── dark_mode: bool            // palette selector
//! └── status_message: String     // header status text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::chat::{self, Chat};
use crate::core::config::ResolvedConfig;

/// Top-level panel shown when no conversation is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Chats,
    Calls,
    Profile,
}

impl Tab {
    /// Cycle order for the Tab key: Chats → Calls → Profile → Chats.
    pub fn next(self) -> Self {
        match self {
            Tab::Chats => Tab::Calls,
            Tab::Calls => Tab::Profile,
            Tab::Profile => Tab::Chats,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Chats => "Chats",
            Tab::Calls => "Calls",
            Tab::Profile => "Profile",
        }
    }
}

pub struct App {
    pub chats: Vec<Chat>,
    pub active_tab: Tab,
    pub selected_chat: Option<u32>,
    pub query: String,
    pub recording: bool,
    pub elapsed_ticks: u32,
    pub audio_level: f32,
    pub dark_mode: bool,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            chats: chat::roster(),
            active_tab: Tab::Chats,
            selected_chat: None,
            query: String::new(),
            recording: false,
            elapsed_ticks: 0,
            audio_level: 0.0,
            dark_mode: false,
            status_message: String::from("Welcome to VoiceChat!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new();
        app.dark_mode = config.dark_mode;
        if let Some(message) = &config.status_message {
            app.status_message = message.clone();
        }
        app
    }

    /// Roster lookup. Unknown ids yield `None`; the conversation header
    /// renders empty rather than failing.
    pub fn chat_by_id(&self, id: u32) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    /// The roster filtered by the current query, in roster order.
    pub fn filtered_chats(&self) -> Vec<&Chat> {
        chat::filter(&self.chats, &self.query)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.active_tab, Tab::Chats);
        assert_eq!(app.selected_chat, None);
        assert!(app.query.is_empty());
        assert!(!app.recording);
        assert_eq!(app.elapsed_ticks, 0);
        assert!(!app.dark_mode);
        assert_eq!(app.status_message, "Welcome to VoiceChat!");
        assert_eq!(app.chats.len(), 5);
    }

    #[test]
    fn test_chat_by_id() {
        let app = App::new();
        assert_eq!(app.chat_by_id(3).map(|c| c.name.as_str()), Some("Elena Volkova"));
        assert!(app.chat_by_id(42).is_none());
    }

    #[test]
    fn test_filtered_chats_follow_query() {
        let mut app = App::new();
        assert_eq!(app.filtered_chats().len(), 5);
        app.query = "elena".to_string();
        assert_eq!(app.filtered_chats().len(), 1);
        app.query = "zzz".to_string();
        assert!(app.filtered_chats().is_empty());
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Chats.next(), Tab::Calls);
        assert_eq!(Tab::Calls.next(), Tab::Profile);
        assert_eq!(Tab::Profile.next(), Tab::Chats);
    }

    #[test]
    fn test_from_config() {
        use crate::core::config::ResolvedConfig;
        let config = ResolvedConfig {
            dark_mode: true,
            status_message: Some("hi".to_string()),
            ..ResolvedConfig::default()
        };
        let app = App::from_config(&config);
        assert!(app.dark_mode);
        assert_eq!(app.status_message, "hi");
    }
}
