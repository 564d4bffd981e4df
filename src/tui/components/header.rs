//! # Header Component
//!
//! One-line top bar showing the app name, a transient status message,
//! and the active theme.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! Header is purely presentational—it receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut header = Header::new("Theme: dark".to_string(), true, &theme);
//! header.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"VoiceChat (dark) | Theme: dark"`
//! 2. **Default**: `"VoiceChat (dark)"`
//!
//! The theme marker is always visible so Ctrl+T has obvious feedback
//! even on terminals with washed-out palettes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Top bar component showing app name, status, and theme marker.
pub struct Header<'a> {
    /// Status message (e.g., "Theme: dark", "Welcome to VoiceChat!")
    pub status_message: String,
    /// Whether the dark palette is active
    pub dark_mode: bool,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(status_message: String, dark_mode: bool, theme: &'a Theme) -> Self {
        Self {
            status_message,
            dark_mode,
            theme,
        }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mode = if self.dark_mode { "dark" } else { "light" };
        let brand = Span::styled(
            "VoiceChat",
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        );

        let rest = if self.status_message.is_empty() {
            format!(" ({mode})")
        } else {
            format!(" ({mode}) | {}", self.status_message)
        };

        let line = Line::from(vec![brand, Span::raw(rest)]);
        frame.render_widget(line, area);
    }
}
