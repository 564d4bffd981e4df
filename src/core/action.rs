//! # Actions
//!
//! Everything that can happen in VoiceChat becomes an `Action`.
//! User opens a chat row? That's `Action::SelectChat(id)`.
//! The recording ticker fires? That's `Action::RecordingTick { level }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the event loop to
//! execute. No side effects here. Timers and terminal I/O happen in
//! the TUI layer.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state
//! and the returned effect.

use log::{debug, info};

use crate::core::state::{App, Tab};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Exit the application.
    Quit,
    /// Show a different top-level panel. Ignored while a chat is open
    /// (the nav bar is hidden there).
    SwitchTab(Tab),
    /// Open the conversation view for a chat row.
    SelectChat(u32),
    /// Leave the conversation view, back to the active tab.
    Back,
    /// Append a character to the chat list filter.
    QueryChar(char),
    /// Delete the last character of the filter.
    QueryBackspace,
    /// Reset the filter to empty.
    ClearQuery,
    /// Begin the simulated recording.
    StartRecording,
    /// End the simulated recording. Send and cancel are the same
    /// transition; the recorded "content" is discarded either way.
    StopRecording,
    /// One ticker period elapsed while recording.
    RecordingTick { level: f32 },
    /// Flip between the light and dark palette.
    ToggleTheme,
}

/// Side effects requested by `update()`, executed by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Arm the repeating recording ticker. The loop must cancel any
    /// previously armed ticker first so counters are never driven twice.
    StartTicker,
    /// Cancel the recording ticker.
    StopTicker,
}

/// The reducer: apply `action` to `app`, return the effect to run.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }

        Action::SwitchTab(tab) => {
            // Unreachable from the UI while a chat is open; guard anyway.
            if app.selected_chat.is_none() && app.active_tab != tab {
                debug!("Switching tab to {:?}", tab);
                app.active_tab = tab;
            }
            Effect::None
        }

        Action::SelectChat(id) => {
            info!("Opening chat {}", id);
            app.selected_chat = Some(id);
            Effect::None
        }

        Action::Back => {
            app.selected_chat = None;
            if app.recording {
                // Leaving the conversation tears the recording down too.
                reset_recording(app);
                Effect::StopTicker
            } else {
                Effect::None
            }
        }

        Action::QueryChar(c) => {
            app.query.push(c);
            Effect::None
        }

        Action::QueryBackspace => {
            app.query.pop();
            Effect::None
        }

        Action::ClearQuery => {
            app.query.clear();
            Effect::None
        }

        Action::StartRecording => {
            // Only meaningful inside an open conversation, once.
            if app.selected_chat.is_none() || app.recording {
                return Effect::None;
            }
            info!("Recording started");
            app.recording = true;
            app.elapsed_ticks = 0;
            app.audio_level = 0.0;
            Effect::StartTicker
        }

        Action::StopRecording => {
            if !app.recording {
                return Effect::None;
            }
            info!("Recording stopped after {} ticks", app.elapsed_ticks);
            reset_recording(app);
            Effect::StopTicker
        }

        Action::RecordingTick { level } => {
            // A stale tick can arrive after the ticker was aborted;
            // the counters must not move once idle.
            if app.recording {
                app.elapsed_ticks += 1;
                app.audio_level = level;
            }
            Effect::None
        }

        Action::ToggleTheme => {
            app.dark_mode = !app.dark_mode;
            app.status_message =
                format!("Theme: {}", if app.dark_mode { "dark" } else { "light" });
            Effect::None
        }
    }
}

fn reset_recording(app: &mut App) {
    app.recording = false;
    app.elapsed_ticks = 0;
    app.audio_level = 0.0;
}
