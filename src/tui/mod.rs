//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Recording**: draws every ~80ms so the waveform and REC pulse
//!   animate smoothly between ticks.
//! - **Idle**: sleeps up to 500ms, only redraws on events, ticker
//!   actions, or terminal resize.
//!
//! ## The Recording Ticker
//!
//! The only background task. `Effect::StartTicker` spawns a tokio task
//! that sends `Action::RecordingTick` over the mpsc channel every
//! `tick_ms`; its `AbortHandle` lives in the loop. Every transition out
//! of recording aborts the handle *before* any new ticker can be armed,
//! so the counters are never driven by two timers at once. A tick that
//! was already in the channel when the ticker died is ignored by the
//! reducer.

mod component;
mod components;
mod event;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::recording;
use crate::core::state::{App, Tab};
use crate::tui::component::EventHandler;
use crate::tui::components::{ChatListState, ConversationState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub chat_list: ChatListState,
    pub conversation: ConversationState,
    // Animation state
    pub pulse_value: f32,
    // Bars in the live waveform (from config)
    pub waveform_bars: u16,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            chat_list: ChatListState::new(),
            conversation: ConversationState::new(),
            pulse_value: 0.0,
            waveform_bars: config.waveform_bars,
        }
    }

    #[cfg(test)]
    pub fn for_test() -> Self {
        Self::new(&crate::core::config::resolve(
            &crate::core::config::VoiceChatConfig::default(),
            None,
        ))
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            Show,                        // Show cursor for the search bar
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse capture, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for ticks from the recording ticker task
    let (tx, rx) = mpsc::channel();

    // Abort handle for the armed ticker (None = idle)
    let mut ticker_handle: Option<AbortHandle> = None;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // The waveform and REC pulse animate while recording
        let animating = app.recording;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of view
            if matches!(event, TuiEvent::ForceQuit) {
                should_quit |=
                    run_effect(update(&mut app, Action::Quit), &mut ticker_handle, &config, &tx);
                continue;
            }

            // Ctrl+T toggles the theme from anywhere
            if matches!(event, TuiEvent::ToggleTheme) {
                should_quit |= run_effect(
                    update(&mut app, Action::ToggleTheme),
                    &mut ticker_handle,
                    &config,
                    &tx,
                );
                continue;
            }

            // Conversation view takes precedence over the tabs
            if app.selected_chat.is_some() {
                let action = match event {
                    // Esc cancels an active recording, otherwise goes back
                    TuiEvent::Escape if app.recording => Some(Action::StopRecording),
                    TuiEvent::Escape => Some(Action::Back),
                    // Space toggles: start, or stop-and-"send"
                    TuiEvent::InputChar(' ') if app.recording => Some(Action::StopRecording),
                    TuiEvent::InputChar(' ') => Some(Action::StartRecording),
                    TuiEvent::InputChar('x') | TuiEvent::InputChar('X') if app.recording => {
                        Some(Action::StopRecording)
                    }
                    _ => None,
                };
                if let Some(action) = action {
                    should_quit |= run_effect(
                        update(&mut app, action),
                        &mut ticker_handle,
                        &config,
                        &tx,
                    );
                }
                continue;
            }

            match app.active_tab {
                Tab::Chats => {
                    match event {
                        TuiEvent::Submit => {
                            let id = app
                                .filtered_chats()
                                .get(tui.chat_list.selected)
                                .map(|c| c.id);
                            if let Some(id) = id {
                                should_quit |= run_effect(
                                    update(&mut app, Action::SelectChat(id)),
                                    &mut ticker_handle,
                                    &config,
                                    &tx,
                                );
                                // Fresh placeholder waveforms for this open
                                tui.conversation = ConversationState::new();
                            }
                        }
                        TuiEvent::CursorUp => {
                            tui.chat_list.selected = tui.chat_list.selected.saturating_sub(1);
                        }
                        TuiEvent::CursorDown => {
                            let len = app.filtered_chats().len();
                            if len > 0 && tui.chat_list.selected + 1 < len {
                                tui.chat_list.selected += 1;
                            }
                        }
                        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
                            tui.chat_list.handle_event(&event);
                        }
                        TuiEvent::MouseMove(_col, row) => {
                            let frame_area = terminal.get_frame().area();
                            let offset = tui.chat_list.scroll_state.offset().y;
                            tui.chat_list.hovered = ui::hit_test_chat_row(
                                row,
                                frame_area,
                                offset,
                                app.filtered_chats().len(),
                            );
                        }
                        TuiEvent::MouseClick(col, row) => {
                            let frame_area = terminal.get_frame().area();
                            if let Some(tab) = ui::hit_test_nav(col, row, frame_area) {
                                should_quit |= run_effect(
                                    update(&mut app, Action::SwitchTab(tab)),
                                    &mut ticker_handle,
                                    &config,
                                    &tx,
                                );
                            } else {
                                let offset = tui.chat_list.scroll_state.offset().y;
                                let hit = ui::hit_test_chat_row(
                                    row,
                                    frame_area,
                                    offset,
                                    app.filtered_chats().len(),
                                );
                                if let Some(index) = hit {
                                    tui.chat_list.selected = index;
                                    let id = app.filtered_chats().get(index).map(|c| c.id);
                                    if let Some(id) = id {
                                        should_quit |= run_effect(
                                            update(&mut app, Action::SelectChat(id)),
                                            &mut ticker_handle,
                                            &config,
                                            &tx,
                                        );
                                        tui.conversation = ConversationState::new();
                                    }
                                }
                            }
                        }
                        // Esc clears the filter first; quitting stays on Ctrl+C
                        TuiEvent::Escape => {
                            if !app.query.is_empty() {
                                should_quit |= run_effect(
                                    update(&mut app, Action::ClearQuery),
                                    &mut ticker_handle,
                                    &config,
                                    &tx,
                                );
                            }
                        }
                        TuiEvent::Backspace => {
                            should_quit |= run_effect(
                                update(&mut app, Action::QueryBackspace),
                                &mut ticker_handle,
                                &config,
                                &tx,
                            );
                        }
                        TuiEvent::TabKey => {
                            let next_tab = app.active_tab.next();
                            should_quit |= run_effect(
                                update(&mut app, Action::SwitchTab(next_tab)),
                                &mut ticker_handle,
                                &config,
                                &tx,
                            );
                        }
                        // Everything printable edits the search query
                        TuiEvent::InputChar(c) => {
                            should_quit |= run_effect(
                                update(&mut app, Action::QueryChar(c)),
                                &mut ticker_handle,
                                &config,
                                &tx,
                            );
                        }
                        _ => {}
                    }
                }
                Tab::Calls | Tab::Profile => {
                    let action = match event {
                        TuiEvent::TabKey => Some(Action::SwitchTab(app.active_tab.next())),
                        TuiEvent::InputChar('1') => Some(Action::SwitchTab(Tab::Chats)),
                        TuiEvent::InputChar('2') => Some(Action::SwitchTab(Tab::Calls)),
                        TuiEvent::InputChar('3') => Some(Action::SwitchTab(Tab::Profile)),
                        TuiEvent::MouseClick(col, row) => {
                            let frame_area = terminal.get_frame().area();
                            ui::hit_test_nav(col, row, frame_area).map(Action::SwitchTab)
                        }
                        _ => None,
                    };
                    if let Some(action) = action {
                        should_quit |= run_effect(
                            update(&mut app, action),
                            &mut ticker_handle,
                            &config,
                            &tx,
                        );
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Ticks from the background ticker task
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            should_quit |= run_effect(update(&mut app, action), &mut ticker_handle, &config, &tx);
        }

        if should_quit {
            break;
        }
    }

    // No ticker may outlive the UI
    if let Some(handle) = ticker_handle.take() {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

/// Execute the effect returned by the reducer. Returns true on quit.
fn run_effect(
    effect: Effect,
    ticker: &mut Option<AbortHandle>,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::StartTicker => {
            // Tear down any previous ticker before arming a new one, so
            // counters can never be incremented at compounding rates
            if let Some(handle) = ticker.take() {
                handle.abort();
            }
            *ticker = Some(spawn_ticker(config.tick_ms, tx.clone()));
            false
        }
        Effect::StopTicker => {
            if let Some(handle) = ticker.take() {
                handle.abort();
            }
            false
        }
        Effect::None => false,
    }
}

/// Spawn the repeating recording ticker. Each period it draws a fresh
/// audio level and sends one `RecordingTick` to the event loop.
pub fn spawn_ticker(tick_ms: u64, tx: mpsc::Sender<Action>) -> AbortHandle {
    info!("Arming recording ticker ({} ms period)", tick_ms);
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(tick_ms));
        // The first interval tick completes immediately; consume it so
        // the first counter increment lands one full period after arming.
        interval.tick().await;
        loop {
            interval.tick().await;
            let level = recording::random_level();
            if tx.send(Action::RecordingTick { level }).is_err() {
                warn!("Failed to send recording tick: receiver dropped");
                return;
            }
        }
    });
    handle.abort_handle()
}
