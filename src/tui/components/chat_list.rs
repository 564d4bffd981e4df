//! # ChatList Component
//!
//! Scrollable list of conversation rows, filtered by the search query.
//!
//! ## Responsibilities
//!
//! - Display the filtered roster in fixture order
//! - Manage scrolling and keep the selection cursor visible
//! - Render the "No chats found" placeholder for empty results
//!
//! ## Architecture
//!
//! `ChatList` is a transient component (created each frame) that wraps
//! `&'a mut ChatListState` (persistent state) and the filtered chats
//! (props). Row rendering lives in `ChatRow`, a plain `Widget` drawn
//! into the scroll view.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::core::chat::{Chat, initials};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Rows are two content lines plus a spacer.
pub const ROW_HEIGHT: u16 = 3;

/// Scroll and selection state for the chat list.
/// Must be persisted in the parent TuiState.
pub struct ChatListState {
    pub scroll_state: ScrollViewState,
    /// Selection cursor, as an index into the *filtered* rows.
    pub selected: usize,
    /// Row under the mouse, if any.
    pub hovered: Option<usize>,
}

impl ChatListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: 0,
            hovered: None,
        }
    }

    /// Scroll so the selected row is fully inside the viewport.
    fn scroll_to_selected(&mut self, viewport_height: u16) {
        let row_top = self.selected as u16 * ROW_HEIGHT;
        let row_bottom = row_top + ROW_HEIGHT;
        let offset_y = self.scroll_state.offset().y;

        if row_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: row_top });
        } else if row_bottom > offset_y + viewport_height {
            self.scroll_state.set_offset(Position {
                x: 0,
                y: row_bottom.saturating_sub(viewport_height),
            });
        }
    }
}

impl Default for ChatListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ChatListState {
    type Event = ();

    /// Wheel scrolling. Cursor movement is handled by the event loop,
    /// which knows the filtered row count.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                Some(())
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                Some(())
            }
            _ => None,
        }
    }
}

/// Filterable conversation list.
/// Created fresh each frame with references to state and data.
pub struct ChatList<'a> {
    pub state: &'a mut ChatListState,
    /// The filtered roster, in fixture order.
    pub chats: Vec<&'a Chat>,
    /// True when a non-empty query produced this list (changes the
    /// empty-state copy).
    pub filtering: bool,
    pub theme: &'a Theme,
}

impl<'a> ChatList<'a> {
    pub fn new(
        state: &'a mut ChatListState,
        chats: Vec<&'a Chat>,
        filtering: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            chats,
            filtering,
            theme,
        }
    }
}

impl Component for ChatList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.chats.is_empty() {
            render_empty_state(frame, area, self.filtering, self.theme);
            return;
        }

        // The query may have shrunk the list since the cursor last moved
        self.state.selected = self.state.selected.min(self.chats.len() - 1);

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let total_height = self.chats.len() as u16 * ROW_HEIGHT;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, chat) in self.chats.iter().enumerate() {
            let row_rect = Rect::new(0, index as u16 * ROW_HEIGHT, content_width, ROW_HEIGHT);
            let row = ChatRow {
                chat,
                is_selected: index == self.state.selected,
                is_hovered: self.state.hovered == Some(index),
                theme: self.theme,
            };
            scroll_view.render_widget(row, row_rect);
        }

        self.state.scroll_to_selected(area.height);
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

fn render_empty_state(frame: &mut Frame, area: Rect, filtering: bool, theme: &Theme) {
    let (title, hint) = if filtering {
        ("No chats found", "Try a different name")
    } else {
        ("No chats yet", "")
    };

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            title,
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
    ];
    if !hint.is_empty() {
        lines.push(Line::from(Span::styled(hint, Style::default().fg(theme.muted))));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// A single conversation row: initials, name, time label on the first
/// line; voice marker, preview, unread badge on the second.
struct ChatRow<'a> {
    chat: &'a Chat,
    is_selected: bool,
    is_hovered: bool,
    theme: &'a Theme,
}

impl Widget for ChatRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }

        if self.is_selected || self.is_hovered {
            let highlight = Rect::new(area.x, area.y, area.width, 2);
            buf.set_style(highlight, Style::default().bg(self.theme.highlight_bg));
        }

        let name_style = if self.is_selected {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.fg).add_modifier(Modifier::BOLD)
        };
        let muted = Style::default().fg(self.theme.muted);
        let accent = Style::default().fg(self.theme.accent);

        // Right-aligned cells go first so we know how much room is left
        let time_x = area
            .right()
            .saturating_sub(self.chat.time.width() as u16 + 1);
        buf.set_span(time_x, area.y, &Span::styled(self.chat.time.as_str(), muted), area.width);

        let name_max = time_x.saturating_sub(area.x + 6) as usize;
        let name = truncate_to_width(&self.chat.name, name_max);
        let first = Line::from(vec![
            Span::styled(format!(" {:<3}", initials(&self.chat.name)), accent.add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(name, name_style),
        ]);
        buf.set_line(area.x, area.y, &first, area.width);

        let mut badge_x = area.right();
        if self.chat.unread > 0 {
            let badge = format!(" {} ", self.chat.unread);
            badge_x = area.right().saturating_sub(badge.width() as u16 + 1);
            let badge_style = Style::default()
                .fg(self.theme.on_accent)
                .bg(self.theme.accent)
                .add_modifier(Modifier::BOLD);
            buf.set_span(badge_x, area.y + 1, &Span::styled(badge, badge_style), area.width);
        }

        let marker = if self.chat.is_voice { "♪ " } else { "" };
        let preview_max = badge_x.saturating_sub(area.x + 7) as usize;
        let preview = truncate_to_width(&self.chat.last_message, preview_max);
        let second = Line::from(vec![
            Span::raw("     "),
            Span::styled(marker, accent),
            Span::styled(preview, muted),
        ]);
        buf.set_line(area.x, area.y + 1, &second, area.width);
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chat;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_list(chats: Vec<&Chat>, filtering: bool, selected: usize) -> String {
        let backend = TestBackend::new(60, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::light();
        let mut state = ChatListState::new();
        state.selected = selected;

        terminal
            .draw(|f| {
                let mut list = ChatList::new(&mut state, chats, filtering, &theme);
                list.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_all_fixture_rows() {
        let roster = chat::roster();
        let text = render_list(roster.iter().collect(), false, 0);
        for name in [
            "Anna Smirnova",
            "Maxim Petrov",
            "Elena Volkova",
            "Dmitry Kozlov",
            "Olga Novikova",
        ] {
            assert!(text.contains(name), "missing row for {name}");
        }
        assert!(text.contains("Voice message"));
        assert!(text.contains("14:23"));
        // Unread badges for chats 1 and 3
        assert!(text.contains(" 2 "));
        assert!(text.contains(" 1 "));
    }

    #[test]
    fn test_empty_filter_result_shows_placeholder() {
        let text = render_list(Vec::new(), true, 0);
        assert!(text.contains("No chats found"));
        assert!(text.contains("Try a different name"));
        assert!(!text.contains("Anna"));
    }

    #[test]
    fn test_selection_clamped_to_filtered_rows() {
        let roster = chat::roster();
        let filtered = chat::filter(&roster, "anna");
        let backend = TestBackend::new(60, 18);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::light();
        let mut state = ChatListState::new();
        state.selected = 4; // stale cursor from the unfiltered list

        terminal
            .draw(|f| {
                let mut list = ChatList::new(&mut state, filtered, true, &theme);
                list.render(f, f.area());
            })
            .unwrap();

        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_scroll_events_handled() {
        let mut state = ChatListState::new();
        assert!(state.handle_event(&TuiEvent::ScrollDown).is_some());
        assert!(state.handle_event(&TuiEvent::ScrollUp).is_some());
        assert!(state.handle_event(&TuiEvent::Submit).is_none());
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a long chat name", 7), "a long…");
        assert_eq!(truncate_to_width("abc", 3), "abc");
    }
}
