//! # SearchBar Component
//!
//! Displays the chat list filter query. The query itself lives in core
//! state (the filter needs it), so unlike a free-standing input box this
//! component is a pure view: the event loop turns keystrokes into
//! `Action::QueryChar` / `Action::QueryBackspace` and the bar just shows
//! the result with a cursor.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct SearchBar<'a> {
    /// Current filter text (prop from core state)
    pub query: &'a str,
    pub theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str, theme: &'a Theme) -> Self {
        Self { query, theme }
    }
}

impl Component for SearchBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border))
            .title("Search");

        let input = Paragraph::new(self.query)
            .block(block)
            .style(Style::default().fg(self.theme.fg));

        frame.render_widget(input, area);

        // Cursor sits right after the query text, clamped to the block
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + 1 + self.query.width() as u16).min(max_x);
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}
