//! # NavBar Component
//!
//! Bottom navigation between the three top-level panels. Hidden while a
//! conversation is open, so it can assume `selected_chat` is `None`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::state::Tab;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const NAV_HEIGHT: u16 = 3;

const TABS: [Tab; 3] = [Tab::Chats, Tab::Calls, Tab::Profile];

pub struct NavBar<'a> {
    pub active: Tab,
    pub theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(active: Tab, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 {
            return;
        }

        let [labels_area, hint_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(labels_area);
        for (tab, cell) in TABS.into_iter().zip(cells.iter()) {
            let style = if tab == self.active {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted)
            };
            let label = Paragraph::new(Line::from(Span::styled(tab.label(), style)))
                .alignment(Alignment::Center);
            frame.render_widget(label, *cell);
        }

        if hint_area.height > 0 {
            let hint = Paragraph::new(Line::from(Span::styled(
                "Tab switch · Ctrl+T theme · Ctrl+C quit",
                Style::default().fg(self.theme.muted).add_modifier(Modifier::DIM),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(hint, hint_area);
        }
    }
}

/// Map a click inside the nav area to a tab (thirds of the width).
pub fn hit_test_tab(col: u16, row: u16, area: Rect) -> Option<Tab> {
    if !area.contains((col, row).into()) {
        return None;
    }
    let third = (area.width / 3).max(1);
    let index = ((col - area.x) / third).min(2) as usize;
    Some(TABS[index])
}
