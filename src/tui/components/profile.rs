//! Static placeholder panel for the Profile tab: a fixed list of
//! settings rows. None of the rows are actionable in the mockup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

const ROWS: [(&str, &str); 5] = [
    ("Account", "Name, phone number"),
    ("Notifications", "Message and call alerts"),
    ("Privacy", "Who can see your activity"),
    ("Storage", "Voice message cache"),
    ("About VoiceChat", "Version and licenses"),
];

pub struct ProfilePanel<'a> {
    pub theme: &'a Theme,
}

impl<'a> ProfilePanel<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Component for ProfilePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);
        let detail_style = Style::default().fg(self.theme.muted);

        let mut lines = vec![Line::default()];
        for (title, detail) in ROWS {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{title:<18}"), title_style),
                Span::styled(detail, detail_style),
            ]));
            lines.push(Line::default());
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_settings_rows() {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::light();
        let mut panel = ProfilePanel::new(&theme);

        terminal.draw(|f| panel.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        for (title, _) in ROWS {
            assert!(text.contains(title), "missing row {title}");
        }
    }
}
