//! # Frame Composition
//!
//! `draw_ui` turns the current state into one frame. Exactly one of the
//! four view modes renders in the main area: the conversation whenever a
//! chat is selected (it wins over the tab), otherwise the panel for the
//! active tab. The nav bar only exists outside the conversation.
//!
//! The hit-test helpers recompute the same layout so mouse coordinates
//! can be resolved without a frame in hand.

use crate::core::state::{App, Tab};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CallsPanel, ChatList, Conversation, Header, NAV_HEIGHT, NavBar, ProfilePanel, ROW_HEIGHT,
    SearchBar, nav_bar,
};
use crate::tui::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the search bar in the Chats tab.
pub const SEARCH_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let theme = Theme::for_mode(app.dark_mode);
    let in_conversation = app.selected_chat.is_some();
    let [header_area, main_area, nav_area] = layout_areas(frame.area(), in_conversation);

    let mut header = Header::new(app.status_message.clone(), app.dark_mode, &theme);
    header.render(frame, header_area);

    if let Some(id) = app.selected_chat {
        let mut view = Conversation {
            chat: app.chat_by_id(id),
            recording: app.recording,
            elapsed_ticks: app.elapsed_ticks,
            audio_level: app.audio_level,
            pulse_value: tui.pulse_value,
            waveform_bars: tui.waveform_bars,
            state: &tui.conversation,
            theme: &theme,
        };
        view.render(frame, main_area);
        return;
    }

    match app.active_tab {
        Tab::Chats => {
            let [search_area, list_area] =
                Layout::vertical([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(0)])
                    .areas(main_area);
            let mut search = SearchBar::new(&app.query, &theme);
            search.render(frame, search_area);
            let mut list = ChatList::new(
                &mut tui.chat_list,
                app.filtered_chats(),
                !app.query.is_empty(),
                &theme,
            );
            list.render(frame, list_area);
        }
        Tab::Calls => {
            let mut panel = CallsPanel::new(&theme);
            panel.render(frame, main_area);
        }
        Tab::Profile => {
            let mut panel = ProfilePanel::new(&theme);
            panel.render(frame, main_area);
        }
    }

    let mut nav = NavBar::new(app.active_tab, &theme);
    nav.render(frame, nav_area);
}

fn layout_areas(frame_area: Rect, in_conversation: bool) -> [Rect; 3] {
    use Constraint::{Length, Min};
    let nav_height = if in_conversation { 0 } else { NAV_HEIGHT };
    Layout::vertical([Length(1), Min(0), Length(nav_height)]).areas(frame_area)
}

/// Hit test: which chat row (if any) sits at this screen Y.
/// Only meaningful in the Chats tab with no conversation open.
pub fn hit_test_chat_row(
    screen_y: u16,
    frame_area: Rect,
    scroll_offset_y: u16,
    row_count: usize,
) -> Option<usize> {
    let [_header_area, main_area, _nav_area] = layout_areas(frame_area, false);
    let list_y = main_area.y + SEARCH_HEIGHT;
    let list_height = main_area.height.saturating_sub(SEARCH_HEIGHT);

    if screen_y < list_y || screen_y >= list_y + list_height {
        return None;
    }

    let content_y = (screen_y - list_y) + scroll_offset_y;
    let index = (content_y / ROW_HEIGHT) as usize;
    (index < row_count).then_some(index)
}

/// Hit test: which nav tab (if any) sits at this screen position.
pub fn hit_test_nav(col: u16, row: u16, frame_area: Rect) -> Option<Tab> {
    let [_header_area, _main_area, nav_area] = layout_areas(frame_area, false);
    nav_bar::hit_test_tab(col, row, nav_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_app(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::for_test();
        terminal.draw(|f| draw_ui(f, app, &mut tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_chat_list_view() {
        let app = App::new();
        let text = render_app(&app);
        assert!(text.contains("VoiceChat"));
        assert!(text.contains("Search"));
        assert!(text.contains("Anna Smirnova"));
        // Nav bar present outside a conversation
        assert!(text.contains("Profile"));
    }

    #[test]
    fn test_conversation_hides_nav_bar() {
        let mut app = App::new();
        update(&mut app, Action::SelectChat(3));
        let text = render_app(&app);
        assert!(text.contains("Elena Volkova"));
        assert!(text.contains("online"));
        assert!(!text.contains("Profile"));
        assert!(!text.contains("Search"));
    }

    #[test]
    fn test_unknown_chat_id_renders_safely() {
        let mut app = App::new();
        update(&mut app, Action::SelectChat(42));
        let text = render_app(&app);
        assert!(text.contains("← Esc"));
        assert!(!text.contains("online"));
    }

    #[test]
    fn test_empty_search_result_shows_placeholder() {
        let mut app = App::new();
        for c in "zzz".chars() {
            update(&mut app, Action::QueryChar(c));
        }
        let text = render_app(&app);
        assert!(text.contains("No chats found"));
        assert!(!text.contains("Anna Smirnova"));
    }

    #[test]
    fn test_calls_and_profile_tabs() {
        let mut app = App::new();
        update(&mut app, Action::SwitchTab(Tab::Calls));
        assert!(render_app(&app).contains("No calls yet"));
        update(&mut app, Action::SwitchTab(Tab::Profile));
        assert!(render_app(&app).contains("Notifications"));
    }

    #[test]
    fn test_hit_test_chat_row() {
        let frame_area = Rect::new(0, 0, 80, 24);
        // Header (1) + search (3): list starts at y = 4. Rows are 3 tall.
        assert_eq!(hit_test_chat_row(4, frame_area, 0, 5), Some(0));
        assert_eq!(hit_test_chat_row(6, frame_area, 0, 5), Some(0));
        assert_eq!(hit_test_chat_row(7, frame_area, 0, 5), Some(1));
        // Scrolled by one row, the same screen line hits the next row
        assert_eq!(hit_test_chat_row(4, frame_area, 3, 5), Some(1));
        // Above the list and past the last row
        assert_eq!(hit_test_chat_row(2, frame_area, 0, 5), None);
        assert_eq!(hit_test_chat_row(4, frame_area, 0, 0), None);
    }

    #[test]
    fn test_hit_test_nav() {
        let frame_area = Rect::new(0, 0, 80, 24);
        // Nav occupies the last NAV_HEIGHT rows
        assert_eq!(hit_test_nav(10, 22, frame_area), Some(Tab::Chats));
        assert_eq!(hit_test_nav(40, 22, frame_area), Some(Tab::Calls));
        assert_eq!(hit_test_nav(75, 22, frame_area), Some(Tab::Profile));
        assert_eq!(hit_test_nav(40, 10, frame_area), None);
    }
}
