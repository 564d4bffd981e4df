//! End-to-end flows through the reducer, plus wall-clock ticker tests
//! under paused tokio time.

use std::time::Duration;

use voicechat::core::action::{Action, Effect, update};
use voicechat::core::recording::format_elapsed;
use voicechat::core::state::{App, Tab};
use voicechat::tui::spawn_ticker;

/// The whole user journey: browse, filter, open a chat, record, send,
/// go back. Mirrors the original flow end to end.
#[test]
fn full_journey_through_reducer() {
    let mut app = App::new();

    // Filter down to one chat
    for c in "volk".chars() {
        update(&mut app, Action::QueryChar(c));
    }
    let filtered = app.filtered_chats();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 3);

    // Open it and start recording
    let id = filtered[0].id;
    assert_eq!(update(&mut app, Action::SelectChat(id)), Effect::None);
    assert_eq!(update(&mut app, Action::StartRecording), Effect::StartTicker);

    // Simulate two seconds of ticks
    for _ in 0..20 {
        update(&mut app, Action::RecordingTick { level: 60.0 });
    }
    assert_eq!(format_elapsed(app.elapsed_ticks), "0:02");

    // "Send" is the same transition as cancel; content discarded
    assert_eq!(update(&mut app, Action::StopRecording), Effect::StopTicker);
    assert_eq!(format_elapsed(app.elapsed_ticks), "0:00");

    // Back to the list; query survives the round trip
    assert_eq!(update(&mut app, Action::Back), Effect::None);
    assert_eq!(app.selected_chat, None);
    assert_eq!(app.active_tab, Tab::Chats);
    assert_eq!(app.query, "volk");
}

#[test]
fn back_returns_to_the_tab_that_was_active() {
    let mut app = App::new();
    update(&mut app, Action::SwitchTab(Tab::Calls));
    update(&mut app, Action::SelectChat(3));
    update(&mut app, Action::Back);
    assert_eq!(app.active_tab, Tab::Calls);
    assert_eq!(app.selected_chat, None);
}

#[tokio::test(start_paused = true)]
async fn ticker_fires_ten_times_per_second() {
    let (tx, rx) = std::sync::mpsc::channel();
    let handle = spawn_ticker(100, tx);

    // One second elapsed: exactly 10 ticks, none at t=0
    tokio::time::sleep(Duration::from_millis(1005)).await;
    let ticks: Vec<Action> = rx.try_iter().collect();
    assert_eq!(ticks.len(), 10);
    for tick in &ticks {
        match tick {
            Action::RecordingTick { level } => {
                assert!((0.0..100.0).contains(level), "level out of range: {level}");
            }
            other => panic!("unexpected action from ticker: {other:?}"),
        }
    }

    handle.abort();
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(rx.try_iter().count(), 0, "aborted ticker kept firing");
}

#[tokio::test(start_paused = true)]
async fn ten_seconds_of_ticks_reads_ten_seconds() {
    let mut app = App::new();
    update(&mut app, Action::SelectChat(1));
    assert_eq!(update(&mut app, Action::StartRecording), Effect::StartTicker);

    let (tx, rx) = std::sync::mpsc::channel();
    let handle = spawn_ticker(100, tx);

    tokio::time::sleep(Duration::from_millis(10_050)).await;
    handle.abort();

    for action in rx.try_iter() {
        update(&mut app, action);
    }
    assert_eq!(format_elapsed(app.elapsed_ticks), "0:10");
}

#[tokio::test(start_paused = true)]
async fn stale_ticks_after_stop_do_not_move_the_label() {
    let mut app = App::new();
    update(&mut app, Action::SelectChat(1));
    update(&mut app, Action::StartRecording);

    let (tx, rx) = std::sync::mpsc::channel();
    let handle = spawn_ticker(100, tx);
    tokio::time::sleep(Duration::from_millis(350)).await;

    // Stop while ticks are still queued in the channel
    assert_eq!(update(&mut app, Action::StopRecording), Effect::StopTicker);
    handle.abort();

    for action in rx.try_iter() {
        update(&mut app, action);
    }
    assert_eq!(app.elapsed_ticks, 0);
    assert_eq!(format_elapsed(app.elapsed_ticks), "0:00");
}
