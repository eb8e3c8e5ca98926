// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;

use tempfile::tempdir;
use toastline::config::{self, Config};
use toastline::diagnostics::{DiagnosticsCollector, ToastEvent};
use toastline::domain::toast::Position;
use toastline::toaster::{
    CloseReason, Content, Manager, ManualClock, Message, NotifyOptions, Phase,
};

#[test]
fn test_saved_toast_lifecycle_through_messages() {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock.clone());

    let id = manager.notify(Content::new("Saved"), NotifyOptions::new().duration_secs(3.0));
    assert_eq!(manager.phase(id), Phase::Visible);

    clock.set_elapsed(Duration::from_secs(3));
    manager.update(Message::Tick);
    assert_eq!(manager.phase(id), Phase::Closing);

    let exiting: Vec<_> = manager.views().into_iter().filter(|v| v.is_exiting()).collect();
    assert_eq!(exiting.len(), 1);

    manager.update(Message::ExitFinished(id));
    assert_eq!(manager.phase(id), Phase::Removed);
    assert_eq!(manager.views().len(), 0);

    // Late signals for the removed toast change nothing.
    manager.update(Message::ExitFinished(id));
    manager.update(Message::Dismiss(id));
    manager.remove(id);
    assert!(manager.is_empty());
}

#[test]
fn test_settings_file_drives_manager_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let settings = Config {
        default_duration_secs: Some(0.0),
        default_position: Some("bottom-left".to_string()),
        ..Config::default()
    };
    config::save_to_path(&settings, &path).expect("Failed to write settings");
    let loaded = config::load_from_path(&path).expect("Failed to load settings");

    let clock = ManualClock::new();
    let mut manager = Manager::with_config(&loaded, clock.clone());
    let id = manager.notify(Content::new("Sticky"), NotifyOptions::new());

    let toast = manager.get(id).expect("toast exists");
    assert_eq!(toast.position(), Position::BottomLeft);
    assert_eq!(toast.deadline(), None);

    clock.advance(Duration::from_secs(600));
    assert_eq!(manager.tick(), 0);
    assert!(manager.is_shown(id));
}

#[test]
fn test_close_all_is_logged_per_toast() {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(clock);
    let mut collector = DiagnosticsCollector::default();
    manager.set_diagnostics(collector.handle());

    for title in ["one", "two", "three"] {
        manager.notify(Content::new(title), NotifyOptions::new().duration_secs(4.0));
    }
    assert_eq!(manager.close_all(), 3);
    // Already closing: nothing more to do.
    assert_eq!(manager.close_all(), 0);

    collector.process_pending();
    let close_all_events = collector
        .iter()
        .filter(|e| {
            matches!(
                e.event,
                ToastEvent::Closing {
                    reason: CloseReason::CloseAll,
                    ..
                }
            )
        })
        .count();
    assert_eq!(close_all_events, 3);
}
