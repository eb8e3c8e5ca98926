// SPDX-License-Identifier: MPL-2.0
//! Driver behavior under paused tokio time. The runtime auto-advances the
//! clock whenever every task is idle, so timings are exact.

use std::time::Duration;

use tokio::time::Instant;
use toastline::config::Config;
use toastline::diagnostics::{DiagnosticsCollector, ToastEvent};
use toastline::driver::{TokioClock, Toaster};
use toastline::error::Error;
use toastline::toaster::{Content, Manager, Message, NotificationId, NotifyOptions, Phase};

/// Timer wheel resolution.
const SLACK: Duration = Duration::from_millis(2);

fn assert_elapsed(start: Instant, expected: Duration) {
    let elapsed = start.elapsed();
    assert!(
        elapsed >= expected && elapsed <= expected + SLACK,
        "expected ~{expected:?}, got {elapsed:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn saved_toast_closes_at_duration_and_is_removed_after_exit() {
    let (toaster, _driver) = Toaster::with_config(&Config::default());
    let start = Instant::now();

    let mut handle = toaster
        .success("Saved", NotifyOptions::new().duration_secs(3.0))
        .await
        .expect("driver running");
    assert!(handle.is_shown());

    tokio::time::sleep(Duration::from_millis(2990)).await;
    assert!(handle.is_shown());

    assert_eq!(handle.closing().await, Ok(Phase::Closing));
    assert_elapsed(start, Duration::from_secs(3));

    toaster
        .send(Message::ExitFinished(handle.id()))
        .expect("driver running");
    assert_eq!(handle.removed().await, Ok(Phase::Removed));
    assert!(toaster.views().await.expect("driver running").is_empty());
}

#[tokio::test(start_paused = true)]
async fn hover_restarts_full_duration() {
    let (toaster, _driver) = Toaster::with_config(&Config::default());
    let start = Instant::now();

    let mut handle = toaster
        .danger("Error", NotifyOptions::new().duration_secs(5.0))
        .await
        .expect("driver running");

    tokio::time::sleep(Duration::from_secs(1)).await;
    toaster.send(Message::PointerEntered(handle.id())).expect("send");
    tokio::time::sleep(Duration::from_secs(1)).await;
    toaster.send(Message::PointerLeft(handle.id())).expect("send");

    handle.closing().await.expect("toast closes");
    // 2s + the full 5s, not the original 5s mark.
    assert_elapsed(start, Duration::from_secs(7));
}

#[tokio::test(start_paused = true)]
async fn repeated_close_transitions_once() {
    let mut collector = DiagnosticsCollector::default();
    let mut manager = Manager::with_config(&Config::default(), TokioClock);
    manager.set_diagnostics(collector.handle());
    let (toaster, _driver) = Toaster::spawn(manager);

    let mut handle = toaster
        .notify(Content::new("Bye"), NotifyOptions::new().persistent())
        .await
        .expect("driver running");
    for _ in 0..3 {
        handle.close().expect("driver running");
    }
    handle.closing().await.expect("toast closes");
    // Make sure every close command has been processed.
    toaster.views().await.expect("driver running");

    collector.process_pending();
    let closings = collector
        .iter()
        .filter(|e| matches!(e.event, ToastEvent::Closing { .. }))
        .count();
    assert_eq!(closings, 1);
}

#[tokio::test(start_paused = true)]
async fn close_all_closes_every_toast() {
    let (toaster, _driver) = Toaster::with_config(&Config::default());
    let mut handles = Vec::new();
    for secs in [2.0, 4.0, 6.0] {
        handles.push(
            toaster
                .notify(Content::new("Pending"), NotifyOptions::new().duration_secs(secs))
                .await
                .expect("driver running"),
        );
    }

    toaster.close_all().expect("driver running");
    let views = toaster.views().await.expect("driver running");
    assert_eq!(views.len(), 3);
    assert!(views.iter().all(|view| view.phase == Phase::Closing));
    assert!(handles.iter().all(|handle| !handle.is_shown()));
}

#[tokio::test(start_paused = true)]
async fn newer_toast_stacks_above_older_at_top() {
    let (toaster, _driver) = Toaster::with_config(&Config::default());
    let a = toaster
        .notify(Content::new("A"), NotifyOptions::new())
        .await
        .expect("driver running");
    let b = toaster
        .notify(Content::new("B"), NotifyOptions::new())
        .await
        .expect("driver running");

    let views = toaster.views().await.expect("driver running");
    let z = |id: NotificationId| views.iter().find(|v| v.id == id).map(|v| v.z_index);
    assert!(z(b.id()) > z(a.id()));
}

#[tokio::test(start_paused = true)]
async fn huge_duration_keeps_driver_alive() {
    let (toaster, _driver) = Toaster::with_config(&Config::default());

    let sticky = toaster
        .notify(Content::new("Forever"), NotifyOptions::new().duration_secs(1e19))
        .await
        .expect("driver survives an unrepresentable deadline");
    let mut brief = toaster
        .notify(Content::new("Brief"), NotifyOptions::new().duration_secs(1.0))
        .await
        .expect("driver running");

    assert_eq!(brief.closing().await, Ok(Phase::Closing));
    assert!(sticky.is_shown());
    assert_eq!(toaster.views().await.map(|views| views.len()), Ok(2));
}

#[tokio::test(start_paused = true)]
async fn keyed_replace_publishes_closing_to_old_handle() {
    let (toaster, _driver) = Toaster::with_config(&Config::default());

    let mut first = toaster
        .notify(
            Content::new("Uploading 1/2"),
            NotifyOptions::new().persistent().key("upload"),
        )
        .await
        .expect("driver running");
    let second = toaster
        .notify(
            Content::new("Uploading 2/2"),
            NotifyOptions::new().persistent().key("upload"),
        )
        .await
        .expect("driver running");

    assert_eq!(first.closing().await, Ok(Phase::Closing));
    assert!(second.is_shown());
}

#[tokio::test(start_paused = true)]
async fn removed_handle_resolves_after_its_toast_is_forgotten() {
    let (toaster, _driver) = Toaster::with_config(&Config::default());
    let mut handle = toaster
        .notify(Content::new("Gone"), NotifyOptions::new().persistent())
        .await
        .expect("driver running");
    let mut late = handle.clone();

    handle.close().expect("driver running");
    toaster
        .send(Message::ExitFinished(handle.id()))
        .expect("driver running");
    // Once this returns the driver has published Removed and dropped the
    // toast's phase sender.
    assert!(toaster.views().await.expect("driver running").is_empty());

    assert_eq!(handle.removed().await, Ok(Phase::Removed));
    assert_eq!(late.wait_for(Phase::Closing).await, Ok(Phase::Removed));
    assert_eq!(late.phase(), Phase::Removed);
    // The driver itself keeps running.
    assert!(toaster
        .notify(Content::new("Next"), NotifyOptions::new())
        .await
        .is_ok());
}

#[tokio::test(start_paused = true)]
async fn aborted_driver_reports_closed() {
    let (toaster, driver) = Toaster::with_config(&Config::default());
    driver.abort();
    let _ = driver.await;

    let result = toaster.notify(Content::new("Lost"), NotifyOptions::new()).await;
    assert!(matches!(result, Err(Error::DriverClosed)));
    assert_eq!(toaster.close_all(), Err(Error::DriverClosed));
}
