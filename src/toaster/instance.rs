// SPDX-License-Identifier: MPL-2.0
//! Lifecycle of a single toast.
//!
//! An [`Instance`] moves through `Visible -> Closing -> Removed` and never
//! back. Every transition method is guarded: it returns `true` only when the
//! transition actually happened, which makes all of them idempotent.
//!
//! The auto-dismiss timer is a `DismissTimer` value owned by the instance.
//! Cancelling drops it, re-arming replaces it with a fresh full-length
//! timer, and dropping the instance drops it too, so a timer can never fire
//! for a toast that is already closing or gone.

use std::time::Instant;

use serde::Serialize;

use super::notification::{Content, NotificationId};
use crate::domain::toast::{DismissAfter, Position};

/// Display phase of a toast.
///
/// Phases are ordered: a toast only ever moves to a greater phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// On screen and interactive.
    Visible,
    /// Exit animation running; waiting for the surface to report completion.
    Closing,
    /// Terminal. The manager no longer holds the toast.
    Removed,
}

/// Why a toast started closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The auto-dismiss timer fired.
    Timeout,
    /// A caller or the close button asked for it.
    Requested,
    /// The external visibility flag flipped to hidden.
    Hidden,
    /// [`Manager::close_all`](super::Manager::close_all).
    CloseAll,
    /// A newer toast with the same key replaced it.
    Replaced,
}

/// Single-shot auto-dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DismissTimer {
    deadline: Instant,
}

/// One active or fading toast.
#[derive(Debug)]
pub struct Instance {
    id: NotificationId,
    content: Content,
    dismiss: DismissAfter,
    position: Position,
    z_index: i32,
    has_close_button: bool,
    key: Option<String>,
    phase: Phase,
    timer: Option<DismissTimer>,
    measured_height: Option<f32>,
    created_at: Instant,
}

/// Everything the manager decides about a toast before creating it.
#[derive(Debug)]
pub(crate) struct Placement {
    pub(crate) dismiss: DismissAfter,
    pub(crate) position: Position,
    pub(crate) z_index: i32,
    pub(crate) has_close_button: bool,
    pub(crate) key: Option<String>,
}

impl Instance {
    /// Creates a visible toast and arms its timer if it auto-dismisses.
    pub(crate) fn new(
        id: NotificationId,
        content: Content,
        placement: Placement,
        now: Instant,
    ) -> Self {
        let mut instance = Self {
            id,
            content,
            dismiss: placement.dismiss,
            position: placement.position,
            z_index: placement.z_index,
            has_close_button: placement.has_close_button,
            key: placement.key,
            phase: Phase::Visible,
            timer: None,
            measured_height: None,
            created_at: now,
        };
        instance.arm_timer(now);
        instance
    }

    fn arm_timer(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Visible {
            return false;
        }
        // A deadline past the end of representable time never fires.
        self.timer = self
            .dismiss
            .duration()
            .and_then(|duration| now.checked_add(duration))
            .map(|deadline| DismissTimer { deadline });
        self.timer.is_some()
    }

    /// Stacking order is owned by the manager and renumbered as the stack
    /// under this toast's anchor changes.
    pub(crate) fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }

    fn cancel_timer(&mut self) -> bool {
        self.timer.take().is_some()
    }

    /// Pauses auto-dismiss while the pointer is over the card.
    ///
    /// Returns `true` if a pending timer was cancelled.
    pub fn pointer_entered(&mut self) -> bool {
        self.phase == Phase::Visible && self.cancel_timer()
    }

    /// Restarts auto-dismiss when the pointer leaves the card.
    ///
    /// The new timer runs for the full configured duration, not for what
    /// was left when the pointer entered.
    pub fn pointer_left(&mut self, now: Instant) -> bool {
        self.arm_timer(now)
    }

    /// Starts closing. Returns `false` if the toast was not visible.
    pub fn close(&mut self) -> bool {
        if self.phase != Phase::Visible {
            return false;
        }
        self.cancel_timer();
        self.phase = Phase::Closing;
        true
    }

    /// Applies an external visibility flag.
    ///
    /// Only a flip from shown to hidden has an effect; a closing toast
    /// cannot be shown again.
    pub fn set_shown(&mut self, shown: bool) -> bool {
        !shown && self.close()
    }

    /// Returns true if the timer deadline has passed.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.timer.is_some_and(|timer| timer.deadline <= now)
    }

    /// Closes the toast if its timer is due.
    pub(crate) fn fire_if_due(&mut self, now: Instant) -> bool {
        self.is_due(now) && self.close()
    }

    /// Completes the exit sequence. Only honored while closing.
    pub(crate) fn finish_exit(&mut self) -> bool {
        if self.phase != Phase::Closing {
            return false;
        }
        self.phase = Phase::Removed;
        true
    }

    /// Records the height the surface measured after mounting the card.
    ///
    /// Non-finite or negative values are ignored.
    pub fn record_height(&mut self, height: f32) -> bool {
        if !height.is_finite() || height < 0.0 {
            return false;
        }
        self.measured_height = Some(height);
        true
    }

    /// Bottom margin that collapses the card's slot while it closes.
    #[must_use]
    pub fn margin_bottom(&self) -> f32 {
        match self.phase {
            Phase::Visible => 0.0,
            Phase::Closing | Phase::Removed => -self.measured_height.unwrap_or(0.0),
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns what the toast shows.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Returns the auto-dismiss policy.
    #[must_use]
    pub fn dismiss(&self) -> DismissAfter {
        self.dismiss
    }

    /// Returns the screen anchor.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the stacking order hint.
    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// Returns whether the card shows a close affordance.
    #[must_use]
    pub fn has_close_button(&self) -> bool {
        self.has_close_button
    }

    /// Returns the dedupe key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while the toast is visible.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.phase == Phase::Visible
    }

    /// Returns when the pending timer fires, if one is armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.map(|timer| timer.deadline)
    }

    /// Returns the last measured height.
    #[must_use]
    pub fn measured_height(&self) -> Option<f32> {
        self.measured_height
    }

    /// Returns when the toast was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::time::Duration;

    fn instance(dismiss: DismissAfter, now: Instant) -> Instance {
        Instance::new(
            NotificationId::from_raw(1),
            Content::new("Saved"),
            Placement {
                dismiss,
                position: Position::Top,
                z_index: 31,
                has_close_button: false,
                key: None,
            },
            now,
        )
    }

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    #[test]
    fn new_instance_is_visible_with_armed_timer() {
        let t0 = Instant::now();
        let toast = instance(DismissAfter::After(secs(3)), t0);

        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.deadline(), Some(t0 + secs(3)));
    }

    #[test]
    fn never_dismiss_arms_no_timer() {
        let t0 = Instant::now();
        let mut toast = instance(DismissAfter::Never, t0);

        assert_eq!(toast.deadline(), None);
        assert!(!toast.pointer_left(t0));
        assert!(!toast.fire_if_due(t0 + secs(3600)));
    }

    #[test]
    fn unrepresentable_deadline_never_fires() {
        let t0 = Instant::now();
        let mut toast = instance(DismissAfter::After(Duration::MAX), t0);

        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.deadline(), None);
        assert!(!toast.pointer_entered());
        assert!(!toast.pointer_left(t0 + secs(1)));
        assert!(toast.close());
    }

    #[test]
    fn timer_is_not_due_before_deadline() {
        let t0 = Instant::now();
        let toast = instance(DismissAfter::After(secs(3)), t0);

        assert!(!toast.is_due(t0 + Duration::from_millis(2999)));
        assert!(toast.is_due(t0 + secs(3)));
    }

    #[test]
    fn close_cancels_timer_and_is_idempotent() {
        let t0 = Instant::now();
        let mut toast = instance(DismissAfter::After(secs(3)), t0);

        assert!(toast.close());
        assert!(!toast.close());
        assert_eq!(toast.phase(), Phase::Closing);
        assert_eq!(toast.deadline(), None);
        assert!(!toast.fire_if_due(t0 + secs(10)));
    }

    #[test]
    fn pointer_leave_restarts_full_duration() {
        let t0 = Instant::now();
        let mut toast = instance(DismissAfter::After(secs(5)), t0);

        assert!(toast.pointer_entered());
        assert_eq!(toast.deadline(), None);

        assert!(toast.pointer_left(t0 + secs(2)));
        // Restart policy: 2s + full 5s, not the 4s that were left.
        assert_eq!(toast.deadline(), Some(t0 + secs(7)));
    }

    #[test]
    fn pointer_events_do_not_rearm_closing_toast() {
        let t0 = Instant::now();
        let mut toast = instance(DismissAfter::After(secs(5)), t0);
        toast.close();

        assert!(!toast.pointer_entered());
        assert!(!toast.pointer_left(t0 + secs(1)));
        assert_eq!(toast.deadline(), None);
    }

    #[test]
    fn visibility_flag_only_honors_real_flips() {
        let t0 = Instant::now();
        let mut toast = instance(DismissAfter::Never, t0);

        assert!(!toast.set_shown(true));
        assert!(toast.set_shown(false));
        assert!(!toast.set_shown(false));
        // No resurrection once closing.
        assert!(!toast.set_shown(true));
        assert_eq!(toast.phase(), Phase::Closing);
    }

    #[test]
    fn exit_only_finishes_from_closing() {
        let t0 = Instant::now();
        let mut toast = instance(DismissAfter::Never, t0);

        assert!(!toast.finish_exit());
        toast.close();
        assert!(toast.finish_exit());
        assert!(!toast.finish_exit());
        assert_eq!(toast.phase(), Phase::Removed);
    }

    #[test]
    fn margin_collapses_only_while_closing() {
        let t0 = Instant::now();
        let mut toast = instance(DismissAfter::Never, t0);
        assert!(toast.record_height(48.5));
        assert_abs_diff_eq!(toast.margin_bottom(), 0.0, epsilon = F32_EPSILON);

        toast.close();
        assert_abs_diff_eq!(toast.margin_bottom(), -48.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn invalid_heights_are_ignored() {
        let t0 = Instant::now();
        let mut toast = instance(DismissAfter::Never, t0);

        assert!(!toast.record_height(f32::NAN));
        assert!(!toast.record_height(-1.0));
        assert_eq!(toast.measured_height(), None);
    }
}
