// SPDX-License-Identifier: MPL-2.0
//! Toast registry and lifecycle dispatch.
//!
//! The `Manager` owns every live [`Instance`] in one insertion-ordered map.
//! It is constructed explicitly by whatever owns the notification surface;
//! there is no global state. All transitions run synchronously on the
//! caller's thread, so a close always cancels its timer before any later
//! tick or exit signal is processed.

use std::time::Instant;

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::clock::{Clock, SystemClock};
use super::instance::{CloseReason, Instance, Phase, Placement};
use super::notification::{Content, NotificationId, NotifyOptions};
use super::view::ToastView;
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, ToastEvent};
use crate::domain::toast::{DismissAfter, Intent, Position};

/// Messages a rendering surface or host loop feeds into the manager.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Close a toast (close button or explicit request).
    Dismiss(NotificationId),
    /// The pointer entered a card.
    PointerEntered(NotificationId),
    /// The pointer left a card.
    PointerLeft(NotificationId),
    /// An external visibility flag changed.
    VisibilityChanged(NotificationId, bool),
    /// The surface measured a card after mounting it.
    HeightMeasured(NotificationId, f32),
    /// The surface finished a card's exit animation.
    ExitFinished(NotificationId),
    /// Fire every auto-dismiss timer that is due.
    Tick,
}

/// Manages live toasts and their lifecycles.
#[derive(Debug)]
pub struct Manager<C: Clock = SystemClock> {
    clock: C,
    registry: IndexMap<NotificationId, Instance>,
    next_id: u64,
    default_dismiss: DismissAfter,
    default_position: Position,
    base_z_index: i32,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager<SystemClock> {
    /// Creates an empty manager with default settings and wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&Config::default(), SystemClock)
    }
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Manager<C> {
    /// Creates an empty manager with default settings and the given clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self::with_config(&Config::default(), clock)
    }

    /// Creates an empty manager from settings and a clock.
    #[must_use]
    pub fn with_config(config: &Config, clock: C) -> Self {
        Self {
            clock,
            registry: IndexMap::new(),
            next_id: 0,
            default_dismiss: config.dismiss_after(),
            default_position: config.position(),
            base_z_index: config.base_z_index(),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle lifecycle events are mirrored to.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    fn log(&self, event: ToastEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }

    /// Shows a new toast and returns its id.
    ///
    /// Unset options take the manager's defaults. When the options carry a
    /// key, visible toasts with the same key are closed first.
    pub fn notify(&mut self, content: Content, options: NotifyOptions) -> NotificationId {
        if let Some(key) = options.key.as_deref() {
            let replaced: Vec<NotificationId> = self
                .registry
                .values()
                .filter(|instance| instance.is_shown() && instance.key() == Some(key))
                .map(Instance::id)
                .collect();
            for id in replaced {
                self.close_with(id, CloseReason::Replaced);
            }
        }

        self.next_id += 1;
        let id = NotificationId::from_raw(self.next_id);

        let position = options.position.unwrap_or(self.default_position);
        let placement = Placement {
            dismiss: options.dismiss.unwrap_or(self.default_dismiss),
            position,
            z_index: self.base_z_index,
            has_close_button: options.has_close_button,
            key: options.key,
        };

        let instance = Instance::new(id, content, placement, self.clock.now());
        debug!(
            %id,
            %position,
            title = instance.content().title(),
            "toast shown"
        );
        self.log(ToastEvent::Shown {
            id,
            position: instance.position(),
            intent: instance.content().intent(),
            dismiss_after_ms: instance
                .dismiss()
                .duration()
                .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        });
        self.registry.insert(id, instance);
        self.restack(position);
        id
    }

    /// Renumbers the live toasts under `position` above the base layer.
    ///
    /// The newest toast sits nearest the anchor edge: highest for top
    /// anchors, lowest (but still above the base) for bottom anchors.
    fn restack(&mut self, position: Position) {
        let count = self
            .registry
            .values()
            .filter(|instance| instance.position() == position)
            .count();
        let base = self.base_z_index;
        let stacked = self
            .registry
            .values_mut()
            .filter(|instance| instance.position() == position);
        for (rank, instance) in (1..=count).zip(stacked) {
            let offset = if position.is_bottom() {
                count - rank + 1
            } else {
                rank
            };
            let offset = i32::try_from(offset).unwrap_or(i32::MAX);
            instance.set_z_index(base.saturating_add(offset));
        }
    }

    /// Shows a toast with [`Intent::Success`].
    pub fn success(&mut self, title: impl Into<String>, options: NotifyOptions) -> NotificationId {
        self.notify(Content::new(title).with_intent(Intent::Success), options)
    }

    /// Shows a toast with [`Intent::Warning`].
    pub fn warning(&mut self, title: impl Into<String>, options: NotifyOptions) -> NotificationId {
        self.notify(Content::new(title).with_intent(Intent::Warning), options)
    }

    /// Shows a toast with [`Intent::Danger`].
    pub fn danger(&mut self, title: impl Into<String>, options: NotifyOptions) -> NotificationId {
        self.notify(Content::new(title).with_intent(Intent::Danger), options)
    }

    fn close_with(&mut self, id: NotificationId, reason: CloseReason) -> bool {
        let closed = self
            .registry
            .get_mut(&id)
            .is_some_and(Instance::close);
        if closed {
            debug!(%id, ?reason, "toast closing");
            self.log(ToastEvent::Closing { id, reason });
        }
        closed
    }

    /// Starts closing a toast.
    ///
    /// Returns `true` only for the call that actually moved the toast to
    /// [`Phase::Closing`]; repeated calls and unknown ids return `false`.
    pub fn close(&mut self, id: NotificationId) -> bool {
        self.close_with(id, CloseReason::Requested)
    }

    /// Starts closing every visible toast without waiting for any exit
    /// animation. Returns how many toasts started closing.
    pub fn close_all(&mut self) -> usize {
        let ids: Vec<NotificationId> = self.registry.keys().copied().collect();
        ids.into_iter()
            .filter(|id| self.close_with(*id, CloseReason::CloseAll))
            .count()
    }

    /// Applies an external visibility flag. Only a flip to hidden on a
    /// visible toast has an effect.
    pub fn set_shown(&mut self, id: NotificationId, shown: bool) -> bool {
        if shown {
            trace!(%id, "ignoring visibility flag: toasts cannot be re-shown");
            return false;
        }
        self.close_with(id, CloseReason::Hidden)
    }

    /// Pauses a toast's auto-dismiss timer.
    pub fn pointer_entered(&mut self, id: NotificationId) -> bool {
        let paused = self
            .registry
            .get_mut(&id)
            .is_some_and(Instance::pointer_entered);
        if paused {
            trace!(%id, "dismiss timer paused");
            self.log(ToastEvent::TimerPaused { id });
        }
        paused
    }

    /// Restarts a toast's auto-dismiss timer at its full duration.
    pub fn pointer_left(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        let restarted = self
            .registry
            .get_mut(&id)
            .is_some_and(|instance| instance.pointer_left(now));
        if restarted {
            trace!(%id, "dismiss timer restarted");
            self.log(ToastEvent::TimerRestarted { id });
        }
        restarted
    }

    /// Records a card's measured height.
    pub fn record_height(&mut self, id: NotificationId, height: f32) -> bool {
        self.registry
            .get_mut(&id)
            .is_some_and(|instance| instance.record_height(height))
    }

    /// Handles the exit-animation completion signal.
    ///
    /// A closing toast becomes [`Phase::Removed`] and leaves the registry.
    /// Signals for visible, removed or unknown toasts are ignored.
    pub fn exit_finished(&mut self, id: NotificationId) -> bool {
        let finished = self
            .registry
            .get_mut(&id)
            .is_some_and(Instance::finish_exit);
        if finished {
            self.remove(id);
        }
        finished
    }

    /// Deletes a toast from the registry.
    ///
    /// Unknown or already removed ids are a no-op.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(instance) = self.registry.shift_remove(&id) else {
            return false;
        };
        let lifetime = self.clock.now().saturating_duration_since(instance.created_at());
        let lifetime_ms = u64::try_from(lifetime.as_millis()).unwrap_or(u64::MAX);
        debug!(%id, lifetime_ms, "toast removed");
        self.log(ToastEvent::Removed { id, lifetime_ms });
        self.restack(instance.position());
        true
    }

    /// Fires every due auto-dismiss timer. Returns how many toasts started
    /// closing.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let due: Vec<NotificationId> = self
            .registry
            .values()
            .filter(|instance| instance.is_due(now))
            .map(Instance::id)
            .collect();

        let mut fired = 0;
        for id in due {
            let closed = self
                .registry
                .get_mut(&id)
                .is_some_and(|instance| instance.fire_if_due(now));
            if closed {
                debug!(%id, "toast timed out");
                self.log(ToastEvent::Closing {
                    id,
                    reason: CloseReason::Timeout,
                });
                fired += 1;
            }
        }
        fired
    }

    /// Handles a message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.close(id);
            }
            Message::PointerEntered(id) => {
                self.pointer_entered(id);
            }
            Message::PointerLeft(id) => {
                self.pointer_left(id);
            }
            Message::VisibilityChanged(id, shown) => {
                self.set_shown(id, shown);
            }
            Message::HeightMeasured(id, height) => {
                self.record_height(id, height);
            }
            Message::ExitFinished(id) => {
                self.exit_finished(id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the earliest pending auto-dismiss deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.registry.values().filter_map(Instance::deadline).min()
    }

    /// Returns the number of armed auto-dismiss timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.registry
            .values()
            .filter(|instance| instance.deadline().is_some())
            .count()
    }

    /// Returns a toast's phase. Ids no longer in the registry are
    /// [`Phase::Removed`].
    #[must_use]
    pub fn phase(&self, id: NotificationId) -> Phase {
        self.registry
            .get(&id)
            .map_or(Phase::Removed, Instance::phase)
    }

    /// Returns true while a toast is visible.
    #[must_use]
    pub fn is_shown(&self, id: NotificationId) -> bool {
        self.phase(id) == Phase::Visible
    }

    /// Returns a live toast.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Instance> {
        self.registry.get(&id)
    }

    /// Iterates live toasts (visible and closing) in insertion order.
    pub fn toasts(&self) -> impl Iterator<Item = &Instance> {
        self.registry.values()
    }

    /// Returns the toasts under one anchor, nearest the edge first.
    #[must_use]
    pub fn stack(&self, position: Position) -> Vec<&Instance> {
        self.registry
            .values()
            .rev()
            .filter(|instance| instance.position() == position)
            .collect()
    }

    /// Returns render snapshots of every live toast in insertion order.
    #[must_use]
    pub fn views(&self) -> Vec<ToastView> {
        self.registry.values().map(ToastView::from).collect()
    }

    /// Returns the number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if no toast is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
