// SPDX-License-Identifier: MPL-2.0
//! Lifecycle events recorded by the diagnostics log.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::toast::{Intent, Position};
use crate::toaster::{CloseReason, NotificationId};

/// Something that happened to a toast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ToastEvent {
    /// A toast was created and is visible.
    Shown {
        /// Toast identifier.
        id: NotificationId,
        /// Anchor name.
        #[serde(serialize_with = "serialize_position")]
        position: Position,
        /// Intent name.
        #[serde(serialize_with = "serialize_intent")]
        intent: Intent,
        /// Auto-dismiss delay in milliseconds, absent when persistent.
        #[serde(skip_serializing_if = "Option::is_none")]
        dismiss_after_ms: Option<u64>,
    },
    /// The pointer entered the card and paused the timer.
    TimerPaused {
        /// Toast identifier.
        id: NotificationId,
    },
    /// The pointer left the card and the timer restarted.
    TimerRestarted {
        /// Toast identifier.
        id: NotificationId,
    },
    /// The toast started its exit sequence.
    Closing {
        /// Toast identifier.
        id: NotificationId,
        /// What triggered it.
        reason: CloseReason,
    },
    /// The exit animation finished and the toast is gone.
    Removed {
        /// Toast identifier.
        id: NotificationId,
        /// Time from creation to removal in milliseconds.
        lifetime_ms: u64,
    },
}

impl ToastEvent {
    /// Returns the toast the event refers to.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        match self {
            ToastEvent::Shown { id, .. }
            | ToastEvent::TimerPaused { id }
            | ToastEvent::TimerRestarted { id }
            | ToastEvent::Closing { id, .. }
            | ToastEvent::Removed { id, .. } => *id,
        }
    }
}

fn serialize_position<S: serde::Serializer>(
    position: &Position,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(position.name())
}

fn serialize_intent<S: serde::Serializer>(
    intent: &Intent,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(intent.name())
}

/// A [`ToastEvent`] stamped with the wall-clock time it was logged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticEvent {
    /// When the event was logged.
    pub recorded_at: DateTime<Utc>,
    /// The event itself.
    #[serde(flatten)]
    pub event: ToastEvent,
}

impl DiagnosticEvent {
    /// Stamps an event with the current time.
    #[must_use]
    pub fn new(event: ToastEvent) -> Self {
        Self {
            recorded_at: Utc::now(),
            event,
        }
    }
}
