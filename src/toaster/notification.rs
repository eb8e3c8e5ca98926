// SPDX-License-Identifier: MPL-2.0
//! Caller-facing notification data: identifiers, content and options.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::domain::toast::{DismissAfter, Intent, Position};

/// Unique identifier of a toast within one [`Manager`](super::Manager).
///
/// Identifiers come from a per-manager counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// What a toast shows. The core never looks inside beyond logging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    title: String,
    body: Option<String>,
    intent: Intent,
}

impl Content {
    /// Creates content with a title and no body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            intent: Intent::None,
        }
    }

    /// Adds a description shown under the title.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the severity tag.
    #[must_use]
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the severity tag.
    #[must_use]
    pub fn intent(&self) -> Intent {
        self.intent
    }
}

/// Per-toast options for [`Manager::notify`](super::Manager::notify).
///
/// Every field is optional; unset fields take the manager's defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotifyOptions {
    pub(crate) dismiss: Option<DismissAfter>,
    pub(crate) position: Option<Position>,
    pub(crate) has_close_button: bool,
    pub(crate) key: Option<String>,
}

impl NotifyOptions {
    /// Creates options that use every manager default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Auto-dismisses after `secs` seconds. Zero, negative or non-finite
    /// values disable auto-dismiss.
    #[must_use]
    pub fn duration_secs(mut self, secs: f64) -> Self {
        self.dismiss = Some(DismissAfter::from_secs_f64(secs));
        self
    }

    /// Auto-dismisses after `duration`; a zero duration disables auto-dismiss.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.dismiss = Some(DismissAfter::from_duration(duration));
        self
    }

    /// Keeps the toast until it is closed explicitly.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.dismiss = Some(DismissAfter::Never);
        self
    }

    /// Anchors the toast.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Anchors the toast by name; unknown names fall back to the top edge.
    #[must_use]
    pub fn position_name(mut self, name: &str) -> Self {
        let position = name.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to the top anchor");
            Position::Top
        });
        self.position = Some(position);
        self
    }

    /// Shows a close affordance on the card.
    #[must_use]
    pub fn close_button(mut self, has_close_button: bool) -> Self {
        self.has_close_button = has_close_button;
        self
    }

    /// Tags the toast with a key. Notifying again with the same key closes
    /// the toasts already showing under it.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}
