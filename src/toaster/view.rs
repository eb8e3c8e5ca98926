// SPDX-License-Identifier: MPL-2.0
//! Render snapshots handed to the rendering surface.
//!
//! The surface draws cards from [`ToastView`]s and reports back through
//! [`Message`](super::Message)s. It never touches an [`Instance`] directly.

use super::instance::{Instance, Phase};
use super::notification::{Content, NotificationId};
use crate::domain::toast::Position;

/// Everything needed to draw one toast card.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub id: NotificationId,
    pub content: Content,
    pub phase: Phase,
    pub position: Position,
    pub z_index: i32,
    /// Negative while closing so the stack collapses over the card's slot.
    pub margin_bottom: f32,
    pub has_close_button: bool,
}

impl ToastView {
    /// Returns true if the surface should play the exit animation.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.phase == Phase::Closing
    }
}

impl From<&Instance> for ToastView {
    fn from(instance: &Instance) -> Self {
        Self {
            id: instance.id(),
            content: instance.content().clone(),
            phase: instance.phase(),
            position: instance.position(),
            z_index: instance.z_index(),
            margin_bottom: instance.margin_bottom(),
            has_close_button: instance.has_close_button(),
        }
    }
}
