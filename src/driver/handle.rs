// SPDX-License-Identifier: MPL-2.0
//! Caller-side handle to one toast running under a [`Toaster`](super::Toaster).

use tokio::sync::{mpsc, watch};

use super::Command;
use crate::error::{Error, Result};
use crate::toaster::{NotificationId, Phase};

/// Handle returned by [`Toaster::notify`](super::Toaster::notify).
///
/// Reading the phase never waits on the driver: the driver publishes every
/// phase change into a watch channel the handle reads from.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    id: NotificationId,
    phase: watch::Receiver<Phase>,
    commands: mpsc::UnboundedSender<Command>,
}

impl ToastHandle {
    pub(super) fn new(
        id: NotificationId,
        phase: watch::Receiver<Phase>,
        commands: mpsc::UnboundedSender<Command>,
    ) -> Self {
        Self {
            id,
            phase,
            commands,
        }
    }

    /// Returns the toast's id.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Asks the driver to close the toast. Calling it again is harmless.
    pub fn close(&self) -> Result<()> {
        self.commands
            .send(Command::Close(self.id))
            .map_err(|_| Error::DriverClosed)
    }

    /// Returns the last phase the driver published.
    #[must_use]
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// Returns true while the toast is visible.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.phase() == Phase::Visible
    }

    /// Waits until the toast has reached `phase` (or a later one).
    pub async fn wait_for(&mut self, phase: Phase) -> Result<Phase> {
        self.phase
            .wait_for(|current| *current >= phase)
            .await
            .map(|current| *current)
            .map_err(|_| Error::DriverClosed)
    }

    /// Waits until the toast starts closing.
    pub async fn closing(&mut self) -> Result<Phase> {
        self.wait_for(Phase::Closing).await
    }

    /// Waits until the toast is gone.
    pub async fn removed(&mut self) -> Result<Phase> {
        self.wait_for(Phase::Removed).await
    }
}
