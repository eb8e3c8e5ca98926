// SPDX-License-Identifier: MPL-2.0
//! Collects lifecycle events from managers into a bounded log.
//!
//! Managers hold a cheap [`DiagnosticsHandle`] and send events through a
//! bounded channel without ever blocking. The owner of the
//! [`DiagnosticsCollector`] drains the channel into a [`CircularBuffer`]
//! whenever it wants to inspect or export the log.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{CircularBuffer, DiagnosticEvent, ToastEvent};
use crate::domain::diagnostics::EventLogCapacity;
use crate::error::Result;

/// Minimum number of events that can wait in the channel between drains.
/// The channel grows to the log capacity when that is larger, so a burst
/// the log could hold is never dropped before it is drained.
const CHANNEL_CAPACITY: usize = 128;

/// Sending side of the diagnostics log. Clone freely.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an event, dropping it if the channel is full or the collector
    /// is gone.
    pub fn log(&self, event: ToastEvent) {
        let _ = self.try_log(event);
    }

    /// Logs an event and reports whether it was accepted.
    pub fn try_log(&self, event: ToastEvent) -> std::result::Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(event))
    }
}

/// Receiving side of the diagnostics log.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates an empty collector keeping at most `capacity` events.
    #[must_use]
    pub fn new(capacity: EventLogCapacity) -> Self {
        let (event_tx, event_rx) = bounded(capacity.get().max(CHANNEL_CAPACITY));
        Self {
            buffer: CircularBuffer::new(capacity),
            event_tx,
            event_rx,
        }
    }

    /// Returns a handle that feeds this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the log.
    ///
    /// Returns how many events were moved.
    pub fn process_pending(&mut self) -> usize {
        let mut moved = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            moved += 1;
        }
        moved
    }

    /// Iterates logged events, oldest first. Call
    /// [`process_pending`](Self::process_pending) first to include recent ones.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the number of logged events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing was logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the maximum number of retained events.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Drops every logged event.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Serializes the log as a pretty JSON array.
    pub fn export_json(&self) -> Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        Ok(serde_json::to_string_pretty(&events)?)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(EventLogCapacity::default())
    }
}
