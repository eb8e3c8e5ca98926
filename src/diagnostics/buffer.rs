// SPDX-License-Identifier: MPL-2.0
//! Bounded ring buffer holding the most recent lifecycle events.

use std::collections::VecDeque;

use crate::domain::diagnostics::EventLogCapacity;

/// A ring buffer that evicts its oldest entry when full.
///
/// Entries are kept in chronological order (oldest first).
///
/// # Example
///
/// ```
/// use toastline::diagnostics::CircularBuffer;
/// use toastline::domain::diagnostics::EventLogCapacity;
///
/// let mut buffer = CircularBuffer::new(EventLogCapacity::new(16));
/// buffer.push("shown");
/// buffer.push("closing");
///
/// assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), ["shown", "closing"]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new(capacity: EventLogCapacity) -> Self {
        Self::with_raw_capacity(capacity.get())
    }

    /// Creates an empty buffer with an unchecked capacity (at least 1).
    ///
    /// Mostly useful for tests that want to observe eviction quickly.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest one at capacity.
    ///
    /// Returns the evicted entry, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.data.len() >= self.capacity {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(item);
        evicted
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}
