// SPDX-License-Identifier: MPL-2.0
//! Time sources for the toast lifecycle.
//!
//! The manager never calls `Instant::now()` directly; it asks its [`Clock`].
//! Hosts use [`SystemClock`], tests and simulations use [`ManualClock`], and
//! the async driver plugs in tokio's clock so paused-time tests work.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock time from [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying instant, so a test can keep one clone
/// and hand the other to a [`Manager`](super::Manager).
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Creates a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        let origin = Instant::now();
        Self {
            origin,
            now: Rc::new(Cell::new(origin)),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Moves the clock to `at` past its creation instant.
    ///
    /// Moving backwards is ignored; the clock is monotonic.
    pub fn set_elapsed(&self, at: Duration) {
        let target = self.origin + at;
        if target > self.now.get() {
            self.now.set(target);
        }
    }

    /// Returns how far the clock has moved since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.now.get() - self.origin
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
