// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

/// Event log capacity bounds (16 to 10000 events).
pub mod event_log_bounds {
    /// Minimum number of retained events.
    pub const MIN: usize = 16;
    /// Maximum number of retained events.
    pub const MAX: usize = 10_000;
    /// Default number of retained events.
    pub const DEFAULT: usize = 256;
}

/// How many lifecycle events the diagnostics log keeps before evicting the
/// oldest ones.
///
/// Out-of-range values are clamped rather than rejected, so a bad value in
/// the settings file never disables diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLogCapacity(usize);

impl EventLogCapacity {
    /// Creates a capacity, clamping to [`event_log_bounds`].
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(event_log_bounds::MIN, event_log_bounds::MAX))
    }

    /// Returns the capacity as a plain count.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for EventLogCapacity {
    fn default() -> Self {
        Self(event_log_bounds::DEFAULT)
    }
}
