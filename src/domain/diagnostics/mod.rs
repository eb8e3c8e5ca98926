// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`EventLogCapacity`]: Number of lifecycle events kept in memory

mod newtypes;

pub use newtypes::{event_log_bounds, EventLogCapacity};
