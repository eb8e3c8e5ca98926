// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Lifecycle**: Auto-dismiss duration and exit animation length
//! - **Placement**: Default anchor and stacking base
//! - **Diagnostics**: Event log size

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Auto-dismiss delay for toasts that do not specify one (in seconds).
pub const DEFAULT_DURATION_SECS: f64 = 5.0;

/// Length of the exit animation a rendering surface is expected to play
/// (in milliseconds).
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 240;

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Anchor used when none is given or the configured one is unknown.
pub const DEFAULT_POSITION: &str = "top";

/// Stacking order of the toast layer; individual toasts are offset from it.
pub const DEFAULT_BASE_Z_INDEX: i32 = 30;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of lifecycle events kept by the diagnostics log.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 256;

/// Smallest accepted event log size.
pub const MIN_EVENT_LOG_CAPACITY: usize = 16;

/// Largest accepted event log size.
pub const MAX_EVENT_LOG_CAPACITY: usize = 10_000;
