// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the toast lifecycle.
//!
//! Every transition a [`Manager`](crate::toaster::Manager) performs can be
//! mirrored into an in-memory, memory-bounded event log. The log is useful
//! for tracing why a toast disappeared (timeout, close button, replacement)
//! and can be exported as JSON.
//!
//! # Architecture
//!
//! - [`DiagnosticsHandle`]: Non-blocking sender held by managers
//! - [`DiagnosticsCollector`]: Drains the channel into a [`CircularBuffer`]
//! - [`ToastEvent`] / [`DiagnosticEvent`]: What gets recorded

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, ToastEvent};
