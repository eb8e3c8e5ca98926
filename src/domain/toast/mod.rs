// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! Value objects describing how a toast is placed and how long it lives,
//! independent of any presentation framework:
//! - [`Position`]: Screen anchor a toast is grouped under
//! - [`DismissAfter`]: Auto-dismiss policy
//! - [`Intent`]: Severity tag forwarded to the rendering surface

mod newtypes;

pub use newtypes::{DismissAfter, Intent, Position};
