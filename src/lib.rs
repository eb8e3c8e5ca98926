// SPDX-License-Identifier: MPL-2.0
//! `toastline` manages the lifecycle of toast notifications.
//!
//! It decides when a toast becomes visible, how long it stays, how hovering
//! pauses it and when it may finally be discarded after its exit animation.
//! Drawing the cards is left to whatever UI hosts it.
//!
//! Use [`toaster::Manager`] directly from a synchronous UI loop, or
//! [`driver::Toaster`] to run it on a tokio task with real timers.

#![doc(html_root_url = "https://docs.rs/toastline/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod driver;
pub mod error;
pub mod toaster;

#[cfg(test)]
mod test_utils;
