// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle.
//!
//! Toasts appear temporarily, dismiss themselves after a configurable delay
//! unless hovered, and leave only after the rendering surface has played
//! their exit animation.
//!
//! # Components
//!
//! - [`instance`] - The per-toast state machine (`Visible -> Closing -> Removed`)
//! - [`manager`] - `Manager`, the registry that creates, orders and removes toasts
//! - [`notification`] - Ids, content and notify options
//! - [`view`] - Render snapshots for the surface
//! - [`clock`] - Time sources
//!
//! # Usage
//!
//! ```
//! use toastline::toaster::{Content, Manager, Message, NotifyOptions, Phase};
//!
//! let mut manager = Manager::new();
//! let id = manager.notify(Content::new("Saved"), NotifyOptions::new().duration_secs(3.0));
//! assert_eq!(manager.phase(id), Phase::Visible);
//!
//! // The close button was pressed; the surface starts the exit animation...
//! manager.update(Message::Dismiss(id));
//! assert_eq!(manager.phase(id), Phase::Closing);
//!
//! // ...and reports when it is done.
//! manager.update(Message::ExitFinished(id));
//! assert!(manager.is_empty());
//! ```

pub mod clock;
pub mod instance;
pub mod manager;
pub mod notification;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use instance::{CloseReason, Instance, Phase};
pub use manager::{Manager, Message};
pub use notification::{Content, NotificationId, NotifyOptions};
pub use view::ToastView;
