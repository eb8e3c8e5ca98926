// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no dependencies beyond `std`.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`EventLogCapacity`](diagnostics::EventLogCapacity))
//! - [`toast`]: Toast placement and timing ([`Position`](toast::Position),
//!   [`DismissAfter`](toast::DismissAfter), [`Intent`](toast::Intent))

pub mod diagnostics;
pub mod toast;
