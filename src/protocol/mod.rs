// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport for pushing registry snapshots to a bulb-control API.
//!
//! The only transport shipped with the crate is HTTP ([`HttpTransmitter`],
//! behind the default `http` feature). The [`Transmit`] trait is the seam
//! for alternatives - and for test doubles that record snapshots instead
//! of sending them.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransmitter};

use crate::error::ProtocolError;
use crate::state::BulbRegistry;

/// Trait for transports that can push a registry snapshot to a
/// bulb-control endpoint.
#[allow(async_fn_in_trait)]
pub trait Transmit {
    /// Sends a full registry snapshot and waits for the outcome.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the snapshot could not be delivered.
    async fn send_states(&self, states: &BulbRegistry) -> Result<(), ProtocolError>;

    /// Dispatches a fire-and-forget transmission of a registry snapshot.
    ///
    /// Returns before delivery resolves. The outcome is never reported to
    /// the caller; implementations may observe it (e.g. log it) but must
    /// not block on it or retry.
    fn dispatch(&self, states: BulbRegistry);
}
