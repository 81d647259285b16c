// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `LumoR` Lib - a Rust library to push desired smart-bulb state to a
//! local bulb-control API.
//!
//! The crate keeps an in-memory registry of desired bulb states (color and
//! brightness), mutates it in response to control events, and pushes the
//! full registry as a JSON document to an HTTP endpoint on every change.
//! Delivery is fire-and-forget: callers never block on it, and its outcome
//! is never surfaced back to them.
//!
//! # Core Pieces
//!
//! - **State model**: [`BulbState`] (color + brightness) and
//!   [`BulbRegistry`] (bulb id → desired state)
//! - **Controller**: [`BulbController`] turns a control event into a
//!   registry mutation plus one transmission of the whole registry
//! - **Transport**: [`HttpTransmitter`] POSTs the registry as JSON to a
//!   configurable endpoint (`http://127.0.0.1:8000/api` by default)
//! - **Diffing**: [`BulbState::diff`] yields the [`BulbCommand`]s that move
//!   one state to another, for consumers that drive real hardware
//!
//! # Quick Start
//!
//! ```no_run
//! use lumor_lib::{BulbController, BulbRegistry, BulbState, HttpConfig};
//!
//! #[tokio::main]
//! async fn main() -> lumor_lib::Result<()> {
//!     // One bulb, white at full brightness.
//!     let registry = BulbRegistry::new().with_bulb("nightstand", BulbState::default());
//!
//!     // POSTs to http://127.0.0.1:8000/api unless configured otherwise.
//!     let transmitter = HttpConfig::default().into_transmitter()?;
//!     let mut controller = BulbController::new(registry, transmitter);
//!
//!     // The on/off checkbox was unchecked: brightness goes to 0 and the
//!     // full registry is pushed, without waiting for delivery.
//!     controller.on_toggle_changed("nightstand", false)?;
//!     Ok(())
//! }
//! ```
//!
//! # Custom Endpoint
//!
//! ```no_run
//! use std::time::Duration;
//! use lumor_lib::HttpConfig;
//!
//! # fn example() -> lumor_lib::Result<()> {
//! let transmitter = HttpConfig::new("192.168.1.40")
//!     .with_port(8080)
//!     .with_path("/bulbs")
//!     .with_timeout(Duration::from_secs(5))
//!     .into_transmitter()?;
//! # Ok(())
//! # }
//! ```

pub mod command;
mod controller;
pub mod error;
pub mod protocol;
pub mod state;
pub mod types;

pub use command::BulbCommand;
pub use controller::BulbController;
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
pub use protocol::Transmit;
#[cfg(feature = "http")]
pub use protocol::{HttpConfig, HttpTransmitter};
pub use state::{BulbRegistry, BulbState};
pub use types::{Brightness, Rgb};
