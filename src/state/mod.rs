// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Desired bulb state and the registry that holds it.
//!
//! [`BulbState`] is the desired output of one bulb; [`BulbRegistry`] maps
//! bulb identifiers to their states and is the document the transmitter
//! ships in full on every change.
//!
//! # Examples
//!
//! ```
//! use lumor_lib::{BulbRegistry, BulbState};
//!
//! let registry = BulbRegistry::new().with_bulb("nightstand", BulbState::default());
//!
//! let json = registry.to_json().unwrap();
//! assert_eq!(json, r#"{"nightstand":{"rgb":[255,255,255],"brightness":1.0}}"#);
//! ```

mod bulb_state;
mod registry;

pub use bulb_state::BulbState;
pub use registry::BulbRegistry;
