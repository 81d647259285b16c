// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The registry of desired bulb states.

use std::collections::HashMap;

use crate::error::ParseError;
use crate::state::BulbState;

/// Mapping from bulb identifier to desired state.
///
/// The registry is the unit of transmission: every push to the control API
/// carries all of it, not just the bulb that changed. It lives for the
/// control session, has a single owner (the controller), and is never
/// persisted.
///
/// Wire form is a flat JSON object keyed by bulb id:
///
/// ```json
/// {"nightstand": {"rgb": [255, 255, 255], "brightness": 1.0}}
/// ```
///
/// # Examples
///
/// ```
/// use lumor_lib::{BulbRegistry, BulbState};
///
/// let registry = BulbRegistry::new()
///     .with_bulb("nightstand", BulbState::default())
///     .with_bulb("porch", BulbState::default());
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.contains("nightstand"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BulbRegistry {
    bulbs: HashMap<String, BulbState>,
}

impl BulbRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bulb and returns the registry, builder style.
    #[must_use]
    pub fn with_bulb(mut self, id: impl Into<String>, state: BulbState) -> Self {
        self.bulbs.insert(id.into(), state);
        self
    }

    /// Inserts a bulb, returning the previous state if the id was taken.
    pub fn insert(&mut self, id: impl Into<String>, state: BulbState) -> Option<BulbState> {
        self.bulbs.insert(id.into(), state)
    }

    /// Removes a bulb, returning its state if it existed.
    pub fn remove(&mut self, id: &str) -> Option<BulbState> {
        self.bulbs.remove(id)
    }

    /// Looks up a bulb's desired state.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BulbState> {
        self.bulbs.get(id)
    }

    /// Looks up a bulb's desired state for mutation.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut BulbState> {
        self.bulbs.get_mut(id)
    }

    /// Returns `true` if the registry knows the bulb.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.bulbs.contains_key(id)
    }

    /// Returns the number of bulbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bulbs.len()
    }

    /// Returns `true` if the registry holds no bulbs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bulbs.is_empty()
    }

    /// Iterates over `(id, state)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BulbState)> {
        self.bulbs.iter().map(|(id, state)| (id.as_str(), state))
    }

    /// Encodes the registry as the control API's JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if encoding fails.
    pub fn to_json(&self) -> Result<String, ParseError> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Decodes a registry from the control API's JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(Into::into)
    }
}
