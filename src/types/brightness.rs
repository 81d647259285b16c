// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for bulb intensity.

use std::fmt;

/// Real-valued bulb intensity.
///
/// The control surface only ever produces the two ends of the scale -
/// [`Brightness::OFF`] and [`Brightness::FULL`] - but the bulb-control API
/// accepts any number here, so the type does not constrain the range.
///
/// On the wire this is a bare JSON number.
///
/// # Examples
///
/// ```
/// use lumor_lib::Brightness;
///
/// let on = Brightness::from_toggle(true);
/// assert_eq!(on, Brightness::FULL);
/// assert!(on.is_on());
///
/// let off = Brightness::from_toggle(false);
/// assert_eq!(off.value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Brightness(f32);

impl Brightness {
    /// The bulb is off.
    pub const OFF: Self = Self(0.0);

    /// The bulb is at full intensity.
    pub const FULL: Self = Self(1.0);

    /// Creates a brightness from a raw value.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Maps an on/off toggle position onto the intensity scale.
    ///
    /// `true` is full intensity, `false` is off.
    #[must_use]
    pub const fn from_toggle(is_checked: bool) -> Self {
        if is_checked { Self::FULL } else { Self::OFF }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Returns `true` if the bulb emits any light at this intensity.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.0 > 0.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f32> for Brightness {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Brightness> for f32 {
    fn from(brightness: Brightness) -> Self {
        brightness.value()
    }
}
