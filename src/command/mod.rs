// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-bulb change commands.
//!
//! The control surface itself only ships full registry snapshots, but a
//! consumer driving real hardware needs the minimal set of writes that
//! moves a bulb from its current state to a desired one. [`BulbCommand`]
//! is that unit of work; [`BulbState::diff`](crate::BulbState::diff)
//! produces it and [`BulbState::apply`](crate::BulbState::apply) consumes
//! it.

use crate::types::{Brightness, Rgb};

/// A single desired-state change for one bulb.
///
/// # Examples
///
/// ```
/// use lumor_lib::{Brightness, BulbCommand, BulbState, Rgb};
///
/// let current = BulbState::default();
/// let desired = BulbState::new(Rgb::default(), Brightness::OFF);
///
/// let commands = current.diff(&desired);
/// assert_eq!(commands, vec![BulbCommand::SetBrightness(Brightness::OFF)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BulbCommand {
    /// Change the bulb's color, leaving intensity alone.
    SetColor(Rgb),
    /// Change the bulb's intensity, leaving color alone.
    SetBrightness(Brightness),
}
