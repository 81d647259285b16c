// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for desired bulb output.
//!
//! [`Rgb`] carries the color channels and [`Brightness`] the intensity.
//! Both serialize to the exact shapes the bulb-control API expects: a
//! 3-element array for color and a bare number for brightness.

mod brightness;
mod rgb;

pub use brightness::Brightness;
pub use rgb::Rgb;
