// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Desired output of one bulb.

use crate::command::BulbCommand;
use crate::types::{Brightness, Rgb};

/// The desired output of a single bulb: color plus intensity.
///
/// The default state is white at full brightness, which is what a bulb is
/// assumed to want before any control event has touched it.
///
/// Wire form:
///
/// ```json
/// {"rgb": [255, 255, 255], "brightness": 1.0}
/// ```
///
/// # Examples
///
/// ```
/// use lumor_lib::{Brightness, BulbState, Rgb};
///
/// let state = BulbState::default();
/// assert_eq!(state.rgb(), Rgb::new(255, 255, 255));
/// assert_eq!(state.brightness(), Brightness::FULL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BulbState {
    rgb: Rgb,
    brightness: Brightness,
}

impl BulbState {
    /// Creates a state from its parts.
    #[must_use]
    pub const fn new(rgb: Rgb, brightness: Brightness) -> Self {
        Self { rgb, brightness }
    }

    /// Returns the desired color.
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Returns the desired intensity.
    #[must_use]
    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Sets the desired color, leaving intensity alone.
    pub fn set_rgb(&mut self, rgb: Rgb) {
        self.rgb = rgb;
    }

    /// Sets the desired intensity, leaving color alone.
    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
    }

    /// Returns `true` if the bulb emits any light in this state.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.brightness.is_on()
    }

    /// Returns the commands that move this state to `desired`.
    ///
    /// Fields that already match yield nothing; a color change is emitted
    /// before a brightness change.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumor_lib::{Brightness, BulbCommand, BulbState, Rgb};
    ///
    /// let current = BulbState::new(Rgb::white(), Brightness::FULL);
    /// let desired = BulbState::new(Rgb::new(255, 0, 0), Brightness::OFF);
    ///
    /// assert_eq!(
    ///     current.diff(&desired),
    ///     vec![
    ///         BulbCommand::SetColor(Rgb::new(255, 0, 0)),
    ///         BulbCommand::SetBrightness(Brightness::OFF),
    ///     ],
    /// );
    /// ```
    #[must_use]
    pub fn diff(&self, desired: &Self) -> Vec<BulbCommand> {
        let mut commands = Vec::new();

        if self.rgb != desired.rgb {
            commands.push(BulbCommand::SetColor(desired.rgb));
        }

        if self.brightness != desired.brightness {
            commands.push(BulbCommand::SetBrightness(desired.brightness));
        }

        commands
    }

    /// Applies a command and returns whether the state actually changed.
    pub fn apply(&mut self, command: &BulbCommand) -> bool {
        match command {
            BulbCommand::SetColor(rgb) => {
                if self.rgb == *rgb {
                    false
                } else {
                    self.rgb = *rgb;
                    true
                }
            }
            BulbCommand::SetBrightness(brightness) => {
                if self.brightness == *brightness {
                    false
                } else {
                    self.brightness = *brightness;
                    true
                }
            }
        }
    }
}

impl Default for BulbState {
    fn default() -> Self {
        Self {
            rgb: Rgb::white(),
            brightness: Brightness::FULL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white_at_full() {
        let state = BulbState::default();
        assert_eq!(state.rgb(), Rgb::new(255, 255, 255));
        assert_eq!(state.brightness(), Brightness::FULL);
        assert!(state.is_on());
    }

    #[test]
    fn set_brightness_leaves_rgb_alone() {
        let mut state = BulbState::default();
        state.set_brightness(Brightness::OFF);
        assert_eq!(state.rgb(), Rgb::white());
        assert!(!state.is_on());
    }

    #[test]
    fn diff_of_equal_states_is_empty() {
        let state = BulbState::default();
        assert!(state.diff(&state).is_empty());
    }

    #[test]
    fn diff_brightness_only() {
        let current = BulbState::default();
        let desired = BulbState::new(Rgb::white(), Brightness::OFF);
        assert_eq!(
            current.diff(&desired),
            vec![BulbCommand::SetBrightness(Brightness::OFF)],
        );
    }

    #[test]
    fn diff_color_only() {
        let current = BulbState::default();
        let desired = BulbState::new(Rgb::new(0, 0, 255), Brightness::FULL);
        assert_eq!(
            current.diff(&desired),
            vec![BulbCommand::SetColor(Rgb::new(0, 0, 255))],
        );
    }

    #[test]
    fn diff_emits_color_before_brightness() {
        let current = BulbState::default();
        let desired = BulbState::new(Rgb::black(), Brightness::OFF);
        assert_eq!(
            current.diff(&desired),
            vec![
                BulbCommand::SetColor(Rgb::black()),
                BulbCommand::SetBrightness(Brightness::OFF),
            ],
        );
    }

    #[test]
    fn apply_reports_change() {
        let mut state = BulbState::default();
        assert!(state.apply(&BulbCommand::SetBrightness(Brightness::OFF)));
        assert!(!state.apply(&BulbCommand::SetBrightness(Brightness::OFF)));
        assert!(state.apply(&BulbCommand::SetColor(Rgb::black())));
        assert!(!state.apply(&BulbCommand::SetColor(Rgb::black())));
    }

    #[test]
    fn applying_diff_reaches_desired() {
        let mut current = BulbState::default();
        let desired = BulbState::new(Rgb::new(10, 20, 30), Brightness::new(0.5));

        for command in current.diff(&desired) {
            current.apply(&command);
        }

        assert_eq!(current, desired);
    }

    #[test]
    fn wire_shape() {
        let json = serde_json::to_string(&BulbState::default()).unwrap();
        assert_eq!(json, r#"{"rgb":[255,255,255],"brightness":1.0}"#);
    }

    #[test]
    fn wire_roundtrip() {
        let state = BulbState::new(Rgb::new(1, 2, 3), Brightness::new(0.25));
        let json = serde_json::to_string(&state).unwrap();
        let decoded: BulbState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, decoded);
    }

    #[test]
    fn decodes_integer_brightness() {
        // Control surfaces may send 0 rather than 0.0.
        let decoded: BulbState =
            serde_json::from_str(r#"{"rgb":[255,255,255],"brightness":0}"#).unwrap();
        assert_eq!(decoded.brightness(), Brightness::OFF);
    }
}
