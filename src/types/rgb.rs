// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type with hex parsing and fractional-channel conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// RGB color with 8-bit channels (0-255).
///
/// On the wire this type is a 3-element array `[r, g, b]`, matching the
/// `rgb` field of the bulb-control API's state document.
///
/// # Examples
///
/// ```
/// use lumor_lib::Rgb;
///
/// let color = Rgb::new(255, 128, 0);
/// assert_eq!(color.red(), 255);
/// assert_eq!(color.channels(), [255, 128, 0]);
///
/// // Parse from hex string
/// let red = Rgb::from_hex("#FF0000").unwrap();
/// assert_eq!(red, Rgb::new(255, 0, 0));
///
/// // Wire form is an array, not an object
/// let json = serde_json::to_string(&color).unwrap();
/// assert_eq!(json, "[255,128,0]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(into = "[u8; 3]", from = "[u8; 3]")]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses an RGB color from a hex string.
    ///
    /// Accepts formats: `#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHexColor` if the string is not valid hex
    /// of the expected length.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumor_lib::Rgb;
    ///
    /// let color = Rgb::from_hex("#FF5733").unwrap();
    /// assert_eq!(color.channels(), [255, 87, 51]);
    ///
    /// // Short format
    /// let color = Rgb::from_hex("#F00").unwrap();
    /// assert_eq!(color.red(), 255);
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ValueError> {
        let hex = hex.trim_start_matches('#');

        match hex.len() {
            3 => {
                // Short format: RGB -> RRGGBB
                let chars: Vec<char> = hex.chars().collect();
                let r = parse_hex_char(chars[0])?;
                let g = parse_hex_char(chars[1])?;
                let b = parse_hex_char(chars[2])?;
                Ok(Self::new(r * 17, g * 17, b * 17)) // Expand 0-F to 0-255
            }
            6 => {
                let r = parse_hex_pair(&hex[0..2])?;
                let g = parse_hex_pair(&hex[2..4])?;
                let b = parse_hex_pair(&hex[4..6])?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ValueError::InvalidHexColor(hex.to_string())),
        }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns the channels as an ordered `[r, g, b]` array.
    #[must_use]
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Returns the color as a hex string without the hash prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Creates a color from fractional channels in `[0.0, 1.0]`.
    ///
    /// Bulb firmware frequently reports channels as fractions of full
    /// scale; this maps them onto the 8-bit range the control API uses.
    /// Out-of-range input is clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumor_lib::Rgb;
    ///
    /// let color = Rgb::from_fractional([1.0, 0.5, 0.0]);
    /// assert_eq!(color.channels(), [255, 128, 0]);
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn from_fractional(channels: [f32; 3]) -> Self {
        let [r, g, b] = channels
            .map(|c| map_range(c.clamp(0.0, 1.0), (0.0, 1.0), (0.0, 255.0)).round() as u8);
        Self::new(r, g, b)
    }

    /// Returns the channels as fractions of full scale in `[0.0, 1.0]`.
    #[must_use]
    pub fn to_fractional(&self) -> [f32; 3] {
        self.channels()
            .map(|c| map_range(f32::from(c), (0.0, 255.0), (0.0, 1.0)))
    }

    /// Creates a white color.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Creates a black color.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.channels()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

// Helper function to parse a single hex character
fn parse_hex_char(c: char) -> Result<u8, ValueError> {
    c.to_digit(16)
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| ValueError::InvalidHexColor(c.to_string()))
}

// Helper function to parse a two-character hex pair
fn parse_hex_pair(s: &str) -> Result<u8, ValueError> {
    u8::from_str_radix(s, 16).map_err(|_| ValueError::InvalidHexColor(s.to_string()))
}

/// Linearly maps `x` from the `src` range onto the `dst` range.
///
/// A degenerate `src` range maps everything to `dst.0`.
fn map_range(x: f32, src: (f32, f32), dst: (f32, f32)) -> f32 {
    if (src.1 - src.0).abs() < f32::EPSILON {
        return dst.0;
    }
    let m = (dst.1 - dst.0) / (src.1 - src.0);
    let b = ((dst.0 * src.1) - (dst.1 * src.0)) / (src.1 - src.0);
    x.mul_add(m, b)
}
