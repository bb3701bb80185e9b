//! RGB color with a hex codec and linear channel blending.
//!
//! Colors travel as `#rrggbb` strings at the config and presentation
//! boundaries and as three 8-bit channels internally. Serde uses the hex
//! form, so configs read and write the same strings the host displays.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GaugeError;

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rgb` or `#rrggbb` string (the `#` prefix is optional).
    ///
    /// Shorthand digits expand by duplication (`#abc` is `#aabbcc`). Any
    /// other length or a non-hex character fails fast with
    /// [`GaugeError::MalformedColor`]; there is no NaN-style leniency.
    pub fn from_hex(hex: &str) -> Result<Self, GaugeError> {
        let malformed = || GaugeError::MalformedColor(hex.to_string());

        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let expanded;
        let digits = match digits.len() {
            3 => {
                expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
                expanded.as_str()
            }
            6 => digits,
            _ => return Err(malformed()),
        };

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| malformed());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Render as a `#`-prefixed 6-digit lowercase hex string, each channel
    /// zero-padded to exactly two digits.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend toward `other` at position `t`.
    ///
    /// Per channel: `floor(a * (1 - t) + b * t)`. `t` is expected in [0, 1];
    /// the stop-resolution path guarantees that by only blending inside a
    /// matched bracket.
    pub fn blend(self, other: Color, t: f64) -> Color {
        let channel = |a: u8, b: u8| (f64::from(a) * (1.0 - t) + f64::from(b) * t).floor() as u8;
        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
