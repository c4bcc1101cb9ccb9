//! 32-bit ARGB colors for the step line paints.
//!
//! Colors are stored as a single `0xAARRGGBB` word, the way a host styling
//! system hands them over. Terminals have no alpha channel, so conversion to a
//! [`lipgloss::Color`] drops it.
//!
//! ```rust
//! use bubbletea_stepline::color::Color;
//!
//! let accent = Color::parse("#0099DA").unwrap();
//! assert_eq!(accent, Color::ACCENT);
//! assert_eq!(accent.to_hex(), "#0099DA");
//! ```

use lipgloss_extras::lipgloss;
use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

/// Errors produced when a color string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string had a digit count other than 6 (`RRGGBB`) or 8 (`AARRGGBB`).
    #[error("color `{0}` must have 6 or 8 hex digits")]
    Length(String),
    /// The string contained something that is not a hex digit.
    #[error("color `{0}` contains a non-hex digit")]
    Digit(String),
}

/// A 32-bit color value in `0xAARRGGBB` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Enabled bar and enabled label color (`#0099DA`).
    pub const ACCENT: Color = Color(0xFF00_99DA);
    /// Disabled bar color (`#DFE4E8`).
    pub const TRACK: Color = Color(0xFFDF_E4E8);
    /// Disabled label color (`#C2CACF`).
    pub const MUTED: Color = Color(0xFFC2_CACF);

    /// Wraps a raw `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    /// Builds an opaque color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// The raw `0xAARRGGBB` value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parses `#RRGGBB` or `#AARRGGBB`. The `#` is optional and digits are
    /// case-insensitive. Six-digit colors are opaque.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] for any other length or a non-hex character.
    ///
    /// ```rust
    /// use bubbletea_stepline::color::Color;
    ///
    /// assert_eq!(Color::parse("80ff0000").unwrap().alpha(), 0x80);
    /// assert!(Color::parse("#12345").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(s.to_string()));
        }
        let opaque = match digits.len() {
            6 => 0xFF00_0000,
            8 => 0,
            _ => return Err(ColorError::Length(s.to_string())),
        };

        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorError::Digit(s.to_string()))?;
        Ok(Color(opaque | value))
    }

    /// Formats the color as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

impl From<Color> for lipgloss::Color {
    fn from(color: Color) -> Self {
        lipgloss::Color::from(color.to_hex().as_str())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw).map_err(serde::de::Error::custom)
    }
}
