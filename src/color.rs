//! RGB color values and hex parsing
//!
//! Colors live in the settings model as `"#RRGGBB"` strings (the format the
//! color picker produces) and are parsed into [`Rgb`] during reconciliation.
//! The optional `#` prefix is accepted because hand-edited config files tend
//! to drop it.

use std::fmt;

use thiserror::Error;

/// A color string that does not parse as 6-digit RGB hex.
///
/// Colors normally originate from a picker or from defaults, both guaranteed
/// valid, so hitting this means the settings document itself is off.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color '{input}': expected \"#RRGGBB\" hex")]
pub struct ColorParseError {
    /// The string that failed to parse
    pub input: String,
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `RRGGBB` hex string, with or without a leading `#`.
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError { input: s.to_string() });
        }
        let raw = u32::from_str_radix(hex, 16).map_err(|_| ColorParseError {
            input: s.to_string(),
        })?;
        Ok(Self::new((raw >> 16) as u8, (raw >> 8) as u8, raw as u8))
    }

    /// Format as `#RRGGBB`, the same shape the settings file stores.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
