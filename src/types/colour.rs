//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MugshotError, Result};

/// An opaque RGB colour value.
///
/// Alpha always comes from the layer being tinted, so colours only carry
/// the three channels a tint replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_byte(&hex[0..1])?;
                let g = parse_hex_byte(&hex[1..2])?;
                let b = parse_hex_byte(&hex[2..3])?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Add the same signed offset to every channel, clamping each channel
    /// to `[min, max]`.
    ///
    /// Used to derive secondary colours (trousers from the shirt, beards from
    /// hair) that stay close to their base colour.
    pub fn shifted(self, offset: i32, min: u8, max: u8) -> Self {
        let shift = |c: u8| {
            i32::from(c)
                .saturating_add(offset)
                .clamp(i32::from(min), i32::from(max)) as u8
        };
        Self::rgb(shift(self.r), shift(self.g), shift(self.b))
    }
}

impl From<[u8; 3]> for Colour {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl FromStr for Colour {
    type Err = MugshotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn invalid_hex(s: &str) -> MugshotError {
    MugshotError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

/// Parse a one- or two-character hex value.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| MugshotError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#fedab5").unwrap();
        assert_eq!(c, Colour::rgb(254, 218, 181));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_no_hash() {
        assert_eq!(Colour::from_hex("00BAAD").unwrap(), Colour::rgb(0, 186, 173));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#FF000080").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let c = Colour::rgb(42, 123, 155);
        assert_eq!(c.to_string(), "#2A7B9B");
        assert_eq!(c.to_string().parse::<Colour>().unwrap(), c);
    }

    #[test]
    fn test_shifted_clamps_each_channel() {
        let c = Colour::rgb(0, 120, 255);
        assert_eq!(c.shifted(30, 10, 250), Colour::rgb(30, 150, 250));
        assert_eq!(c.shifted(-50, 10, 250), Colour::rgb(10, 70, 205));
        assert_eq!(Colour::WHITE.shifted(0, 0, 254), Colour::rgb(254, 254, 254));
    }

    #[test]
    fn test_shifted_extreme_offsets() {
        let c = Colour::rgb(200, 200, 200);
        assert_eq!(c.shifted(i32::MAX, 10, 250), Colour::rgb(250, 250, 250));
        assert_eq!(c.shifted(i32::MIN, 10, 250), Colour::rgb(10, 10, 10));
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Colour::rgb(199, 0, 57)).unwrap();
        assert_eq!(json, "\"#C70039\"");

        let back: Colour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Colour::rgb(199, 0, 57));
        assert!(serde_json::from_str::<Colour>("\"nope\"").is_err());
    }
}
