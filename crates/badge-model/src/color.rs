//! Packed ARGB color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BadgeError;

/// Default badge fill: the fixed pink used when no color is configured.
pub const DEFAULT_BADGE_COLOR: Argb = Argb(0xFFFF_4081);

/// Default label color: opaque white.
pub const DEFAULT_TEXT_COLOR: Argb = Argb(0xFFFF_FFFF);

/// A color packed as `0xAARRGGBB`.
///
/// Serializes as a hex string (`"#AARRGGBB"`); parses the common short forms
/// as well (`"#RGB"`, `"#RRGGBB"`, `"0xAARRGGBB"`), defaulting alpha to
/// opaque when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb(pub u32);

impl Argb {
    /// Build from individual channels.
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl FromStr for Argb {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .or_else(|| s.trim().strip_prefix("0x"))
            .unwrap_or(s.trim());
        let invalid = || BadgeError::InvalidColor(s.to_string());
        match digits.len() {
            // #RGB: each nibble doubled
            3 => {
                let n = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let (r, g, b) = ((n >> 8) & 0xF, (n >> 4) & 0xF, n & 0xF);
                Ok(Self(
                    0xFF00_0000 | ((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11),
                ))
            }
            6 => {
                let n = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self(0xFF00_0000 | n))
            }
            8 => u32::from_str_radix(digits, 16)
                .map(Self)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl TryFrom<String> for Argb {
    type Error = BadgeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> Self {
        color.to_string()
    }
}
