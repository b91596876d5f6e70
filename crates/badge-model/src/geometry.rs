//! Pixel geometry for badge placement.
//!
//! Two types live here:
//!
//! - [`Rect`]: an integer pixel rectangle, the unit of layout and painting.
//! - [`Dimension`]: a density-aware length (`px` or `dp`) used by the
//!   configuration surface, resolved to physical pixels once at construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BadgeError;

// =============================================================================
// RECT
// =============================================================================

/// An axis-aligned rectangle in integer pixels.
///
/// Edges follow the usual raster convention: `left`/`top` inclusive,
/// `right`/`bottom` exclusive, so `width = right - left`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Exact horizontal center (may fall between pixels).
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) as f32 / 2.0
    }

    /// Exact vertical center (may fall between pixels).
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) as f32 / 2.0
    }

    /// True when the rectangle encloses no pixels.
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }
}

// =============================================================================
// DIMENSION
// =============================================================================

/// A length that is either absolute pixels or density-scaled units.
///
/// Density-scaled (`dp`) lengths keep a consistent physical size across
/// displays; they resolve to pixels by multiplying with the host display's
/// density factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dimension {
    /// Absolute pixels.
    Px(f32),
    /// Density-scaled units.
    Dp(f32),
}

impl Dimension {
    /// Resolve to physical pixels for the given display density.
    pub fn resolve(self, density: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Dp(dp) => dp * density,
        }
    }
}

impl FromStr for Dimension {
    type Err = BadgeError;

    /// Parses `"12dp"`, `"40px"`, or a bare number (treated as pixels).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (value, unit) = match s.len().checked_sub(2) {
            Some(split) if s.is_char_boundary(split) => {
                let (head, tail) = s.split_at(split);
                match tail {
                    "dp" | "px" => (head, tail),
                    _ => (s, "px"),
                }
            }
            _ => (s, "px"),
        };
        let value: f32 = value
            .trim()
            .parse()
            .map_err(|_| BadgeError::InvalidDimension(s.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(BadgeError::InvalidDimension(s.to_string()));
        }
        match unit {
            "dp" => Ok(Self::Dp(value)),
            _ => Ok(Self::Px(value)),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Dp(dp) => write!(f, "{dp}dp"),
        }
    }
}

impl TryFrom<String> for Dimension {
    type Error = BadgeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Dimension> for String {
    fn from(dim: Dimension) -> Self {
        dim.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_dimensions() {
        let r = Rect::new(10, 0, 50, 20);
        assert_eq!(r.width(), 40);
        assert_eq!(r.height(), 20);
        assert_eq!(r.center_x(), 30.0);
        assert_eq!(r.center_y(), 10.0);
        assert!(!r.is_empty());
        assert!(Rect::default().is_empty());
    }

    #[test]
    fn dimension_parsing() {
        assert_eq!("12dp".parse::<Dimension>().expect("dp"), Dimension::Dp(12.0));
        assert_eq!("40px".parse::<Dimension>().expect("px"), Dimension::Px(40.0));
        assert_eq!("8".parse::<Dimension>().expect("bare"), Dimension::Px(8.0));
        assert!("12em".parse::<Dimension>().is_err());
        assert!("-4dp".parse::<Dimension>().is_err());
    }

    #[test]
    fn dimension_resolution() {
        assert_eq!(Dimension::Dp(12.0).resolve(2.0), 24.0);
        assert_eq!(Dimension::Px(40.0).resolve(3.0), 40.0);
    }
}
