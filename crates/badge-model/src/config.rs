//! Badge configuration - the attribute surface read once at construction.

use serde::{Deserialize, Serialize};

use crate::color::{Argb, DEFAULT_BADGE_COLOR};
use crate::geometry::Dimension;

/// Configuration for a badge container.
///
/// Every field has a safe default, so a badge can be built from an empty
/// config block. Deserializable from TOML/JSON with colors as hex strings
/// and dimensions as `"12dp"` / `"40px"` strings.
///
/// ```
/// use badge_model::BadgeConfig;
///
/// let config: BadgeConfig = toml::from_str(
///     r##"
///     text = "9"
///     color = "#FF4081"
///     size = "12dp"
///     visible = true
///     "##,
/// ).unwrap();
/// assert!(config.visible);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    /// Initial label. Absent means a plain dot.
    pub text: Option<String>,

    /// Fill color (default: the fixed pink).
    pub color: Argb,

    /// Base size: the badge height and the basis of all sizing factors.
    pub size: Dimension,

    /// Whether the badge is shown initially.
    pub visible: bool,

    /// Inset from the parent's top-right corner.
    pub inset: Dimension,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            text: None,
            color: DEFAULT_BADGE_COLOR,
            size: Dimension::Dp(12.0),
            visible: false,
            inset: Dimension::Px(0.0),
        }
    }
}
