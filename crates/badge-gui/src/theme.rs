//! Visual constants and color conversion for badge components.

use badge_model::Argb;
use iced::Color;

// =============================================================================
// SIZES
// =============================================================================

/// Default badge base size - height of a pill, diameter basis of a dot.
pub const BADGE_SIZE: f32 = 16.0;

/// Full/pill radius - makes short ends fully rounded at any height.
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// COLOR CONVERSION
// =============================================================================

/// Convert a packed ARGB model color to an Iced color.
pub fn color(argb: Argb) -> Color {
    Color::from_rgba8(
        argb.red(),
        argb.green(),
        argb.blue(),
        f32::from(argb.alpha()) / 255.0,
    )
}
