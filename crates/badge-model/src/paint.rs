//! Injected rendering capabilities.
//!
//! The badge core never talks to a concrete rendering backend. It paints
//! through [`Canvas`], measures text through [`TextMeasurer`], and reports
//! repaint needs through [`Redraw`] values returned from every mutator. The
//! host render loop decides when (and whether) to honor a redraw request;
//! the core performs no scheduling or I/O of its own.

use crate::color::Argb;
use crate::geometry::Rect;

// =============================================================================
// DIRTY SIGNAL
// =============================================================================

/// Outcome of a mutation: whether the host should repaint.
///
/// Replaces implicit invalidation. Mutators return `Needed` only when the
/// visible result actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "redraw requests must be forwarded to the host render loop"]
pub enum Redraw {
    /// The visible result changed; repaint on the next pass.
    Needed,
    /// Nothing visible changed; no repaint required.
    Unchanged,
}

impl Redraw {
    pub const fn is_needed(self) -> bool {
        matches!(self, Self::Needed)
    }

    /// Combine two signals: a repaint is needed if either side needs one.
    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Unchanged, Self::Unchanged) => Self::Unchanged,
            _ => Self::Needed,
        }
    }
}

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Vertical font metrics at a given text size.
///
/// Follows the raster convention: `ascent` is negative (distance above the
/// baseline), `descent` positive (below).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

/// Text measurement service supplied by the host.
pub trait TextMeasurer {
    /// Advance width of `text` rendered at `text_size` pixels.
    fn measure(&self, text: &str, text_size: f32) -> f32;

    /// Vertical metrics of the badge font at `text_size` pixels.
    fn metrics(&self, text_size: f32) -> FontMetrics;
}

/// Fixed-advance measurer: every glyph advances by `advance × text_size`.
///
/// Good enough for tests and for hosts without synchronous font metrics;
/// real hosts should measure with their actual font stack.
#[derive(Debug, Clone, Copy)]
pub struct UniformMeasurer {
    advance: f32,
}

impl UniformMeasurer {
    pub const fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for UniformMeasurer {
    /// Advance factor approximating a typical UI font.
    fn default() -> Self {
        Self::new(0.58)
    }
}

impl TextMeasurer for UniformMeasurer {
    fn measure(&self, text: &str, text_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance * text_size
    }

    fn metrics(&self, text_size: f32) -> FontMetrics {
        FontMetrics {
            ascent: -0.78 * text_size,
            descent: 0.22 * text_size,
        }
    }
}

// =============================================================================
// PAINT SURFACE
// =============================================================================

/// Minimal 2D paint surface the badge draws into.
pub trait Canvas {
    /// Fill a rounded rectangle. A radius of half the height yields the
    /// capsule/circle shapes the badge uses.
    fn fill_round_rect(&mut self, rect: Rect, corner_radius: f32, color: Argb);

    /// Draw `text` horizontally centered at `x`, with its baseline at
    /// `baseline_y`.
    fn draw_text(&mut self, text: &str, x: f32, baseline_y: f32, text_size: f32, color: Argb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraw_combines() {
        assert_eq!(Redraw::Unchanged.or(Redraw::Unchanged), Redraw::Unchanged);
        assert_eq!(Redraw::Needed.or(Redraw::Unchanged), Redraw::Needed);
        assert_eq!(Redraw::Unchanged.or(Redraw::Needed), Redraw::Needed);
        assert!(Redraw::Needed.is_needed());
    }

    #[test]
    fn uniform_measurer_scales_with_text() {
        let m = UniformMeasurer::new(0.5);
        assert_eq!(m.measure("99+", 30.0), 45.0);
        assert_eq!(m.measure("", 30.0), 0.0);
        let metrics = m.metrics(30.0);
        assert!(metrics.ascent < 0.0);
        assert!(metrics.descent > 0.0);
    }
}
