//! The badge indicator: a self-sizing capsule pinned to the top-right
//! corner of its parent.
//!
//! Sizing rules:
//!
//! - Height is constant, equal to the base size `S`, whenever text is shown.
//! - With text, width grows to the measured text width plus `0.4·S` of
//!   horizontal padding, but never below `S` (so a one-character badge is at
//!   worst a circle).
//! - Without text the indicator collapses to a `0.75·S` square, painted as a
//!   small dot.
//! - The corner radius is always half the current height, so the shape reads
//!   as a circle or capsule at every size.
//!
//! Placement keeps the right edge flush with the parent's right edge and the
//! top edge at the parent's top, each pulled in by the configured corner
//! inset. Layout preserves the last explicitly-set width/height and only
//! re-offsets; only `set_text` changes the size.

use crate::color::{Argb, DEFAULT_TEXT_COLOR};
use crate::geometry::Rect;
use crate::paint::{Canvas, Redraw, TextMeasurer};

/// Empty-text dot diameter as a fraction of the base size.
const DOT_FACTOR: f32 = 0.75;

/// Label size as a fraction of the base size.
const TEXT_FACTOR: f32 = 0.75;

/// Horizontal text padding as a fraction of the base size.
const TEXT_PAD_FACTOR: f32 = 0.4;

/// A paintable badge shape with an optional centered label.
#[derive(Debug, Clone)]
pub struct BadgeIndicator {
    text: Option<String>,
    color: Argb,
    text_color: Argb,
    visible: bool,

    /// Base size `S` in pixels; fixes the height and the text scale.
    size: i32,
    /// Inset from the parent's top-right corner, in pixels.
    inset: i32,

    parent_width: i32,
    width: i32,
    height: i32,
    bounds: Rect,
    corner_radius: f32,
}

impl BadgeIndicator {
    /// Create an indicator with the given base size (pixels) and fill color.
    ///
    /// Starts invisible, without text, sized to a `size × size` square until
    /// the first `set_text` call.
    pub fn new(size: i32, color: Argb) -> Self {
        let mut indicator = Self {
            text: None,
            color,
            text_color: DEFAULT_TEXT_COLOR,
            visible: false,
            size,
            inset: 0,
            parent_width: size,
            width: size,
            height: size,
            bounds: Rect::default(),
            corner_radius: 0.0,
        };
        let _ = indicator.update_bounds();
        indicator
    }

    /// Set the inset from the parent's top-right corner.
    pub fn with_inset(mut self, inset: i32) -> Self {
        self.inset = inset;
        let _ = self.update_bounds();
        self
    }

    /// Base size `S` in pixels.
    pub fn base_size(&self) -> i32 {
        self.size
    }

    /// Size the label is rendered at: `0.75·S`.
    pub fn text_size(&self) -> f32 {
        self.size as f32 * TEXT_FACTOR
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Intrinsic size, before the parent-width clamp applied by layout.
    pub fn intrinsic_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn color(&self) -> Argb {
        self.color
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Update the label and resize to fit it.
    ///
    /// Empty or absent text collapses the indicator to a `0.75·S` square;
    /// otherwise the width fits the measured text plus `0.4·S`, clamped to at
    /// least `S`, at constant height `S`. Always requests a repaint, since
    /// the label glyphs changed even when the bounds did not.
    pub fn set_text(&mut self, text: Option<&str>, fonts: &dyn TextMeasurer) -> Redraw {
        self.text = text.filter(|t| !t.is_empty()).map(str::to_owned);
        let redraw = match &self.text {
            None => {
                let side = (self.size as f32 * DOT_FACTOR) as i32;
                self.resize(side, side)
            }
            Some(text) => {
                let fitted = (fonts.measure(text, self.text_size())
                    + self.size as f32 * TEXT_PAD_FACTOR) as i32;
                self.resize(fitted.max(self.size), self.size)
            }
        };
        tracing::trace!(text = ?self.text, bounds = ?self.bounds, "badge text updated");
        redraw.or(Redraw::Needed)
    }

    /// Re-pin to the top-right corner of the given parent rectangle.
    ///
    /// Called on every layout pass of the owning container. Keeps the stored
    /// width/height and only recomputes the offset.
    pub fn layout(&mut self, parent: Rect) -> Redraw {
        self.parent_width = parent.width();
        self.update_bounds()
    }

    /// Replace the bounding rectangle directly.
    ///
    /// Change-detected: an identical rectangle is a no-op. On change the
    /// corner radius is recomputed as half the new height, and the repaint
    /// request covers the previously painted region as well.
    pub fn set_bounds(&mut self, bounds: Rect) -> Redraw {
        if self.bounds == bounds {
            return Redraw::Unchanged;
        }
        self.bounds = bounds;
        self.corner_radius = bounds.height() as f32 / 2.0;
        Redraw::Needed
    }

    pub fn set_color(&mut self, color: Argb) -> Redraw {
        if self.color == color {
            return Redraw::Unchanged;
        }
        self.color = color;
        Redraw::Needed
    }

    /// Toggle visibility. Requests a repaint only on an actual change.
    pub fn set_visible(&mut self, visible: bool) -> Redraw {
        let changed = self.visible != visible;
        self.visible = visible;
        if changed { Redraw::Needed } else { Redraw::Unchanged }
    }

    /// Paint into the given canvas. No-op while invisible.
    ///
    /// Text is centered horizontally on the bounds and centered optically in
    /// the vertical: the baseline sits at `center_y − (ascent + descent)/2`
    /// rather than on the geometric center.
    pub fn draw(&self, canvas: &mut dyn Canvas, fonts: &dyn TextMeasurer) {
        if !self.visible {
            return;
        }
        canvas.fill_round_rect(self.bounds, self.corner_radius, self.color);
        let Some(text) = self.text.as_deref() else {
            return;
        };
        let metrics = fonts.metrics(self.text_size());
        let baseline = self.bounds.center_y() - (metrics.ascent + metrics.descent) / 2.0;
        canvas.draw_text(
            text,
            self.bounds.center_x(),
            baseline,
            self.text_size(),
            self.text_color,
        );
    }

    fn resize(&mut self, width: i32, height: i32) -> Redraw {
        self.width = width;
        self.height = height;
        self.update_bounds()
    }

    /// Recompute the pinned rectangle from the stored size, parent width and
    /// corner inset. Width is clamped to the parent so the badge never
    /// overhangs the left edge.
    fn update_bounds(&mut self) -> Redraw {
        let right = self.parent_width - self.inset;
        let top = self.inset;
        let rect = Rect::new(
            right - self.width.min(self.parent_width),
            top,
            right,
            top + self.height,
        );
        self.set_bounds(rect)
    }
}
