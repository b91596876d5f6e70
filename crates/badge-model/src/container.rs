//! The badge container: arbitrary host content with one owned badge
//! indicator composited over its top-right corner.
//!
//! The container is the host-facing surface. It owns exactly one
//! [`BadgeIndicator`] for its whole lifetime, feeds layout changes into it,
//! and accumulates the indicator's redraw requests into a dirty flag that
//! the host render loop drains with [`BadgeContainer::take_redraw`].

use crate::color::Argb;
use crate::config::BadgeConfig;
use crate::geometry::Rect;
use crate::indicator::BadgeIndicator;
use crate::paint::{Canvas, TextMeasurer};

/// Owns a badge indicator and mediates between it and the host view.
#[derive(Debug, Clone)]
pub struct BadgeContainer {
    indicator: BadgeIndicator,
    dirty: bool,
}

impl BadgeContainer {
    /// Build a container from configuration.
    ///
    /// Reads the configuration once: dimensions are resolved against the
    /// display `density` here and never re-read. Initial text and visibility
    /// are applied immediately; the construction itself counts as dirty so
    /// the host paints the initial state.
    pub fn new(config: &BadgeConfig, density: f32, fonts: &dyn TextMeasurer) -> Self {
        let size = config.size.resolve(density).round() as i32;
        let inset = config.inset.resolve(density).round() as i32;
        let mut indicator = BadgeIndicator::new(size, config.color).with_inset(inset);
        let _ = indicator.set_visible(config.visible);
        let _ = indicator.set_text(config.text.as_deref(), fonts);
        tracing::debug!(size, inset, color = %config.color, "badge container constructed");
        Self {
            indicator,
            dirty: true,
        }
    }

    /// Read access to the owned indicator.
    pub fn indicator(&self) -> &BadgeIndicator {
        &self.indicator
    }

    /// Forward a layout pass to the indicator.
    ///
    /// Must be called every time the host positions the container, not only
    /// the first time, so the badge stays pinned through resizes.
    pub fn layout(&mut self, bounds: Rect) -> &mut Self {
        let redraw = self.indicator.layout(bounds);
        self.dirty |= redraw.is_needed();
        self
    }

    /// Update the badge label.
    pub fn set_badge_text(&mut self, text: Option<&str>, fonts: &dyn TextMeasurer) -> &mut Self {
        let redraw = self.indicator.set_text(text, fonts);
        self.dirty |= redraw.is_needed();
        self
    }

    /// Update the badge fill color.
    pub fn set_badge_color(&mut self, color: Argb) -> &mut Self {
        let redraw = self.indicator.set_color(color);
        self.dirty |= redraw.is_needed();
        self
    }

    /// Update badge visibility. Marks dirty only when the value changed.
    pub fn set_badge_visible(&mut self, visible: bool) -> &mut Self {
        let redraw = self.indicator.set_visible(visible);
        self.dirty |= redraw.is_needed();
        self
    }

    /// Drain the accumulated redraw request.
    ///
    /// Returns true when any mutation since the last call changed the
    /// visible result; the host render loop polls this on its own schedule.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Composite the badge over the host's already-drawn foreground.
    pub fn draw_foreground(&self, canvas: &mut dyn Canvas, fonts: &dyn TextMeasurer) {
        self.indicator.draw(canvas, fonts);
    }
}
