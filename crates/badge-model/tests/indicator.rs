//! Tests for badge indicator sizing, placement and painting.

use badge_model::{Argb, BadgeIndicator, Canvas, Rect, Redraw, TextMeasurer, UniformMeasurer};

const PINK: Argb = badge_model::DEFAULT_BADGE_COLOR;

/// Canvas stub that records every paint call.
#[derive(Default)]
struct RecordingCanvas {
    shapes: Vec<(Rect, f32, Argb)>,
    texts: Vec<(String, f32, f32)>,
}

impl Canvas for RecordingCanvas {
    fn fill_round_rect(&mut self, rect: Rect, corner_radius: f32, color: Argb) {
        self.shapes.push((rect, corner_radius, color));
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline_y: f32, _text_size: f32, _color: Argb) {
        self.texts.push((text.to_string(), x, baseline_y));
    }
}

#[test]
fn labeled_badge_scenario() {
    // Base size 40px, text "9", parent 200px wide.
    let fonts = UniformMeasurer::new(0.5);
    let mut badge = BadgeIndicator::new(40, PINK);
    let _ = badge.set_text(Some("9"), &fonts);
    let _ = badge.layout(Rect::new(0, 0, 200, 100));

    let bounds = badge.bounds();
    assert_eq!(bounds.height(), 40);
    // measured("9") = 0.5 * 30 = 15px, plus 0.4 * 40 = 16px padding,
    // clamped up to the 40px base size
    assert_eq!(bounds.width(), 40);
    assert_eq!(bounds.right, 200);
    assert_eq!(bounds.top, 0);
    assert_eq!(badge.corner_radius(), 20.0);
}

#[test]
fn wide_label_extends_into_a_capsule() {
    let fonts = UniformMeasurer::new(0.5);
    let mut badge = BadgeIndicator::new(40, PINK);
    let _ = badge.set_text(Some("9999"), &fonts);
    let _ = badge.layout(Rect::new(0, 0, 200, 100));

    // measured("9999") = 4 * 0.5 * 30 = 60px, plus 16px padding
    let bounds = badge.bounds();
    assert_eq!(bounds.width(), 76);
    assert_eq!(bounds.height(), 40);
    assert_eq!(bounds.right, 200);
    assert_eq!(badge.corner_radius(), 20.0);
}

#[test]
fn empty_text_collapses_to_a_dot() {
    // Base size 40px, no text: a 30px circle (0.75 * 40).
    let fonts = UniformMeasurer::default();
    let mut badge = BadgeIndicator::new(40, PINK);
    let _ = badge.set_text(None, &fonts);

    let bounds = badge.bounds();
    assert_eq!(bounds.width(), 30);
    assert_eq!(bounds.height(), 30);
    assert_eq!(badge.corner_radius(), 15.0);

    let _ = badge.set_text(Some(""), &fonts);
    assert_eq!(badge.bounds(), bounds);
}

#[test]
fn set_text_is_idempotent_on_bounds() {
    let fonts = UniformMeasurer::default();
    let mut badge = BadgeIndicator::new(24, PINK);
    let _ = badge.layout(Rect::new(0, 0, 320, 48));

    let _ = badge.set_text(Some("12"), &fonts);
    let first = badge.bounds();
    let _ = badge.set_text(Some("12"), &fonts);
    assert_eq!(badge.bounds(), first);
}

#[test]
fn layout_preserves_text_derived_size() {
    let fonts = UniformMeasurer::new(0.5);
    let mut badge = BadgeIndicator::new(40, PINK);
    let _ = badge.set_text(Some("9999"), &fonts);
    let width = badge.bounds().width();

    // Re-layouts move the badge but never resize it.
    let _ = badge.layout(Rect::new(0, 0, 500, 80));
    assert_eq!(badge.bounds().width(), width);
    assert_eq!(badge.bounds().right, 500);

    let _ = badge.layout(Rect::new(0, 0, 120, 80));
    assert_eq!(badge.bounds().right, 120);
}

#[test]
fn inset_pulls_badge_in_from_the_corner() {
    let fonts = UniformMeasurer::default();
    let mut badge = BadgeIndicator::new(40, PINK).with_inset(12);
    let _ = badge.set_text(Some("9"), &fonts);
    let _ = badge.layout(Rect::new(0, 0, 200, 100));

    let bounds = badge.bounds();
    assert_eq!(bounds.right, 188);
    assert_eq!(bounds.top, 12);
    assert_eq!(bounds.height(), 40);
}

#[test]
fn invisible_badge_paints_nothing() {
    let fonts = UniformMeasurer::default();
    let mut badge = BadgeIndicator::new(40, PINK);
    let _ = badge.set_text(Some("9"), &fonts);
    let _ = badge.layout(Rect::new(0, 0, 200, 100));

    let mut canvas = RecordingCanvas::default();
    badge.draw(&mut canvas, &fonts);
    assert!(canvas.shapes.is_empty());
    assert!(canvas.texts.is_empty());

    let _ = badge.set_visible(true);
    badge.draw(&mut canvas, &fonts);
    assert_eq!(canvas.shapes.len(), 1);
    assert_eq!(canvas.texts.len(), 1);
}

#[test]
fn draw_centers_text_optically() {
    let fonts = UniformMeasurer::default();
    let mut badge = BadgeIndicator::new(40, PINK);
    let _ = badge.set_visible(true);
    let _ = badge.set_text(Some("9"), &fonts);
    let _ = badge.layout(Rect::new(0, 0, 200, 100));

    let mut canvas = RecordingCanvas::default();
    badge.draw(&mut canvas, &fonts);

    let (text, x, baseline) = canvas.texts[0].clone();
    assert_eq!(text, "9");
    assert_eq!(x, badge.bounds().center_x());
    // Baseline sits above the geometric center by half the net font extent.
    let metrics = fonts.metrics(badge.text_size());
    let expected = badge.bounds().center_y() - (metrics.ascent + metrics.descent) / 2.0;
    assert_eq!(baseline, expected);
    assert!(baseline > badge.bounds().center_y());
}

#[test]
fn dot_badge_paints_shape_without_text() {
    let fonts = UniformMeasurer::default();
    let mut badge = BadgeIndicator::new(40, PINK);
    let _ = badge.set_visible(true);
    let _ = badge.set_text(None, &fonts);

    let mut canvas = RecordingCanvas::default();
    badge.draw(&mut canvas, &fonts);
    assert_eq!(canvas.shapes.len(), 1);
    assert!(canvas.texts.is_empty());

    let (rect, radius, color) = canvas.shapes[0];
    assert_eq!(rect, badge.bounds());
    assert_eq!(radius, 15.0);
    assert_eq!(color, PINK);
}

#[test]
fn visibility_changes_are_change_detected() {
    let mut badge = BadgeIndicator::new(40, PINK);
    assert_eq!(badge.set_visible(false), Redraw::Unchanged);
    assert_eq!(badge.set_visible(true), Redraw::Needed);
    assert_eq!(badge.set_visible(true), Redraw::Unchanged);
    assert!(badge.visible());
}

#[test]
fn identical_bounds_are_a_no_op() {
    let mut badge = BadgeIndicator::new(40, PINK);
    let _ = badge.layout(Rect::new(0, 0, 200, 100));
    let current = badge.bounds();
    assert_eq!(badge.set_bounds(current), Redraw::Unchanged);
    assert_eq!(badge.layout(Rect::new(0, 0, 200, 50)), Redraw::Unchanged);
    assert_eq!(badge.layout(Rect::new(0, 0, 300, 50)), Redraw::Needed);
}

#[test]
fn color_changes_request_repaint_once() {
    let mut badge = BadgeIndicator::new(40, PINK);
    assert_eq!(badge.set_color(Argb(0xFF00_FF00)), Redraw::Needed);
    assert_eq!(badge.set_color(Argb(0xFF00_FF00)), Redraw::Unchanged);
    assert_eq!(badge.color(), Argb(0xFF00_FF00));
}
