//! Badge components.
//!
//! Standalone pill, dot and count badges. For pinning a badge onto other
//! content, see [`crate::component::Badged`].

use badge_model::{Argb, DEFAULT_TEXT_COLOR};
use iced::widget::{container, text};
use iced::{Border, Element, Length, Theme};

use crate::theme::{BADGE_SIZE, BORDER_RADIUS_FULL, color};

/// Creates a pill-shaped badge with a text label.
///
/// # Example
///
/// ```rust,ignore
/// use badge_gui::component::badge_pill;
/// use badge_model::DEFAULT_BADGE_COLOR;
///
/// let badge = badge_pill("New", DEFAULT_BADGE_COLOR);
/// ```
pub fn badge_pill<'a, M: 'a>(label: impl Into<String>, fill: Argb) -> Element<'a, M> {
    let label_str = label.into();

    container(
        text(label_str)
            .size(BADGE_SIZE * 0.75)
            .style(|_theme: &Theme| text::Style {
                color: Some(color(DEFAULT_TEXT_COLOR)),
            }),
    )
    .padding([2.0, 6.0])
    .style(move |_theme: &Theme| container::Style {
        background: Some(color(fill).into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

/// Creates a small dot indicator without text.
///
/// Sized at 0.75 of the base badge size, matching the collapsed state of a
/// text badge whose label was cleared.
pub fn badge_dot<'a, M: 'a>(fill: Argb) -> Element<'a, M> {
    let side = BADGE_SIZE * 0.75;

    container(text(""))
        .width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .style(move |_theme: &Theme| container::Style {
            background: Some(color(fill).into()),
            border: Border {
                radius: (side / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Creates a count badge for notification counts.
///
/// Counts above 99 render as `99+`.
pub fn count_badge<'a, M: 'a>(count: usize, fill: Argb) -> Element<'a, M> {
    badge_pill(count_label(count), fill)
}

/// Display text for a count, capped at `99+`.
pub(crate) fn count_label(count: usize) -> String {
    if count > 99 {
        "99+".to_string()
    } else {
        count.to_string()
    }
}
