//! Badge overlay wrapper.
//!
//! [`Badged`] pins a badge to the top-right corner of arbitrary content,
//! the way notification counts sit on an app icon. Sizing comes from the
//! badge model, so the rendered pill follows the same laws as a host that
//! paints through the model directly: constant height, width fitted to the
//! text with a minimum of the base size, dot collapse when the label is
//! empty, capsule corner radius at every size.

use badge_model::{
    Argb, BadgeConfig, BadgeIndicator, DEFAULT_BADGE_COLOR, DEFAULT_TEXT_COLOR, UniformMeasurer,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, stack, text};
use iced::{Border, Element, Length, Theme};

use crate::theme::{BADGE_SIZE, color};

/// Builder for content with a corner badge.
///
/// # Example
///
/// ```rust,ignore
/// use badge_gui::component::Badged;
/// use iced::widget::button;
///
/// let inbox = Badged::new(button("Inbox").on_press(Msg::OpenInbox))
///     .text("9")
///     .visible(true)
///     .view();
/// ```
pub struct Badged<'a, M> {
    content: Element<'a, M>,
    text: Option<String>,
    fill: Argb,
    size: f32,
    inset: f32,
    visible: bool,
}

impl<'a, M: 'a> Badged<'a, M> {
    /// Wrap `content`. The badge starts hidden, matching the model default.
    pub fn new(content: impl Into<Element<'a, M>>) -> Self {
        Self {
            content: content.into(),
            text: None,
            fill: DEFAULT_BADGE_COLOR,
            size: BADGE_SIZE,
            inset: 0.0,
            visible: false,
        }
    }

    /// Wrap `content` with everything taken from a badge configuration,
    /// resolving density-scaled dimensions against `density`.
    pub fn from_config(content: impl Into<Element<'a, M>>, config: &BadgeConfig, density: f32) -> Self {
        Self {
            content: content.into(),
            text: config.text.clone(),
            fill: config.color,
            size: config.size.resolve(density),
            inset: config.inset.resolve(density),
            visible: config.visible,
        }
    }

    /// Badge label. An empty string collapses the badge to a dot.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    /// Badge fill color.
    pub fn color(mut self, fill: Argb) -> Self {
        self.fill = fill;
        self
    }

    /// Base size in pixels (badge height; text renders at 0.75 of this).
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Inset from the content's top-right corner, in pixels.
    pub fn inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    /// Whether the badge is shown at all.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        if !self.visible {
            return self.content;
        }

        let fonts = UniformMeasurer::default();
        let mut indicator = BadgeIndicator::new(self.size as i32, self.fill);
        let _ = indicator.set_text(self.text.as_deref(), &fonts);

        let (width, height) = indicator.intrinsic_size();
        let (width, height) = (width as f32, height as f32);
        let radius = height / 2.0;
        let fill = self.fill;

        let label: Element<'a, M> = match indicator.text() {
            Some(label) => text(label.to_string())
                .size(indicator.text_size())
                .style(|_theme: &Theme| text::Style {
                    color: Some(color(DEFAULT_TEXT_COLOR)),
                })
                .into(),
            None => text("").into(),
        };

        let badge = container(label)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(move |_theme: &Theme| container::Style {
                background: Some(color(fill).into()),
                border: Border {
                    radius: radius.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        // Content first, badge composited over its top-right corner.
        stack![
            self.content,
            container(badge)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Top)
                .padding(self.inset),
        ]
        .into()
    }
}
