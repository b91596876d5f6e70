//! Corner badge demo application.
//!
//! A small Iced app showing a notification badge pinned to an inbox tile.
//! Badge state lives in a `badge_model::BadgeContainer`; the buttons mutate
//! it through the container's chainable setters and the drained redraw flag
//! feeds the log, while the view renders the same state through the
//! `Badged` overlay component.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use badge_gui::Badged;
use badge_model::{Argb, BadgeConfig, BadgeContainer, Dimension, UniformMeasurer};
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Task, Theme};

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    tracing::info!("Starting corner badge demo");

    // Run the Iced application using the builder pattern
    iced::application(Demo::new, Demo::update, Demo::view)
        .title("Corner Badge Demo")
        .window_size(iced::Size::new(420.0, 280.0))
        .run()
}

// =============================================================================
// APPLICATION
// =============================================================================

#[derive(Debug, Clone)]
enum Message {
    Increment,
    Clear,
    ToggleVisible,
}

struct Demo {
    /// Unread count backing the badge label.
    count: usize,
    /// The badge state: one container owning one indicator.
    badge: BadgeContainer,
}

impl Demo {
    fn new() -> (Self, Task<Message>) {
        let config = BadgeConfig {
            color: Argb(0xFFFF_4081),
            size: Dimension::Px(20.0),
            inset: Dimension::Px(2.0),
            visible: true,
            ..BadgeConfig::default()
        };
        let mut badge = BadgeContainer::new(&config, 1.0, &UniformMeasurer::default());
        let _ = badge.take_redraw();
        (Self { count: 0, badge }, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let fonts = UniformMeasurer::default();
        match message {
            Message::Increment => {
                self.count += 1;
                let label = if self.count > 99 {
                    "99+".to_string()
                } else {
                    self.count.to_string()
                };
                self.badge.set_badge_text(Some(label.as_str()), &fonts);
            }
            Message::Clear => {
                self.count = 0;
                self.badge.set_badge_text(None, &fonts);
            }
            Message::ToggleVisible => {
                let visible = self.badge.indicator().visible();
                self.badge.set_badge_visible(!visible);
            }
        }

        // Iced repaints after every update anyway; the drained flag just
        // shows the change-detection at work in the log.
        if self.badge.take_redraw() {
            tracing::debug!(bounds = ?self.badge.indicator().bounds(), "badge repaint requested");
        } else {
            tracing::debug!("badge unchanged, no repaint requested");
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let indicator = self.badge.indicator();

        let tile = container(text("Inbox").size(18))
            .width(Length::Fixed(160.0))
            .height(Length::Fixed(90.0))
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let badged_tile = Badged::new(tile)
            .text(indicator.text().unwrap_or_default())
            .color(indicator.color())
            .size(indicator.base_size() as f32)
            .inset(2.0)
            .visible(indicator.visible())
            .view();

        let controls = row![
            button("+1").on_press(Message::Increment),
            button("Clear").on_press(Message::Clear),
            button("Show/Hide").on_press(Message::ToggleVisible),
        ]
        .spacing(8.0);

        container(
            column![badged_tile, controls]
                .spacing(24.0)
                .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
    }
}
