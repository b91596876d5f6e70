//! Corner badge components for Iced.
//!
//! Renders the badge semantics of `badge-model` as composable Iced
//! elements: standalone pills and dots, plus the [`component::Badged`]
//! wrapper that overlays a badge on the top-right corner of any content.
//!
//! Built against Iced 0.14.0.

pub mod component;
pub mod theme;

pub use component::{Badged, badge_dot, badge_pill, count_badge};
