//! Reusable badge components.
//!
//! Building blocks for badge rendering:
//!
//! - **Standalone**: `badge_pill`, `badge_dot`, `count_badge`
//! - **Overlay**: `Badged` - pins a badge onto arbitrary content
//!
//! Components return `Element<M>` and style themselves through closures, so
//! they compose with any view without extra wiring.

mod badge;
mod overlay;

pub use badge::{badge_dot, badge_pill, count_badge};
pub use overlay::Badged;
