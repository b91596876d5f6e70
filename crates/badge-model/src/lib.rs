//! Corner badge core model.
//!
//! Host-agnostic geometry and paint sequencing for a badge overlay: a
//! colored capsule or dot, optionally labeled, pinned to the top-right
//! corner of a parent rectangle. The host supplies text measurement and a
//! paint surface through traits and honors explicit redraw requests; the
//! core performs no scheduling, I/O or rendering of its own.

pub mod color;
pub mod config;
pub mod container;
pub mod error;
pub mod geometry;
pub mod indicator;
pub mod paint;

pub use color::{Argb, DEFAULT_BADGE_COLOR, DEFAULT_TEXT_COLOR};
pub use config::BadgeConfig;
pub use container::BadgeContainer;
pub use error::{BadgeError, Result};
pub use geometry::{Dimension, Rect};
pub use indicator::BadgeIndicator;
pub use paint::{Canvas, FontMetrics, Redraw, TextMeasurer, UniformMeasurer};
