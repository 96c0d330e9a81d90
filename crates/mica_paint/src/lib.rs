//! Mica Paint/Canvas API
//!
//! A 2D drawing API for custom widget graphics.
//!
//! # Features
//!
//! - Path drawing (polygonal move/line paths)
//! - Shape primitives (rect, rounded rect)
//! - Fills and strokes with colors and linear gradients
//! - Percentage-based color tinting and shading
//! - Transform stack for mirrored/offset drawing
//!
//! Widgets record [`PaintCommand`]s into a [`PaintContext`]; a renderer
//! replays the list in order.

pub mod color;
pub mod context;
pub mod gradient;
pub mod path;
pub mod primitives;

pub use color::Color;
pub use context::{FillStyle, PaintCommand, PaintContext, StrokeStyle, Transform2D};
pub use gradient::{Gradient, GradientStop};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::{Rect, RoundedRect};
