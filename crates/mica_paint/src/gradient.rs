//! Linear gradient fills
//!
//! Gradient coordinates are in the unit space of the shape being filled:
//! (0, 0) is the shape's top-left corner and (1, 1) its bottom-right. The
//! same gradient value can therefore fill shapes of any size.

use crate::color::Color;
use crate::path::Point;

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32, // 0.0 to 1.0
    pub color: Color,
}

/// A linear gradient in shape-relative unit coordinates
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a gradient along an arbitrary axis, with no stops yet
    pub fn linear(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Create a top-to-bottom gradient, with no stops yet
    pub fn vertical() -> Self {
        Self::linear(Point::new(0.0, 0.0), Point::new(0.0, 1.0))
    }

    /// Append a color stop at `offset` (0.0 to 1.0)
    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }
}
