//! Paint context - the main drawing API

use crate::color::Color;
use crate::gradient::Gradient;
use crate::path::Path;
use crate::primitives::{Rect, RoundedRect};

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Stroke style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// 2D affine transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            e: x,
            f: y,
            ..Self::identity()
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::identity()
        }
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        style: FillStyle,
    },
    FillRoundedRect {
        rect: RoundedRect,
        style: FillStyle,
    },
    StrokeRoundedRect {
        rect: RoundedRect,
        style: StrokeStyle,
    },
    FillPath {
        path: Path,
        style: FillStyle,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
    PushTransform {
        transform: Transform2D,
    },
    PopTransform,
}

/// The paint context used for custom drawing
///
/// Records commands for later replay by a renderer. Commands carry their
/// own fill/stroke styles, so no ambient pen/brush state survives between
/// calls. Transforms nest: the transform pushed last applies to geometry
/// first.
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    transform_depth: usize,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transform_depth: 0,
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    // === Shape drawing ===

    pub fn fill_rect(&mut self, rect: Rect, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillRect {
            rect,
            style: style.into(),
        });
    }

    pub fn fill_rounded_rect(&mut self, rect: RoundedRect, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillRoundedRect {
            rect,
            style: style.into(),
        });
    }

    pub fn stroke_rounded_rect(&mut self, rect: RoundedRect, style: StrokeStyle) {
        self.commands
            .push(PaintCommand::StrokeRoundedRect { rect, style });
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillPath {
            path,
            style: style.into(),
        });
    }

    pub fn stroke_path(&mut self, path: Path, color: Color, width: f32) {
        self.commands.push(PaintCommand::StrokePath {
            path,
            style: StrokeStyle { color, width },
        });
    }

    // === Transforms ===

    pub fn push_transform(&mut self, transform: Transform2D) {
        self.transform_depth += 1;
        self.commands
            .push(PaintCommand::PushTransform { transform });
    }

    pub fn pop_transform(&mut self) {
        if self.transform_depth == 0 {
            tracing::warn!("Transform stack underflow: pop without matching push");
            return;
        }
        self.transform_depth -= 1;
        self.commands.push(PaintCommand::PopTransform);
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.push_transform(Transform2D::translate(x, y));
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.push_transform(Transform2D::scale(sx, sy));
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}
