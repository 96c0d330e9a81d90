//! Slider painting
//!
//! Paints the slider's groove through the cylinder routine and the knob
//! through the handle routine. The painter is stateless; the widget owns
//! the value and calls in from its paint path.

use mica_paint::{Color, PaintContext, Rect};

use crate::drawing::{draw_cylinder, draw_slider_handle};

/// Visual configuration for a slider
#[derive(Clone, Debug)]
pub struct SliderStyle {
    /// Groove base color
    pub track_color: Color,
    /// Knob outline color
    pub handle_border: Color,
    /// Knob face color
    pub handle_light: Color,
    /// Groove thickness
    pub track_thickness: f32,
    /// Knob width
    pub handle_width: f32,
    /// Knob corner radii; keep at 4.0 or above so the knob face keeps
    /// valid inner radii
    pub handle_radius_x: f32,
    pub handle_radius_y: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_color: Color::from_hex(0x8C8C8C),
            handle_border: Color::from_hex(0x404040),
            handle_light: Color::from_hex(0xF0F0F0),
            track_thickness: 8.0,
            handle_width: 14.0,
            handle_radius_x: 6.0,
            handle_radius_y: 6.0,
        }
    }
}

impl SliderStyle {
    /// Set the groove base color
    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the knob outline color
    pub fn handle_border(mut self, color: Color) -> Self {
        self.handle_border = color;
        self
    }

    /// Set the knob face color
    pub fn handle_light(mut self, color: Color) -> Self {
        self.handle_light = color;
        self
    }

    /// Set the groove thickness
    pub fn track_thickness(mut self, thickness: f32) -> Self {
        self.track_thickness = thickness;
        self
    }

    /// Set the knob width
    pub fn handle_width(mut self, width: f32) -> Self {
        self.handle_width = width;
        self
    }

    /// Set the knob corner radii
    pub fn handle_radii(mut self, x: f32, y: f32) -> Self {
        self.handle_radius_x = x;
        self.handle_radius_y = y;
        self
    }
}

/// Paint a horizontal slider into `rect` at `value` (clamped to [0, 1]).
///
/// The groove spans the full width with both ends rounded; the knob spans
/// the full height and slides over the remaining width.
pub fn paint_slider(ctx: &mut PaintContext, rect: Rect, value: f32, style: &SliderStyle) {
    let value = value.clamp(0.0, 1.0);

    // The cylinder routine places its bands against local y 0; move the
    // context onto the groove before drawing.
    let track_y = rect.y + (rect.height - style.track_thickness) / 2.0;
    ctx.translate(0.0, track_y);
    draw_cylinder(
        ctx,
        Rect::new(rect.x, 0.0, rect.width, style.track_thickness),
        style.track_color,
        true,
        true,
    );
    ctx.pop_transform();

    let span = (rect.width - style.handle_width).max(0.0);
    let handle = Rect::new(rect.x + span * value, rect.y, style.handle_width, rect.height);
    tracing::trace!(
        "Slider paint: value={:.2}, handle x={:.1}, track y={:.1}",
        value,
        handle.x,
        track_y
    );
    draw_slider_handle(
        ctx,
        handle,
        style.handle_radius_x,
        style.handle_radius_y,
        style.handle_border,
        style.handle_light,
    );
}
