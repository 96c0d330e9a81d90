//! Shared painting routines for custom-drawn controls
//!
//! Stateless helpers that record into a [`PaintContext`]. Widgets call them
//! from their paint paths with rectangles in local coordinates; every call
//! is independent and leaves no ambient state behind.

use mica_paint::{Color, Gradient, PaintContext, PathBuilder, Rect, RoundedRect, StrokeStyle};

/// Draw a gradient-shaded cylindrical bar, used for slider and progress
/// tracks.
///
/// The bar is banded vertically: a pair of tapered highlight/shadow lines
/// at each edge, a full-height backdrop line two units in from each edge,
/// and a glossy central fill. `round_left`/`round_right` taper the
/// outermost lines to suggest a rounded cap on that end.
///
/// Bands are placed against local y 0 regardless of `rect.y`; callers
/// translate the context onto the track before drawing.
pub fn draw_cylinder(
    ctx: &mut PaintContext,
    rect: Rect,
    base: Color,
    round_left: bool,
    round_right: bool,
) {
    let outer_line = Gradient::vertical()
        .stop(0.0, base.darker(50.0))
        .stop(0.5, base.lighter(25.0))
        .stop(1.0, base.darker(50.0));

    let inner_line = Gradient::vertical()
        .stop(0.0, base.darker(40.0))
        .stop(0.5, base.lighter(50.0))
        .stop(1.0, base.darker(40.0));

    // Outermost edge pair, tapered by two units when the corner is rounded.
    ctx.fill_rect(
        Rect::new(
            rect.x,
            if round_left { 2.0 } else { 0.0 },
            1.0,
            if round_left {
                rect.height - 4.0
            } else {
                rect.height
            },
        ),
        outer_line.clone(),
    );
    ctx.fill_rect(
        Rect::new(
            rect.x + rect.width - 1.0,
            if round_right { 2.0 } else { 0.0 },
            1.0,
            if round_right {
                rect.height - 4.0
            } else {
                rect.height
            },
        ),
        outer_line,
    );

    // Second pair, one unit in and tapered by one unit.
    ctx.fill_rect(
        Rect::new(
            rect.x + 1.0,
            if round_left { 1.0 } else { 0.0 },
            1.0,
            if round_left {
                rect.height - 2.0
            } else {
                rect.height
            },
        ),
        inner_line.clone(),
    );
    ctx.fill_rect(
        Rect::new(
            rect.x + rect.width - 2.0,
            if round_right { 1.0 } else { 0.0 },
            1.0,
            if round_right {
                rect.height - 2.0
            } else {
                rect.height
            },
        ),
        inner_line.clone(),
    );

    // Full-height backdrop lines, same gradient as the second pair.
    ctx.fill_rect(
        Rect::new(rect.x + 2.0, 0.0, 1.0, rect.height),
        inner_line.clone(),
    );
    ctx.fill_rect(
        Rect::new(rect.x + rect.width - 3.0, 0.0, 1.0, rect.height),
        inner_line,
    );

    // Glossy body: base at the rims, saturating toward white mid-band.
    let body = Gradient::vertical()
        .stop(0.0, base)
        .stop(0.15, base.lighter(75.0))
        .stop(0.5, base.lighter(200.0))
        .stop(0.85, base.lighter(75.0))
        .stop(1.0, base);
    ctx.fill_rect(
        Rect::new(rect.x + 3.0, 0.0, rect.width - 6.0, rect.height),
        body,
    );
}

/// Draw a rounded-rectangle slider knob.
///
/// The outer rounded rect is filled with `light` and stroked with
/// `border`; an inner rect inset by two units, with radii reduced by four,
/// is filled with a top-dark shade gradient of `light` so the knob reads
/// as pressable.
///
/// Radii below 4.0 leave the inner radii negative; behavior is then
/// degenerate.
pub fn draw_slider_handle(
    ctx: &mut PaintContext,
    rect: Rect,
    x_radius: f32,
    y_radius: f32,
    border: Color,
    light: Color,
) {
    let outer = RoundedRect::new(rect, x_radius, y_radius);
    ctx.fill_rounded_rect(outer, light);
    ctx.stroke_rounded_rect(
        outer,
        StrokeStyle {
            color: border,
            width: 1.0,
        },
    );

    let face = Gradient::vertical()
        .stop(0.0, light.darker(75.0))
        .stop(1.0, light.darker(10.0));
    ctx.fill_rounded_rect(
        RoundedRect::new(rect.inset(2.0), x_radius - 4.0, y_radius - 4.0),
        face,
    );
}

/// Draw a right-pointing chevron glyph filling `rect`.
///
/// The glyph is a seven-point closed caret with the trailing edge notched
/// inward by a third of the width, filled and stroked with the same solid
/// color.
pub fn draw_arrow(ctx: &mut PaintContext, rect: Rect, color: Color) {
    let width = rect.width / 3.0;
    let middle = rect.height / 2.0;

    let path = PathBuilder::new()
        .move_to(rect.x, rect.y)
        .line_to(rect.x + width, rect.y)
        .line_to(rect.x + rect.width, rect.y + middle)
        .line_to(rect.x + width, rect.y + rect.height)
        .line_to(rect.x, rect.y + rect.height)
        .line_to(rect.x + rect.width - width, rect.y + middle)
        .line_to(rect.x, rect.y)
        .build();

    ctx.fill_path(path.clone(), color);
    ctx.stroke_path(path, color, 1.0);
}

/// Draw a down-pointing chevron glyph filling `rect`.
///
/// Axis-swapped mirror of [`draw_arrow`]: the notch depth comes from the
/// height, the apex from the width.
pub fn draw_arrow_down(ctx: &mut PaintContext, rect: Rect, color: Color) {
    let width = rect.height / 3.0;
    let middle = rect.width / 2.0;

    let path = PathBuilder::new()
        .move_to(rect.x, rect.y)
        .line_to(rect.x, rect.y + width)
        .line_to(rect.x + middle, rect.y + rect.height)
        .line_to(rect.x + rect.width, rect.y + width)
        .line_to(rect.x + rect.width, rect.y)
        .line_to(rect.x + middle, rect.y + rect.height - width)
        .line_to(rect.x, rect.y)
        .build();

    ctx.fill_path(path.clone(), color);
    ctx.stroke_path(path, color, 1.0);
}
