//! Cross-routine painting properties
//!
//! Exercises the drawing routines and widget painters through the public
//! API, asserting on the recorded command lists.

use mica_paint::{Color, PaintCommand, PaintContext, Point, Rect};
use mica_widgets::drawing::{draw_arrow, draw_arrow_down, draw_cylinder, draw_slider_handle};
use mica_widgets::{paint_scroll_arrows, paint_slider, Orientation, SliderStyle};

fn base() -> Color {
    Color::from_hex(0x5A7FB5)
}

fn path_points(ctx: &PaintContext) -> Vec<Point> {
    match ctx
        .commands()
        .iter()
        .find(|c| matches!(c, PaintCommand::FillPath { .. }))
    {
        Some(PaintCommand::FillPath { path, .. }) => path.points().collect(),
        _ => panic!("no filled path recorded"),
    }
}

#[test]
fn cylinder_central_fill_matches_contract() {
    // For any rect wider and taller than the six edge lines, the body fill
    // is the seventh command at (x+3, 0, width-6, height).
    for (x, w, h) in [(0.0, 7.0, 7.0), (5.0, 48.0, 10.0), (12.5, 100.0, 22.0)] {
        let mut ctx = PaintContext::new();
        draw_cylinder(&mut ctx, Rect::new(x, 3.0, w, h), base(), true, true);

        assert_eq!(ctx.commands().len(), 7);
        match &ctx.commands()[6] {
            PaintCommand::FillRect { rect, .. } => {
                assert_eq!(*rect, Rect::new(x + 3.0, 0.0, w - 6.0, h));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

#[test]
fn arrows_are_axis_swapped_mirrors() {
    let mut horizontal = PaintContext::new();
    draw_arrow(&mut horizontal, Rect::new(0.0, 0.0, 12.0, 8.0), Color::RED);

    let mut vertical = PaintContext::new();
    draw_arrow_down(&mut vertical, Rect::new(0.0, 0.0, 8.0, 12.0), Color::RED);

    let swapped: Vec<Point> = path_points(&horizontal)
        .iter()
        .map(|p| Point::new(p.y, p.x))
        .collect();
    assert_eq!(swapped, path_points(&vertical));
}

#[test]
fn arrows_close_their_outline() {
    let mut ctx = PaintContext::new();
    draw_arrow(&mut ctx, Rect::new(2.0, 4.0, 9.0, 6.0), Color::RED);

    let pts = path_points(&ctx);
    assert_eq!(pts.len(), 7);
    assert_eq!(pts.first(), pts.last());
}

#[test]
fn identical_inputs_record_identical_commands() {
    let rect = Rect::new(1.0, 2.0, 36.0, 12.0);
    let style = SliderStyle::default();

    let paint_all = |ctx: &mut PaintContext| {
        draw_cylinder(ctx, rect, base(), true, false);
        draw_slider_handle(ctx, rect, 5.0, 5.0, Color::BLACK, Color::WHITE);
        draw_arrow(ctx, rect, Color::RED);
        draw_arrow_down(ctx, rect, Color::RED);
        paint_slider(ctx, rect, 0.3, &style);
        paint_scroll_arrows(ctx, rect, Color::BLACK, Orientation::Horizontal);
    };

    let mut first = PaintContext::new();
    let mut second = PaintContext::new();
    paint_all(&mut first);
    paint_all(&mut second);

    assert_eq!(first.commands(), second.commands());
}

#[test]
fn degenerate_rects_do_not_panic() {
    let mut ctx = PaintContext::new();
    for rect in [
        Rect::new(0.0, 0.0, 0.0, 0.0),
        Rect::new(0.0, 0.0, 1.0, 0.0),
        Rect::new(0.0, 0.0, 0.0, 1.0),
        Rect::new(0.0, 0.0, 1.0, 1.0),
    ] {
        draw_cylinder(&mut ctx, rect, base(), true, true);
        draw_slider_handle(&mut ctx, rect, 4.0, 4.0, Color::BLACK, Color::WHITE);
        draw_arrow(&mut ctx, rect, Color::RED);
        draw_arrow_down(&mut ctx, rect, Color::RED);
        paint_slider(&mut ctx, rect, 0.5, &SliderStyle::default());
        paint_scroll_arrows(&mut ctx, rect, Color::BLACK, Orientation::Vertical);
    }
    assert!(!ctx.commands().is_empty());
}

#[test]
fn slider_records_groove_then_knob() {
    let mut ctx = PaintContext::new();
    paint_slider(
        &mut ctx,
        Rect::new(0.0, 0.0, 120.0, 24.0),
        0.75,
        &SliderStyle::default(),
    );

    let fills = ctx
        .commands()
        .iter()
        .filter(|c| matches!(c, PaintCommand::FillRect { .. }))
        .count();
    let rounded = ctx
        .commands()
        .iter()
        .filter(|c| matches!(c, PaintCommand::FillRoundedRect { .. }))
        .count();
    assert_eq!(fills, 7, "groove is one cylinder");
    assert_eq!(rounded, 2, "knob is outer face plus shaded inner face");
}
