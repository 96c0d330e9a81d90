//! Picker scroll-arrow painting
//!
//! A picker wheel shows a chevron glyph at each end of its viewport to
//! signal scrollability. The trailing glyph is drawn directly; the leading
//! glyph is the same glyph mirrored across its box midline through the
//! context's transform stack.

use mica_paint::{Color, PaintContext, Rect};

use crate::drawing::{draw_arrow, draw_arrow_down};

/// Inset between the viewport edge and a glyph box
const GLYPH_MARGIN: f32 = 4.0;

/// Scroll axis of the picker wheel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// Paint the leading and trailing scroll arrows of a picker viewport.
///
/// Vertical orientation puts an up chevron at the top and a down chevron
/// at the bottom; horizontal puts left/right chevrons at the sides. Glyph
/// boxes keep the 3:2 aspect of the chevron routines.
pub fn paint_scroll_arrows(
    ctx: &mut PaintContext,
    rect: Rect,
    color: Color,
    orientation: Orientation,
) {
    match orientation {
        Orientation::Vertical => {
            let w = rect.width - 2.0 * GLYPH_MARGIN;
            let h = w * 2.0 / 3.0;
            let leading = Rect::new(rect.x + GLYPH_MARGIN, rect.y + GLYPH_MARGIN, w, h);
            let trailing = Rect::new(
                rect.x + GLYPH_MARGIN,
                rect.bottom() - GLYPH_MARGIN - h,
                w,
                h,
            );

            // Up chevron: the down glyph flipped across the box midline.
            ctx.translate(0.0, 2.0 * leading.y + h);
            ctx.scale(1.0, -1.0);
            draw_arrow_down(ctx, leading, color);
            ctx.pop_transform();
            ctx.pop_transform();

            draw_arrow_down(ctx, trailing, color);
        }
        Orientation::Horizontal => {
            let h = rect.height - 2.0 * GLYPH_MARGIN;
            let w = h * 2.0 / 3.0;
            let leading = Rect::new(rect.x + GLYPH_MARGIN, rect.y + GLYPH_MARGIN, w, h);
            let trailing = Rect::new(
                rect.right() - GLYPH_MARGIN - w,
                rect.y + GLYPH_MARGIN,
                w,
                h,
            );

            // Left chevron: the right glyph flipped across the box midline.
            ctx.translate(2.0 * leading.x + w, 0.0);
            ctx.scale(-1.0, 1.0);
            draw_arrow(ctx, leading, color);
            ctx.pop_transform();
            ctx.pop_transform();

            draw_arrow(ctx, trailing, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mica_paint::PaintCommand;

    fn count(ctx: &PaintContext, pred: impl Fn(&PaintCommand) -> bool) -> usize {
        ctx.commands().iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn paints_two_glyphs_per_axis() {
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let mut ctx = PaintContext::new();
            paint_scroll_arrows(
                &mut ctx,
                Rect::new(0.0, 0.0, 40.0, 120.0),
                Color::BLACK,
                orientation,
            );
            assert_eq!(
                count(&ctx, |c| matches!(c, PaintCommand::FillPath { .. })),
                2,
                "{orientation:?} paints a glyph at each end"
            );
        }
    }

    #[test]
    fn mirrored_glyph_sits_inside_balanced_transforms() {
        let mut ctx = PaintContext::new();
        paint_scroll_arrows(
            &mut ctx,
            Rect::new(0.0, 0.0, 40.0, 120.0),
            Color::BLACK,
            Orientation::Vertical,
        );

        let pushes = count(&ctx, |c| matches!(c, PaintCommand::PushTransform { .. }));
        let pops = count(&ctx, |c| matches!(c, PaintCommand::PopTransform));
        assert_eq!(pushes, 2);
        assert_eq!(pushes, pops);

        // Both glyph draws happen after the pushes; the trailing glyph is
        // outside the pair.
        let pop_idx = ctx
            .commands()
            .iter()
            .rposition(|c| matches!(c, PaintCommand::PopTransform))
            .unwrap();
        let last_fill = ctx
            .commands()
            .iter()
            .rposition(|c| matches!(c, PaintCommand::FillPath { .. }))
            .unwrap();
        assert!(last_fill > pop_idx);
    }

    #[test]
    fn vertical_flip_targets_leading_box_midline() {
        let mut ctx = PaintContext::new();
        let rect = Rect::new(0.0, 0.0, 40.0, 120.0);
        paint_scroll_arrows(&mut ctx, rect, Color::BLACK, Orientation::Vertical);

        let w = rect.width - 2.0 * GLYPH_MARGIN;
        let h = w * 2.0 / 3.0;
        match &ctx.commands()[0] {
            PaintCommand::PushTransform { transform } => {
                assert_eq!(transform.f, 2.0 * GLYPH_MARGIN + h);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        match &ctx.commands()[1] {
            PaintCommand::PushTransform { transform } => {
                assert_eq!(transform.d, -1.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
