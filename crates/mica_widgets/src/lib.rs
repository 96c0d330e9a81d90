//! Mica Widget Library
//!
//! Painting routines for the toolkit's custom-drawn controls: the
//! gradient-shaded cylinder used for slider and progress tracks, the
//! rounded knob, and the chevron glyphs used by pickers. All painting
//! records into [`mica_paint::PaintContext`].

pub mod drawing;
pub mod picker;
pub mod slider;

pub use picker::{paint_scroll_arrows, Orientation};
pub use slider::{paint_slider, SliderStyle};
