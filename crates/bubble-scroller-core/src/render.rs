//! Render adapter: turns scroller state into plain draw commands for a host.

use crate::geometry::{Point, TextPath};
use crate::state::ScrollerState;
use crate::style::{Rgb, TextStyle};

/// Colour of the debug stroke along the scroll line.
pub const DEBUG_PATH_COLOR: Rgb = Rgb::GREEN;

/// One label to draw, centred on `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph<'a> {
    pub index: usize,
    pub position: Point,
    /// Base text size times the row's scale factor
    pub text_size: f32,
    /// Row scale factor relative to the base text size
    pub scale: f32,
    pub label: &'a str,
    pub color: Rgb,
}

/// Host renderer the scroller draws into.
pub trait RenderSink {
    fn stroke_path(&mut self, path: &TextPath, color: Rgb);

    fn draw_glyph(&mut self, glyph: &Glyph<'_>);
}

/// Emit the optional debug path stroke, then one glyph per section.
pub fn render_scroller<S: RenderSink + ?Sized>(
    state: &ScrollerState,
    style: &TextStyle,
    debug_path: bool,
    sink: &mut S,
) {
    if debug_path {
        sink.stroke_path(state.text_path(), DEBUG_PATH_COLOR);
    }

    let sections = state.sections();
    let scales = state.scales();
    for (index, &scale) in scales.iter().enumerate() {
        let glyph = Glyph {
            index,
            position: state.row_position(index),
            text_size: scale * style.size,
            scale,
            label: sections.section_label(index),
            color: style.color,
        };
        sink.draw_glyph(&glyph);
    }
}
