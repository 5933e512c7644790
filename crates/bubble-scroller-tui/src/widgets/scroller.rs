use bubble_scroller_core::{Glyph, PathSegment, Point, RenderSink, Rgb, TextPath};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme::{to_color, Theme};

/// Straight pieces each arc is flattened into
const ARC_STEPS: usize = 24;

/// Above this share of the scale range a label is drawn as the focus
const FOCUS_EMPHASIS: f32 = 0.66;

/// A line piece in scroller units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

/// A label centred on `position`, in scroller units
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Point,
    pub text: String,
    pub style: Style,
}

/// Collects the scroller's draw calls as canvas shapes
pub struct CanvasSink<'a> {
    theme: &'a Theme,
    cell_width: f32,
    scale_min: f32,
    scale_max: f32,
    pub strokes: Vec<Stroke>,
    pub labels: Vec<Label>,
}

impl<'a> CanvasSink<'a> {
    pub fn new(theme: &'a Theme, cell_width: f32, scale_min: f32, scale_max: f32) -> Self {
        Self {
            theme,
            cell_width,
            scale_min,
            scale_max,
            strokes: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Terminal text has one size, so a row's scale shows up as weight and colour.
    fn label_style(&self, scale: f32, color: Rgb) -> Style {
        let range = self.scale_max - self.scale_min;
        let emphasis = if range > 0.0 {
            (scale - self.scale_min) / range
        } else {
            0.0
        };

        let base = Style::default().bg(self.theme.paper);
        if emphasis > FOCUS_EMPHASIS {
            base.fg(self.theme.highlight).add_modifier(Modifier::BOLD)
        } else if emphasis > 0.0 {
            base.fg(to_color(color)).add_modifier(Modifier::BOLD)
        } else if emphasis < 0.0 {
            base.fg(to_color(color)).add_modifier(Modifier::DIM)
        } else {
            base.fg(to_color(color))
        }
    }
}

impl RenderSink for CanvasSink<'_> {
    fn stroke_path(&mut self, path: &TextPath, color: Rgb) {
        let color = to_color(color);
        let mut cursor: Option<Point> = None;
        let mut subpath_start: Option<Point> = None;

        for segment in path.segments() {
            match *segment {
                PathSegment::MoveTo(point) => {
                    cursor = Some(point);
                    subpath_start = Some(point);
                }
                PathSegment::LineTo(point) => {
                    if let Some(from) = cursor {
                        self.strokes.push(Stroke { from, to: point, color });
                    }
                    cursor = Some(point);
                }
                PathSegment::ArcTo { .. } => {
                    // An arc joins the current point to its start with a line.
                    for point in segment.arc_points(ARC_STEPS) {
                        if let Some(from) = cursor {
                            self.strokes.push(Stroke { from, to: point, color });
                        }
                        cursor = Some(point);
                    }
                }
                PathSegment::Close => {
                    if let (Some(from), Some(to)) = (cursor, subpath_start) {
                        self.strokes.push(Stroke { from, to, color });
                    }
                    cursor = subpath_start;
                }
            }
        }
    }

    fn draw_glyph(&mut self, glyph: &Glyph<'_>) {
        let half_width = glyph.label.width() as f32 * self.cell_width / 2.0;
        self.labels.push(Label {
            position: Point::new(glyph.position.x - half_width, glyph.position.y),
            text: glyph.label.to_string(),
            style: self.label_style(glyph.scale, glyph.color),
        });
    }
}

pub struct ScrollerWidget;

impl ScrollerWidget {
    fn block(app: &App) -> Block<'static> {
        let border_style = if app.scroller.is_animating() {
            Style::default().fg(app.theme.accent)
        } else {
            Style::default().fg(app.theme.grey0)
        };
        Block::default()
            .title(" Sections ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(app.theme.bg0))
    }

    /// Area inside the border where the scroller itself is laid out
    pub fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let block = Self::block(app);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(grid) = app.grid else {
            return;
        };

        let scroller_config = &app.config.scroller;
        let mut sink = CanvasSink::new(
            &app.theme,
            grid.cell_width,
            scroller_config.text_scale_min,
            scroller_config.text_scale_max,
        );
        app.scroller.render(&mut sink);

        let bounds = grid.bounds();
        let width = f64::from(bounds.width());
        let height = f64::from(bounds.height());
        // Canvas y grows upward, scroller y grows downward.
        let flip = |point: Point| (f64::from(point.x), height - f64::from(point.y));

        let CanvasSink { strokes, labels, .. } = sink;
        let canvas = Canvas::default()
            .background_color(app.theme.paper)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                for stroke in &strokes {
                    let (x1, y1) = flip(stroke.from);
                    let (x2, y2) = flip(stroke.to);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: stroke.color,
                    });
                }
                for label in &labels {
                    let (x, y) = flip(label.position);
                    ctx.print(x, y, Span::styled(label.text.clone(), label.style));
                }
            });
        frame.render_widget(canvas, inner);
    }
}
