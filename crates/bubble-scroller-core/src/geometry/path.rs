//! The vector contour of the scroll line, including the bulge arc.

use serde::Serialize;

use super::lens::sweep_angle;
use super::primitives::{Intersection, Point, Rect};

/// Most segments a text path ever holds: move, line, arc, move, line, close.
pub const MAX_SEGMENTS: usize = 6;

/// One drawing command. Angles are in degrees, measured clockwise from +x
/// (screen coordinates, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    ArcTo {
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
    },
    Close,
}

impl PathSegment {
    /// Point on an arc's oval at `angle` degrees.
    pub fn point_on_oval(oval: &Rect, angle: f32) -> Point {
        let radians = angle.to_radians();
        Point::new(
            oval.center_x() + oval.width() * 0.5 * radians.cos(),
            oval.center_y() + oval.height() * 0.5 * radians.sin(),
        )
    }

    /// Sample `steps + 1` evenly spaced points along an arc, start to end.
    /// Non-arc segments yield nothing.
    pub fn arc_points(&self, steps: usize) -> impl Iterator<Item = Point> + '_ {
        let (oval, start, sweep, count) = match *self {
            PathSegment::ArcTo {
                oval,
                start_angle,
                sweep_angle,
            } => (oval, start_angle, sweep_angle, steps.max(1) + 1),
            _ => (Rect::default(), 0.0, 0.0, 0),
        };
        (0..count).map(move |i| {
            let t = i as f32 / (count - 1) as f32;
            Self::point_on_oval(&oval, start + sweep * t)
        })
    }
}

/// Reusable path buffer. Rebuilt from scratch on every recompute; its
/// capacity is reserved up front so rebuilding never reallocates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPath {
    segments: Vec<PathSegment>,
}

impl Default for TextPath {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPath {
    pub fn new() -> Self {
        Self {
            segments: Vec::with_capacity(MAX_SEGMENTS),
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.segments.clear();
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_arc(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, PathSegment::ArcTo { .. }))
    }

    fn push(&mut self, segment: PathSegment) {
        debug_assert!(self.segments.len() < MAX_SEGMENTS);
        self.segments.push(segment);
    }

    pub fn move_to(&mut self, point: Point) {
        self.push(PathSegment::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.push(PathSegment::LineTo(point));
    }

    pub fn arc_to(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32) {
        self.push(PathSegment::ArcTo {
            oval,
            start_angle,
            sweep_angle,
        });
    }

    pub fn close(&mut self) {
        self.push(PathSegment::Close);
    }
}

/// Rebuild `path` as the scroll line from `text_start` to `text_end`, detouring
/// around the bumper circle (bounded by `circle_rect`) between the intersection
/// points when there is a bulge.
pub fn build_text_path(
    text_start: Point,
    text_end: Point,
    circle_rect: Rect,
    intersection: Intersection,
    path: &mut TextPath,
) {
    path.reset();
    path.move_to(Point::new(
        text_start.x,
        text_start.y.min(intersection.y_low),
    ));

    if intersection.has_bulge() {
        let radius = circle_rect.width() * 0.5;
        let center_x = circle_rect.center_x();
        let sweep = sweep_angle((center_x - text_start.x).abs(), radius);

        // Walk the side of the circle facing the baseline, from y_low down to y_high.
        let (start_angle, signed_sweep) = if center_x >= text_start.x {
            (180.0 + sweep / 2.0, -sweep)
        } else {
            (360.0 - sweep / 2.0, sweep)
        };

        path.line_to(Point::new(text_start.x, intersection.y_low));
        path.arc_to(circle_rect, start_angle, signed_sweep);
        path.move_to(Point::new(text_start.x, intersection.y_high));
    }

    path.line_to(text_end);
    path.close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::lens::compute_intersection;

    const RADIUS: f32 = 200.0;

    fn assert_near(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 0.05 && (a.y - b.y).abs() < 0.05,
            "{a:?} != {b:?}"
        );
    }

    fn build(center: Point) -> (TextPath, Intersection) {
        let start = Point::new(500.0, 40.0);
        let end = Point::new(500.0, 1040.0);
        let hit = compute_intersection(start.x, center, RADIUS).unwrap();
        let mut path = TextPath::new();
        build_text_path(start, end, Rect::around_circle(center, RADIUS), hit, &mut path);
        (path, hit)
    }

    #[test]
    fn test_straight_line_without_bulge() {
        let (path, _) = build(Point::new(700.0, 500.0));
        assert_eq!(
            path.segments(),
            &[
                PathSegment::MoveTo(Point::new(500.0, 40.0)),
                PathSegment::LineTo(Point::new(500.0, 1040.0)),
                PathSegment::Close,
            ]
        );
        assert!(!path.has_arc());
    }

    #[test]
    fn test_arc_spans_intersection() {
        let center = Point::new(600.0, 500.0);
        let (path, hit) = build(center);
        let segments = path.segments();
        assert_eq!(segments.len(), MAX_SEGMENTS);
        assert_eq!(segments[1], PathSegment::LineTo(Point::new(500.0, hit.y_low)));

        let PathSegment::ArcTo {
            oval,
            start_angle,
            sweep_angle,
        } = segments[2]
        else {
            panic!("expected an arc, got {:?}", segments[2]);
        };
        assert!((start_angle - 240.0).abs() < 1e-3);
        assert!((sweep_angle + 120.0).abs() < 1e-3);

        let first = PathSegment::point_on_oval(&oval, start_angle);
        let last = PathSegment::point_on_oval(&oval, start_angle + sweep_angle);
        assert_near(first, Point::new(500.0, hit.y_low));
        assert_near(last, Point::new(500.0, hit.y_high));

        // The arc's widest point is the circle's leftmost point.
        let middle = PathSegment::point_on_oval(&oval, start_angle + sweep_angle / 2.0);
        assert_near(middle, Point::new(400.0, 500.0));

        assert_eq!(segments[3], PathSegment::MoveTo(Point::new(500.0, hit.y_high)));
        assert_eq!(segments[5], PathSegment::Close);
    }

    #[test]
    fn test_arc_from_left_side_reaches_right() {
        let (path, hit) = build(Point::new(400.0, 500.0));
        let arc = path.segments()[2];
        let points: Vec<Point> = arc.arc_points(8).collect();
        assert_eq!(points.len(), 9);
        assert_near(points[0], Point::new(500.0, hit.y_low));
        assert_near(points[8], Point::new(500.0, hit.y_high));
        assert_near(points[4], Point::new(600.0, 500.0));
    }

    #[test]
    fn test_path_starts_above_text_when_bulge_is_higher() {
        let (path, hit) = build(Point::new(600.0, 0.0));
        assert!(hit.y_low < 40.0);
        assert_eq!(path.segments()[0], PathSegment::MoveTo(Point::new(500.0, hit.y_low)));
    }

    #[test]
    fn test_rebuild_keeps_capacity() {
        let mut path = TextPath::new();
        let capacity = path.segments.capacity();
        for cx in [600.0, 700.0, 650.0, 900.0] {
            let center = Point::new(cx, 300.0);
            let hit = compute_intersection(500.0, center, RADIUS).unwrap();
            build_text_path(
                Point::new(500.0, 0.0),
                Point::new(500.0, 1000.0),
                Rect::around_circle(center, RADIUS),
                hit,
                &mut path,
            );
        }
        assert_eq!(path.segments.capacity(), capacity);
    }

    #[test]
    fn test_arc_points_of_line_is_empty() {
        let segment = PathSegment::LineTo(Point::new(1.0, 2.0));
        assert_eq!(segment.arc_points(10).count(), 0);
    }
}
