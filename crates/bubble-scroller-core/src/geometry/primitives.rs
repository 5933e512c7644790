//! Value types shared by the geometry engine and the scroller state.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A point in scroller units (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounding box. Valid rects satisfy `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounding box of a circle.
    #[inline]
    pub fn around_circle(center: Point, radius: f32) -> Self {
        Self {
            left: center.x - radius,
            top: center.y - radius,
            right: center.x + radius,
            bottom: center.y + radius,
        }
    }

    /// Reject rects that are inverted or carry non-finite edges.
    pub fn validate(&self) -> Result<()> {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite();
        if !finite {
            return Err(Error::invalid(format!("rect has non-finite edges: {:?}", self)));
        }
        if self.left > self.right || self.top > self.bottom {
            return Err(Error::invalid(format!("rect is inverted: {:?}", self)));
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }
}

/// The two y coordinates where the bumper circle crosses the baseline.
///
/// `y_low == y_high` means there is no bulge region (circle misses the
/// baseline, touches it, or is within tolerance of touching it).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub y_low: f32,
    pub y_high: f32,
}

impl Intersection {
    /// The collapsed "no bulge" intersection at height `y`.
    #[inline]
    pub const fn none_at(y: f32) -> Self {
        Self { y_low: y, y_high: y }
    }

    #[inline]
    pub fn has_bulge(&self) -> bool {
        self.y_low != self.y_high
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.y_high - self.y_low
    }

    /// Shift both ends by `dy`, e.g. into area-relative coordinates.
    #[inline]
    pub fn translated(&self, dy: f32) -> Self {
        Self {
            y_low: self.y_low + dy,
            y_high: self.y_high + dy,
        }
    }
}

/// Whether `a` and `b` are within `tolerance` of each other.
#[inline]
pub fn approximately(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(10.0, 20.0, 110.0, 220.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 200.0);
        assert_eq!(rect.center_x(), 60.0);
        assert_eq!(rect.center_y(), 120.0);
    }

    #[test]
    fn test_rect_validate() {
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).validate().is_ok());
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).validate().is_ok());
        assert!(Rect::new(10.0, 0.0, 0.0, 10.0).validate().is_err());
        assert!(Rect::new(0.0, 10.0, 10.0, 0.0).validate().is_err());
        assert!(Rect::new(0.0, 0.0, f32::NAN, 10.0).validate().is_err());
    }

    #[test]
    fn test_around_circle() {
        let rect = Rect::around_circle(Point::new(600.0, 300.0), 200.0);
        assert_eq!(rect, Rect::new(400.0, 100.0, 800.0, 500.0));
    }

    #[test]
    fn test_approximately() {
        assert!(approximately(199.95, 200.0, 0.1));
        assert!(!approximately(199.8, 200.0, 0.1));
    }
}
