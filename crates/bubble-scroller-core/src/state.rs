//! Scroller state: layout anchors, the bumper circle, and every buffer the
//! geometry engine derives from them.

use tracing::{debug, trace};

use crate::config::ScrollerConfig;
use crate::error::{Error, Result};
use crate::geometry::{
    build_text_path, compute_horizontal_offsets, compute_intersection, compute_scale_factors,
    Intersection, Point, Rect, TextPath,
};
use crate::section::{Alphabet, SectionModel};

/// The fixed-radius circle whose centre follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BumperCircle {
    pub center: Point,
    pub radius: f32,
}

impl BumperCircle {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.center, self.radius)
    }
}

/// Owns the scroller's inputs (layout, bumper circle, section model) and the
/// outputs derived from them (intersection, per-row offsets and scales, path).
///
/// Every mutation runs one full recompute before returning, so derived data
/// is never stale. After buffers are sized for a section model, recomputing
/// does not allocate.
#[derive(Debug)]
pub struct ScrollerState {
    scale_min: f32,
    scale_max: f32,
    vertical_padding: f32,

    drawable: Rect,
    baseline: f32,
    text_start: Point,
    text_end: Point,
    resting_x: f32,
    protruding_x: f32,
    circle: BumperCircle,
    sections: Box<dyn SectionModel>,

    intersection: Intersection,
    offsets: Vec<i32>,
    scales: Vec<f32>,
    path: TextPath,
}

impl ScrollerState {
    /// Create a state showing the alphabet.
    pub fn new(config: &ScrollerConfig) -> Result<Self> {
        Self::with_sections(config, Box::new(Alphabet))
    }

    pub fn with_sections(config: &ScrollerConfig, sections: Box<dyn SectionModel>) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::invalid(e.to_string()))?;

        let count = sections.section_count();
        let mut state = Self {
            scale_min: config.text_scale_min,
            scale_max: config.text_scale_max,
            vertical_padding: config.intrinsic_vertical_padding,
            drawable: Rect::default(),
            baseline: 0.0,
            text_start: Point::default(),
            text_end: Point::default(),
            resting_x: config.circle_radius,
            protruding_x: config.circle_radius / 2.0,
            circle: BumperCircle {
                center: Point::new(config.circle_radius, 0.0),
                radius: config.circle_radius,
            },
            sections,
            intersection: Intersection::default(),
            offsets: vec![0; count],
            scales: vec![config.text_scale_min; count],
            path: TextPath::new(),
        };
        state.recompute();
        Ok(state)
    }

    /// Lay the scroller out inside `content` (the host's bounds after padding).
    ///
    /// The first row sits `intrinsic_vertical_padding` below `content.top`. The
    /// baseline runs down the horizontal centre; the bumper rests one radius to
    /// its right and protrudes to half a radius. The bumper is re-centred
    /// vertically at its resting position.
    pub fn set_drawable_area(&mut self, content: Rect) -> Result<()> {
        content.validate()?;

        let top = (content.top + self.vertical_padding).min(content.bottom);
        self.drawable = Rect::new(content.left, top, content.right, content.bottom);

        let center_x = self.drawable.center_x();
        self.baseline = center_x;
        self.text_start = Point::new(center_x, self.drawable.top);
        self.text_end = Point::new(center_x, self.drawable.bottom);
        self.resting_x = center_x + self.circle.radius;
        self.protruding_x = center_x + self.circle.radius / 2.0;
        self.circle.center = Point::new(self.resting_x, self.drawable.center_y());

        debug!(
            left = self.drawable.left,
            top = self.drawable.top,
            right = self.drawable.right,
            bottom = self.drawable.bottom,
            baseline = self.baseline,
            "scroller laid out"
        );
        self.recompute();
        Ok(())
    }

    /// Move the bumper circle and recompute everything derived from it.
    pub fn set_bumper_center(&mut self, x: f32, y: f32) -> Result<()> {
        let center = Point::new(x, y);
        if !center.is_finite() {
            return Err(Error::invalid(format!("bumper centre must be finite, got {center:?}")));
        }
        self.circle.center = center;
        self.recompute();
        Ok(())
    }

    /// Swap the section model, resizing the per-row buffers to match.
    pub fn set_section_model(&mut self, sections: Box<dyn SectionModel>) {
        let count = sections.section_count();
        debug!(
            from = self.sections.section_count(),
            to = count,
            "section model replaced"
        );
        self.sections = sections;
        self.offsets.resize(count, 0);
        self.scales.resize(count, self.scale_min);
        self.recompute();
    }

    /// Intersection, offsets, scales and path, in that order, from current inputs.
    fn recompute(&mut self) {
        let center = self.circle.center;
        let radius = self.circle.radius;

        // Inputs are validated at every mutation, so this cannot fail.
        self.intersection = compute_intersection(self.baseline, center, radius)
            .unwrap_or(Intersection::none_at(center.y));

        compute_horizontal_offsets(
            center.x - self.baseline,
            radius,
            self.intersection.translated(-self.drawable.top),
            self.drawable.height(),
            &mut self.offsets,
        );

        if compute_scale_factors(&self.offsets, self.scale_min, self.scale_max, &mut self.scales)
            .is_err()
        {
            // Offsets and scales are resized together; keep neutral scales if not.
            self.scales.fill(self.scale_min);
        }

        build_text_path(
            self.text_start,
            self.text_end,
            self.circle.bounds(),
            self.intersection,
            &mut self.path,
        );

        trace!(
            x = center.x,
            y = center.y,
            y_low = self.intersection.y_low,
            y_high = self.intersection.y_high,
            "scroller recomputed"
        );
    }

    #[inline]
    pub fn drawable_area(&self) -> Rect {
        self.drawable
    }

    #[inline]
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    #[inline]
    pub fn bumper(&self) -> BumperCircle {
        self.circle
    }

    #[inline]
    pub fn bumper_center(&self) -> Point {
        self.circle.center
    }

    #[inline]
    pub fn resting_x(&self) -> f32 {
        self.resting_x
    }

    #[inline]
    pub fn protruding_x(&self) -> f32 {
        self.protruding_x
    }

    #[inline]
    pub fn text_start(&self) -> Point {
        self.text_start
    }

    #[inline]
    pub fn text_end(&self) -> Point {
        self.text_end
    }

    #[inline]
    pub fn intersection(&self) -> Intersection {
        self.intersection
    }

    #[inline]
    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    #[inline]
    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    #[inline]
    pub fn text_path(&self) -> &TextPath {
        &self.path
    }

    pub fn sections(&self) -> &dyn SectionModel {
        self.sections.as_ref()
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.offsets.len()
    }

    /// Where row `index` is drawn, after the bulge pushes it off the baseline.
    pub fn row_position(&self, index: usize) -> Point {
        let count = self.section_count() as f32;
        let y = self.drawable.height() * (index as f32 / count) + self.drawable.top;
        Point::new(self.baseline - self.offsets[index] as f32, y)
    }

    /// The row pushed furthest out by the bulge, if any row is.
    pub fn focused_section(&self) -> Option<usize> {
        self.offsets
            .iter()
            .enumerate()
            .filter(|(_, &offset)| offset > 0)
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
            .map(|(index, _)| index)
    }
}
