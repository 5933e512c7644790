//! Circle/baseline intersection and the per-row offsets and scales derived from it.
//!
//! All functions are pure and write into caller-owned buffers so the
//! per-frame recompute never allocates.

use super::primitives::{approximately, Intersection, Point};
use crate::error::{Error, Result};

/// How close the circle edge must be to the baseline to count as a tangent.
pub const TANGENT_TOLERANCE: f32 = 0.1;

/// Find the two y coordinates where a circle crosses the vertical line `x = baseline_x`.
///
/// Misses, tangents and near-tangents (within [`TANGENT_TOLERANCE`]) all collapse
/// to `(center.y, center.y)`.
///
/// # Errors
/// `InvalidArgument` for a negative or non-finite radius, or non-finite inputs.
pub fn compute_intersection(baseline_x: f32, center: Point, radius: f32) -> Result<Intersection> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(Error::invalid(format!("radius must be finite and >= 0, got {radius}")));
    }
    if !baseline_x.is_finite() || !center.is_finite() {
        return Err(Error::invalid(format!(
            "non-finite intersection input: baseline {baseline_x}, center {center:?}"
        )));
    }

    let distance = (center.x - baseline_x).abs();
    if distance > radius || approximately(distance, radius, TANGENT_TOLERANCE) {
        return Ok(Intersection::none_at(center.y));
    }

    let half_chord = (radius * radius - distance * distance).max(0.0).sqrt();
    Ok(Intersection {
        y_low: center.y - half_chord,
        y_high: center.y + half_chord,
    })
}

/// Horizontal displacement of each evenly spaced row caused by the bulge.
///
/// Row `i` of `out.len()` sits at `area_height * i / out.len()`; `intersection`
/// must be expressed in the same (area-relative) coordinates. Rows on or outside
/// the intersection get 0. Inside, the offset is the circle's half-width at that
/// height minus `distance` (the signed distance of the circle center from the
/// baseline), truncated to whole units.
pub fn compute_horizontal_offsets(
    distance: f32,
    radius: f32,
    intersection: Intersection,
    area_height: f32,
    out: &mut [i32],
) {
    let count = out.len();
    for (i, slot) in out.iter_mut().enumerate() {
        let vertical = area_height * (i as f32 / count as f32);
        if vertical <= intersection.y_low || vertical >= intersection.y_high {
            *slot = 0;
            continue;
        }

        let arc_height = intersection.span() as i32;
        let inside = (vertical - intersection.y_low) as i32;
        let from_widest = (arc_height / 2 - inside).abs() as f32;

        let side_a = (radius * radius - from_widest * from_widest).max(0.0).sqrt() as i32;
        *slot = (side_a as f32 - distance) as i32;
    }
}

/// Map offsets onto text scale factors in `[scale_min, scale_max]`.
///
/// Rows with no offset get `scale_min`. Others scale by `offset / max|offset|`,
/// keeping the sign, so a negative offset lands below `scale_min`.
///
/// # Errors
/// `InvalidArgument` when `out` and `offsets` differ in length.
pub fn compute_scale_factors(
    offsets: &[i32],
    scale_min: f32,
    scale_max: f32,
    out: &mut [f32],
) -> Result<()> {
    if offsets.len() != out.len() {
        return Err(Error::invalid(format!(
            "scale buffer holds {} rows but there are {} offsets",
            out.len(),
            offsets.len()
        )));
    }

    let max = offsets
        .iter()
        .map(|offset| offset.unsigned_abs())
        .max()
        .unwrap_or(0) as f32;

    for (scale, &offset) in out.iter_mut().zip(offsets) {
        *scale = if offset == 0 {
            scale_min
        } else {
            scale_min + (scale_max - scale_min) * (offset as f32 / max)
        };
    }
    Ok(())
}

/// Angle in degrees subtended by the part of the circle that crosses the baseline.
pub fn sweep_angle(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    let ratio = (distance / radius).clamp(-1.0, 1.0);
    2.0 * ratio.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f32 = 200.0;
    const BASELINE: f32 = 500.0;

    #[test]
    fn test_tangent_collapses() {
        let hit = compute_intersection(BASELINE, Point::new(700.0, 300.0), RADIUS).unwrap();
        assert_eq!(hit, Intersection::none_at(300.0));
        assert!(!hit.has_bulge());
    }

    #[test]
    fn test_near_tangent_collapses() {
        let hit = compute_intersection(BASELINE, Point::new(699.95, 300.0), RADIUS).unwrap();
        assert_eq!(hit.y_low, 300.0);
        assert_eq!(hit.y_high, 300.0);
    }

    #[test]
    fn test_miss_collapses() {
        let hit = compute_intersection(BASELINE, Point::new(900.0, 42.0), RADIUS).unwrap();
        assert_eq!(hit, Intersection::none_at(42.0));
    }

    #[test]
    fn test_crossing() {
        let hit = compute_intersection(BASELINE, Point::new(600.0, 300.0), RADIUS).unwrap();
        assert!((hit.y_low - 126.795).abs() < 0.01, "y_low = {}", hit.y_low);
        assert!((hit.y_high - 473.205).abs() < 0.01, "y_high = {}", hit.y_high);
    }

    #[test]
    fn test_crossing_from_left_side() {
        let hit = compute_intersection(BASELINE, Point::new(400.0, 300.0), RADIUS).unwrap();
        assert!((hit.y_low - 126.795).abs() < 0.01);
        assert!((hit.y_high - 473.205).abs() < 0.01);
    }

    #[test]
    fn test_intersection_ordered_and_finite() {
        for cx in (0..=1000).step_by(7) {
            for radius in [0.0_f32, 0.05, 1.0, 50.0, 200.0, 1000.0] {
                let hit = compute_intersection(BASELINE, Point::new(cx as f32, 250.0), radius)
                    .unwrap();
                assert!(hit.y_low.is_finite() && hit.y_high.is_finite());
                assert!(hit.y_low <= hit.y_high, "cx {cx} radius {radius}");
            }
        }
    }

    #[test]
    fn test_zero_radius_on_baseline() {
        let hit = compute_intersection(BASELINE, Point::new(BASELINE, 10.0), 0.0).unwrap();
        assert_eq!(hit, Intersection::none_at(10.0));
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert!(compute_intersection(BASELINE, Point::new(0.0, 0.0), -1.0).is_err());
        assert!(compute_intersection(BASELINE, Point::new(0.0, 0.0), f32::NAN).is_err());
        assert!(compute_intersection(BASELINE, Point::new(f32::INFINITY, 0.0), 1.0).is_err());
    }

    #[test]
    fn test_offsets_zero_without_bulge() {
        let mut offsets = [7; 26];
        compute_horizontal_offsets(200.0, RADIUS, Intersection::none_at(500.0), 1000.0, &mut offsets);
        assert!(offsets.iter().all(|&o| o == 0));
    }

    #[test]
    fn test_offsets_zero_on_intersection_rows() {
        // 8 rows over 1000 units: rows at 0, 125, 250, ..., 875.
        let hit = Intersection {
            y_low: 250.0,
            y_high: 750.0,
        };
        let mut offsets = [0; 8];
        compute_horizontal_offsets(100.0, RADIUS, hit, 1000.0, &mut offsets);
        assert_eq!(offsets[2], 0);
        assert_eq!(offsets[6], 0);
        assert_eq!(&offsets[3..6], &[56, 100, 56]);
        assert_eq!(&offsets[..2], &[0, 0]);
        assert_eq!(offsets[7], 0);
    }

    #[test]
    fn test_offsets_peak_at_center() {
        let center = Point::new(600.0, 500.0);
        let hit = compute_intersection(BASELINE, center, RADIUS).unwrap();
        let mut offsets = [0; 26];
        compute_horizontal_offsets(center.x - BASELINE, RADIUS, hit, 1000.0, &mut offsets);

        // Row 13 sits exactly at y = 500.
        let peak = offsets
            .iter()
            .enumerate()
            .max_by_key(|(_, &o)| o)
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, 13);
        assert_eq!(offsets[13], 100);
    }

    #[test]
    fn test_offsets_empty_buffer() {
        let mut offsets: [i32; 0] = [];
        compute_horizontal_offsets(100.0, RADIUS, Intersection::none_at(0.0), 1000.0, &mut offsets);
    }

    #[test]
    fn test_scales_all_min_without_offsets() {
        let offsets = [0; 5];
        let mut scales = [0.0; 5];
        compute_scale_factors(&offsets, 0.7, 1.3, &mut scales).unwrap();
        assert!(scales.iter().all(|&s| s == 0.7));
    }

    #[test]
    fn test_scales_max_at_peak() {
        let offsets = [0, 20, 40, 20, 0];
        let mut scales = [0.0; 5];
        compute_scale_factors(&offsets, 0.7, 1.3, &mut scales).unwrap();
        assert!((scales[2] - 1.3).abs() < 1e-6);
        assert!((scales[1] - 1.0).abs() < 1e-6);
        assert_eq!(scales[0], 0.7);
    }

    #[test]
    fn test_negative_offset_scales_below_min() {
        let offsets = [0, 10, -5];
        let mut scales = [0.0; 3];
        compute_scale_factors(&offsets, 0.7, 1.3, &mut scales).unwrap();
        assert!((scales[1] - 1.3).abs() < 1e-6);
        assert!((scales[2] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_scales_length_mismatch() {
        let offsets = [0; 4];
        let mut scales = [0.0; 3];
        let err = compute_scale_factors(&offsets, 0.7, 1.3, &mut scales).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_sweep_angle() {
        assert!((sweep_angle(100.0, 200.0) - 120.0).abs() < 1e-3);
        assert!((sweep_angle(0.0, 200.0) - 180.0).abs() < 1e-3);
        assert_eq!(sweep_angle(200.0, 200.0), 0.0);
        assert_eq!(sweep_angle(10.0, 0.0), 0.0);
        assert!(sweep_angle(300.0, 200.0).is_finite());
    }
}
