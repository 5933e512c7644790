//! Time calculation utilities for the bumper animation
//!
//! Every function takes `now` explicitly so ticks are driven by the host's
//! frame clock rather than read from the wall clock here.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) from start time and duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f32, to: f32, t: f64) -> f32 {
    (from as f64 + (to as f64 - from as f64) * t) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(700.0, 600.0, 1.0) - 600.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_midway() {
        let start = Instant::now();
        let now = start + Duration::from_millis(75);
        assert!((progress(start, now, Duration::from_millis(150)) - 0.5).abs() < 1e-9);
        assert!(!is_complete(start, now, Duration::from_millis(150)));
        assert!(is_complete(start, now, Duration::from_millis(75)));
    }

    #[test]
    fn test_progress_before_start() {
        let now = Instant::now();
        let start = now + Duration::from_millis(10);
        assert_eq!(progress(start, now, Duration::from_millis(150)), 0.0);
    }
}
