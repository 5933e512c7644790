//! Bumper animation controller
//!
//! Combines easing and timing into a cancellable tween of the bumper
//! circle's x coordinate. The host calls `sample()` once per frame and
//! feeds the result into the scroller state.

use std::time::{Duration, Instant};

use tracing::debug;

use super::easing::EasingType;
use super::timing::{is_complete, lerp, progress};
use crate::config::ScrollerConfig;

/// Active tween state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Identifies this tween; bumped on every `animate()`
    generation: u64,
    start: Instant,
    from: f32,
    to: f32,
    duration: Duration,
    easing: EasingType,
}

/// Single-slot animator for the bumper x coordinate.
///
/// Starting a new tween replaces the running one immediately, so at most one
/// tween ever publishes values.
#[derive(Debug, Clone)]
pub struct BumperAnimator {
    animation: Option<ActiveAnimation>,
    duration: Duration,
    easing: EasingType,
    next_generation: u64,
}

impl Default for BumperAnimator {
    fn default() -> Self {
        Self::from_config(&ScrollerConfig::default())
    }
}

impl BumperAnimator {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            animation: None,
            duration,
            easing,
            next_generation: 0,
        }
    }

    pub fn from_config(config: &ScrollerConfig) -> Self {
        Self::new(config.animation_duration(), config.easing)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start a tween from `from` to `to`, discarding any running tween.
    ///
    /// Returns the new tween's generation.
    pub fn animate(&mut self, from: f32, to: f32, now: Instant) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;

        if let Some(previous) = self.animation.take() {
            debug!(
                replaced = previous.generation,
                generation, from, to, "bumper animation retargeted"
            );
        } else {
            debug!(generation, from, to, "bumper animation started");
        }

        self.animation = Some(ActiveAnimation {
            generation,
            start: now,
            from,
            to,
            duration: self.duration,
            easing: self.easing,
        });
        generation
    }

    /// Current x of the running tween, or `None` when idle.
    ///
    /// The final sample is exactly the target; the tween is retired after it.
    pub fn sample(&mut self, now: Instant) -> Option<f32> {
        let anim = self.animation.as_ref()?;
        if is_complete(anim.start, now, anim.duration) {
            let to = anim.to;
            self.animation = None;
            return Some(to);
        }

        let t = anim.easing.apply(progress(anim.start, now, anim.duration));
        Some(lerp(anim.from, anim.to, t))
    }

    /// Drop the running tween. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        self.animation.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(ms: u64) -> BumperAnimator {
        BumperAnimator::new(Duration::from_millis(ms), EasingType::Linear)
    }

    #[test]
    fn test_idle_sample_is_none() {
        let mut animator = BumperAnimator::default();
        assert!(!animator.is_animating());
        assert_eq!(animator.sample(Instant::now()), None);
    }

    #[test]
    fn test_interpolates_and_finishes() {
        let mut animator = linear(150);
        let start = Instant::now();
        animator.animate(700.0, 600.0, start);
        assert!(animator.is_animating());

        let mid = animator.sample(start + Duration::from_millis(75)).unwrap();
        assert!((mid - 650.0).abs() < 0.01);
        assert!(animator.is_animating());

        let last = animator.sample(start + Duration::from_millis(150)).unwrap();
        assert_eq!(last, 600.0);
        assert!(!animator.is_animating());
        assert_eq!(animator.sample(start + Duration::from_millis(160)), None);
    }

    #[test]
    fn test_samples_are_monotonic() {
        let mut animator = BumperAnimator::new(Duration::from_millis(150), EasingType::default());
        let start = Instant::now();
        animator.animate(700.0, 600.0, start);

        let mut prev = 700.0;
        for ms in (0..=150).step_by(16) {
            let x = animator.sample(start + Duration::from_millis(ms)).unwrap();
            assert!(x <= prev, "x went back up at {ms}ms: {x} > {prev}");
            prev = x;
        }
    }

    #[test]
    fn test_retarget_replaces_running_tween() {
        let mut animator = linear(100);
        let start = Instant::now();
        let first = animator.animate(0.0, 100.0, start);
        let second = animator.animate(40.0, 0.0, start + Duration::from_millis(40));
        assert!(second > first);

        let x = animator.sample(start + Duration::from_millis(90)).unwrap();
        assert!((x - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut animator = linear(0);
        let now = Instant::now();
        animator.animate(10.0, 20.0, now);
        assert_eq!(animator.sample(now), Some(20.0));
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_cancel() {
        let mut animator = linear(100);
        animator.animate(0.0, 1.0, Instant::now());
        assert!(animator.cancel());
        assert!(!animator.cancel());
        assert_eq!(animator.sample(Instant::now()), None);
    }
}
