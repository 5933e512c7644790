//! Bumper animation driver
//!
//! ## Atoms
//! - `easing` - Pure easing curves
//! - `timing` - Progress and interpolation helpers
//!
//! ## Controller
//! - `animator` - Cancellable tween of the bumper x coordinate
//!
//! # Usage
//!
//! ```ignore
//! let mut animator = BumperAnimator::from_config(&config.scroller);
//! animator.animate(state.bumper_center().x, state.protruding_x(), Instant::now());
//!
//! // Once per frame:
//! if let Some(x) = animator.sample(Instant::now()) {
//!     state.set_bumper_center(x, state.bumper_center().y)?;
//! }
//! ```

pub mod animator;
pub mod easing;
pub mod timing;

pub use animator::BumperAnimator;
pub use easing::EasingType;
