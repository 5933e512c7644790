//! The scroller as a host sees it: feed it layout, pointer events and frame
//! ticks, then ask it to render.

use std::time::Instant;

use tracing::debug;

use crate::animation::BumperAnimator;
use crate::config::{AppConfig, ScrollerConfig};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::input::{Gesture, InputTracker, PointerEvent, TrackingPhase};
use crate::render::{render_scroller, RenderSink};
use crate::section::SectionModel;
use crate::state::ScrollerState;
use crate::style::TextStyle;

/// Scroller state plus the input and animation plumbing that drives it.
///
/// All calls are expected on one thread; each returns only after the state
/// and its derived geometry are fully updated.
#[derive(Debug)]
pub struct BubbleScroller {
    state: ScrollerState,
    animator: BumperAnimator,
    input: InputTracker,
    style: TextStyle,
    debug_path: bool,
}

impl BubbleScroller {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_style(&config.scroller, config.style.resolve()?)
    }

    pub fn with_style(config: &ScrollerConfig, style: TextStyle) -> Result<Self> {
        Ok(Self {
            state: ScrollerState::new(config)?,
            animator: BumperAnimator::from_config(config),
            input: InputTracker::new(),
            style,
            debug_path: config.debug_path,
        })
    }

    /// Apply a new layout. Any running animation or held pointer is dropped
    /// and the bumper returns to rest.
    pub fn layout(&mut self, content: Rect) -> Result<()> {
        self.state.set_drawable_area(content)?;
        if self.animator.cancel() {
            debug!("layout cancelled bumper animation");
        }
        self.input.reset();
        Ok(())
    }

    /// Feed one pointer event. Returns whether the scroller consumed it.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> Result<bool> {
        if !event.y.is_finite() {
            return Err(Error::invalid(format!("pointer y must be finite, got {}", event.y)));
        }

        let center = self.state.bumper_center();
        let gesture = self.input.interpret(event);
        match gesture {
            Gesture::Protrude { y } => {
                self.state.set_bumper_center(center.x, y)?;
                self.animator
                    .animate(center.x, self.state.protruding_x(), now);
            }
            Gesture::Follow { y } => {
                self.state.set_bumper_center(center.x, y)?;
            }
            Gesture::Retract => {
                self.animator.animate(center.x, self.state.resting_x(), now);
            }
            Gesture::Ignored => {}
        }
        Ok(gesture.is_handled())
    }

    /// Advance the bumper animation to `now`. Returns whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        match self.animator.sample(now) {
            Some(x) => {
                let y = self.state.bumper_center().y;
                self.state.set_bumper_center(x, y)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn set_section_model(&mut self, sections: Box<dyn SectionModel>) {
        self.state.set_section_model(sections);
    }

    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        render_scroller(&self.state, &self.style, self.debug_path, sink);
    }

    #[inline]
    pub fn state(&self) -> &ScrollerState {
        &self.state
    }

    #[inline]
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    #[inline]
    pub fn phase(&self) -> TrackingPhase {
        self.input.phase()
    }

    #[inline]
    pub fn debug_path(&self) -> bool {
        self.debug_path
    }

    pub fn toggle_debug_path(&mut self) -> bool {
        self.debug_path = !self.debug_path;
        self.debug_path
    }

    pub fn focused_section(&self) -> Option<usize> {
        self.state.focused_section()
    }

    pub fn focused_label(&self) -> Option<&str> {
        self.focused_section()
            .map(|index| self.state.sections().section_label(index))
    }
}
