//! Pointer interpretation: turns raw down/move/up/cancel events into
//! protrude, follow and retract gestures.

/// Kind of raw pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer event in scroller units. Only `y` drives the bumper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Down,
            x,
            y,
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            x,
            y,
        }
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Cancel,
            x,
            y,
        }
    }
}

/// Whether a pointer is currently held on the scroller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrackingPhase {
    #[default]
    Idle,
    Tracking,
}

/// What the scroller should do in response to a pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Move the bumper to `y` and animate it out to the protruding x
    Protrude { y: f32 },
    /// Move the bumper to `y` immediately, x unchanged
    Follow { y: f32 },
    /// Animate the bumper back to the resting x, y unchanged
    Retract,
    /// Not for us
    Ignored,
}

impl Gesture {
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, Gesture::Ignored)
    }
}

/// Two-state machine over pointer events
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    phase: TrackingPhase,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> TrackingPhase {
        self.phase
    }

    /// Advance the state machine and report the resulting gesture.
    ///
    /// A down while already tracking protrudes again from wherever the
    /// bumper is; moves and releases while idle are ignored.
    pub fn interpret(&mut self, event: PointerEvent) -> Gesture {
        match (self.phase, event.kind) {
            (_, PointerKind::Down) => {
                self.phase = TrackingPhase::Tracking;
                Gesture::Protrude { y: event.y }
            }
            (TrackingPhase::Tracking, PointerKind::Move) => Gesture::Follow { y: event.y },
            (TrackingPhase::Tracking, PointerKind::Up | PointerKind::Cancel) => {
                self.phase = TrackingPhase::Idle;
                Gesture::Retract
            }
            (TrackingPhase::Idle, _) => Gesture::Ignored,
        }
    }

    /// Forget any held pointer without producing a gesture.
    pub fn reset(&mut self) {
        self.phase = TrackingPhase::Idle;
    }
}
