pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod section;
pub mod state;
pub mod style;

pub use config::{AppConfig, EasingType, ScrollerConfig};
pub use controller::BubbleScroller;
pub use error::{Error, Result};
pub use geometry::{Intersection, PathSegment, Point, Rect, TextPath};
pub use input::{PointerEvent, PointerKind, TrackingPhase};
pub use render::{Glyph, RenderSink};
pub use section::{Alphabet, LabeledSections, SectionModel};
pub use state::{BumperCircle, ScrollerState};
pub use style::{Rgb, TextStyle};
