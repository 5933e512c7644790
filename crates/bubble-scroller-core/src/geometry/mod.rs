//! Geometry engine for the bubble scroller
//!
//! Stateless math recomputed on every pointer move and animation tick:
//!
//! - `primitives` - points, rects and the circle/baseline intersection pair
//! - `lens` - intersection, per-row offsets and scale factors
//! - `path` - the scroll-line contour with its bulge arc
//!
//! Everything writes into caller-owned buffers; nothing here allocates
//! once those buffers are sized.

pub mod lens;
pub mod path;
pub mod primitives;

pub use lens::{
    compute_horizontal_offsets, compute_intersection, compute_scale_factors, sweep_angle,
    TANGENT_TOLERANCE,
};
pub use path::{build_text_path, PathSegment, TextPath};
pub use primitives::{approximately, Intersection, Point, Rect};
