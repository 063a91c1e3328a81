//! Epsilon-aware geometric predicates.
//!
//! All functions in this module take explicit tolerance parameters; the
//! one shared default lives in [`touch_epsilon`].

mod predicates;
mod weld;

pub use predicates::{
    orient2d, point_on_segment, segments_intersect, segments_touch, Orientation,
    SegmentIntersection,
};
pub use weld::{
    coincident, remove_duplicate_ring_vertices, remove_duplicate_vertices, touch_epsilon,
};
