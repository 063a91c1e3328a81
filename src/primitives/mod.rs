//! Floating-point geometric primitives: points, vectors, segments, poses.

mod affine2;
mod coord;
mod point2;
mod pose;
mod segment2;
mod vec2;

pub use affine2::Affine2;
pub use coord::Coord2;
pub use point2::Point2;
pub use pose::Pose;
pub use segment2::Segment2;
pub use vec2::Vec2;
