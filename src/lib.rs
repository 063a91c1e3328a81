//! roadgeom - 2D geometry for driving simulation
//!
//! Vehicle outlines, lane boundaries and trajectories are polylines and
//! polygons. This library answers the queries built on top of them:
//! arc-length lookup, nearest points, distance and collision, polygon
//! buffering, smoothing and curvature.
//!
//! Line and polygon types are generic over [`Coord2`], so `Point2<f64>`,
//! `[f32; 2]` or `(f64, f64)` all work as vertices.
//!
//! # Example
//!
//! ```
//! use roadgeom::{collide, smooth_line, Line, Point2, Polygon, Pose};
//!
//! let lane: Line<Point2<f64>> = Line::from_points(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(20.0, 5.0),
//! ]);
//! let smooth = smooth_line(&lane, 1.0);
//! assert_eq!(smooth.points()[0], lane.points()[0]);
//!
//! let car: Polygon<Point2<f64>> = Polygon::from_pose(
//!     &Pose::new(5.0, 0.5, 0.0),
//!     vec![
//!         Point2::new(-1.0, -1.0),
//!         Point2::new(3.0, -1.0),
//!         Point2::new(3.0, 1.0),
//!         Point2::new(-1.0, 1.0),
//!         Point2::new(-1.0, -1.0),
//!     ],
//! );
//! assert!(collide(&car, &lane));
//! ```

pub mod angle;
pub mod collision;
pub mod error;
pub mod line;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use collision::{collide, distance, Collide, Distance};
pub use error::{BufferError, GeometryError, InvalidReason};
pub use line::{
    append_lines_no_intersect, concatenate_linestring, curvature, gradient, smooth_line, Line,
};
pub use polygon::{buffer_polygon, buffer_polygon_with, BufferConfig, JoinStyle, Polygon};
pub use primitives::{Affine2, Coord2, Point2, Pose, Segment2, Vec2};
pub use tolerance::{segments_intersect, touch_epsilon, SegmentIntersection};
