//! Arc-length parameterized polylines.
//!
//! This module provides:
//! - [`Line`]: a polyline with its cumulative arc-length table
//! - Smoothing: resampling along an interpolating cubic spline
//! - Joining: concatenation that never produces a self-intersecting result
//! - Differential estimates: discrete gradient and curvature
//!
//! # Example
//!
//! ```
//! use roadgeom::{Line, Point2};
//!
//! let mut line: Line<Point2<f64>> = Line::new();
//! line.add_point(Point2::new(0.0, 0.0));
//! line.add_point(Point2::new(10.0, 10.0));
//!
//! let normal = line.normal_at_s(line.length() / 2.0);
//! assert!((normal.x + 0.7071).abs() < 1e-3);
//! assert!((normal.y - 0.7071).abs() < 1e-3);
//! ```

mod concat;
mod core;
mod differential;
mod smooth;

pub use self::core::Line;
pub use concat::{append_lines_no_intersect, concatenate_linestring, polyline_is_simple};
pub use differential::{curvature, gradient};
pub use smooth::smooth_line;

pub(crate) use self::core::{bounding_box, write_points};
