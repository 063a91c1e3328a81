//! Polygon rings: validity, placement and buffering.
//!
//! This module provides:
//! - [`Polygon`]: a closed ring with area, containment and transforms
//! - Validation: closure, vertex count, area and self-intersection checks
//! - Buffering: growing or shrinking a ring by a signed distance
//!
//! # Example
//!
//! ```
//! use roadgeom::{Point2, Polygon, Pose};
//!
//! // A 4 x 2 footprint placed at (10, 5), facing +y
//! let footprint: Polygon<Point2<f64>> = Polygon::from_pose(
//!     &Pose::new(10.0, 5.0, std::f64::consts::FRAC_PI_2),
//!     vec![
//!         Point2::new(-1.0, -1.0),
//!         Point2::new(3.0, -1.0),
//!         Point2::new(3.0, 1.0),
//!         Point2::new(-1.0, 1.0),
//!         Point2::new(-1.0, -1.0),
//!     ],
//! );
//!
//! assert!(footprint.is_valid());
//! assert!(footprint.contains(Point2::new(10.0, 7.0)));
//! assert!(!footprint.contains(Point2::new(12.0, 5.0)));
//! ```

mod core;
mod offset;
mod validate;

pub use self::core::{polygon_signed_area, Extents, Polygon};
pub use offset::{buffer_polygon, buffer_polygon_with, BufferConfig, JoinStyle};
pub use validate::first_self_intersection;
