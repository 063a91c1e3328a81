//! Distance and collision queries between points, lines and polygons.
//!
//! Every ordered pair of shape kinds implements [`Distance`] and, except
//! point against point, [`Collide`]. Both are symmetric: swapping the
//! arguments gives the same answer. Shapes collide exactly when their
//! distance is zero; contact within [`touch_epsilon`](crate::tolerance::touch_epsilon)
//! counts.
//!
//! | Pair | Distance | Collide |
//! |---|---|---|
//! | point, point | Euclidean | - |
//! | point, line | to the nearest segment | point on the line |
//! | point, polygon | zero inside, else to the boundary | point inside or on the boundary |
//! | line, line | closest segment pair | any segments touch |
//! | line, polygon | zero on contact, else closest segment and edge | line touches or enters the polygon |
//! | polygon, polygon | zero on contact, else closest edge pair | rings touch or one contains the other |
//!
//! # Example
//!
//! ```
//! use roadgeom::{collide, distance, Line, Point2, Polygon};
//!
//! let square: Polygon<Point2<f64>> = Polygon::from_points(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//!     Point2::new(0.0, 0.0),
//! ]);
//! assert_eq!(distance(&square, &Point2::new(5.0, 2.0)), 1.0);
//!
//! let lane: Line<Point2<f64>> = Line::from_points(vec![
//!     Point2::new(-1.0, 2.0),
//!     Point2::new(6.0, 2.0),
//! ]);
//! assert!(collide(&lane, &square));
//! assert!(collide(&square, &lane));
//! ```

mod pairs;

pub use pairs::{collide, distance, Collide, Distance};
