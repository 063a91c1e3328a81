//! Polygon ring validation.
//!
//! A valid ring is closed, has at least three distinct corners, encloses a
//! non-zero area and never touches itself.
//!
//! # Example
//!
//! ```
//! use roadgeom::{InvalidReason, Point2, Polygon};
//!
//! // A bow tie crosses itself
//! let bow_tie: Polygon<Point2<f64>> = Polygon::from_points(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 2.0),
//!     Point2::new(0.0, 0.0),
//! ]);
//!
//! assert!(!bow_tie.is_valid());
//! assert!(matches!(bow_tie.validate(), Err(InvalidReason::SelfIntersection { .. })));
//! ```

use super::core::Polygon;
use crate::error::InvalidReason;
use crate::primitives::{Coord2, Point2, Segment2};
use crate::tolerance::{
    remove_duplicate_ring_vertices, segments_intersect, touch_epsilon, SegmentIntersection,
};
use num_traits::Float;
use tracing::debug;

impl<P: Coord2> Polygon<P> {
    /// Checks the ring and reports the first problem found.
    ///
    /// Checks run in order: distinct vertex count, closure, area, then
    /// self-intersection. Repeated consecutive points are tolerated.
    pub fn validate(&self) -> Result<(), InvalidReason> {
        let eps = touch_epsilon::<P::Scalar>();
        let corners: Vec<Point2<P::Scalar>> = remove_duplicate_ring_vertices(self.points(), eps)
            .iter()
            .map(Coord2::to_point2)
            .collect();

        if corners.len() < 3 {
            return Err(InvalidReason::TooFewVertices {
                count: corners.len(),
            });
        }
        if !self.is_closed() {
            return Err(InvalidReason::NotClosed);
        }
        if self.signed_area().abs() <= eps {
            return Err(InvalidReason::ZeroArea);
        }
        if let Some((edge_a, edge_b)) = first_self_intersection(&corners, eps) {
            return Err(InvalidReason::SelfIntersection { edge_a, edge_b });
        }
        Ok(())
    }

    /// Returns true if the ring is closed, simple and encloses area.
    ///
    /// The reason for a `false` answer is logged at debug level; use
    /// [`Polygon::validate`] to get it as a value.
    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(reason) => {
                debug!(%reason, points = self.len(), "polygon is not valid");
                false
            }
        }
    }
}

/// Finds the first pair of ring edges that touch where they should not.
///
/// `corners` is an open list of distinct vertices; edge `i` runs from
/// corner `i` to corner `i + 1`, wrapping around. Neighbouring edges may
/// only share their common corner; other pairs must not touch at all.
pub fn first_self_intersection<F: Float>(corners: &[Point2<F>], eps: F) -> Option<(usize, usize)> {
    let m = corners.len();
    if m < 3 {
        return None;
    }
    let edges: Vec<Segment2<F>> = (0..m)
        .map(|i| Segment2::new(corners[i], corners[(i + 1) % m]))
        .collect();

    for i in 0..m {
        for j in (i + 1)..m {
            let adjacent = j == i + 1 || (i == 0 && j == m - 1);
            let hit = segments_intersect(edges[i], edges[j], eps);
            let bad = if adjacent {
                matches!(hit, SegmentIntersection::Overlapping { .. })
            } else {
                hit.is_some()
            };
            if bad {
                return Some((i, j));
            }
        }
    }

    None
}
