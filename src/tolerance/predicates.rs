//! Geometric predicates with explicit tolerance.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// The test is based on twice the signed area of triangle `a`, `b`, `c`;
/// magnitudes at or below `eps` count as collinear.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks if a point lies on a line segment within tolerance.
///
/// Returns `true` if the point `p` is within distance `eps` of the segment,
/// endpoints included.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// Result of a segment intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<F> {
    /// Segments do not intersect.
    None,
    /// Segments intersect at a single point.
    Point {
        /// The intersection point.
        point: Point2<F>,
        /// Parameter along first segment (0 = start, 1 = end).
        t1: F,
        /// Parameter along second segment (0 = start, 1 = end).
        t2: F,
    },
    /// Segments are collinear and share a stretch of positive length.
    Overlapping {
        /// Start of the overlapping region.
        start: Point2<F>,
        /// End of the overlapping region.
        end: Point2<F>,
    },
}

impl<F> SegmentIntersection<F> {
    /// Returns true for any contact, crossing or touching.
    #[inline]
    pub fn is_some(&self) -> bool {
        !matches!(self, SegmentIntersection::None)
    }
}

/// Tests if two line segments intersect, with tolerance.
///
/// Touching counts: a shared endpoint or an endpoint lying on the other
/// segment within `eps` yields [`SegmentIntersection::Point`]. Degenerate
/// (zero-length) segments behave like points. Segments count as collinear
/// only when every endpoint lies within `eps` of the other carrier line.
pub fn segments_intersect<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> SegmentIntersection<F> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let len1 = d1.magnitude();
    let len2 = d2.magnitude();

    if len1 <= eps {
        return point_contact(s1.start, s2, eps, false);
    }
    if len2 <= eps {
        return point_contact(s2.start, s1, eps, true);
    }

    let cross = d1.cross(d2);
    // Vector from s1.start to s2.start
    let d = s2.start - s1.start;

    // sin of the angle between the segments at or below eps: treat as parallel
    if cross.abs() <= eps * len1 * len2 {
        let off_s1 = |p: Point2<F>| d1.cross(p - s1.start).abs() / len1 > eps;
        let off_s2 = |p: Point2<F>| d2.cross(p - s2.start).abs() / len2 > eps;
        if off_s1(s2.start) || off_s1(s2.end) || off_s2(s1.start) || off_s2(s1.end) {
            return endpoint_contact(s1, s2, eps);
        }

        // Collinear - project s2 endpoints onto s1's parameter range
        let len_sq = len1 * len1;
        let t2_start = d.dot(d1) / len_sq;
        let t2_end = (s2.end - s1.start).dot(d1) / len_sq;
        let (t2_min, t2_max) = if t2_start <= t2_end {
            (t2_start, t2_end)
        } else {
            (t2_end, t2_start)
        };

        let t_eps = eps / len1;
        let overlap_start = t2_min.max(F::zero());
        let overlap_end = t2_max.min(F::one());

        if overlap_start > overlap_end + t_eps {
            return endpoint_contact(s1, s2, eps);
        }

        if overlap_end - overlap_start <= t_eps {
            // Collinear segments touching end to end
            let t1 = overlap_start.min(F::one());
            let point = s1.point_at(t1);
            let (_, t2) = s2.closest_point(point);
            return SegmentIntersection::Point { point, t1, t2 };
        }

        return SegmentIntersection::Overlapping {
            start: s1.point_at(overlap_start),
            end: s1.point_at(overlap_end),
        };
    }

    // Solve s1.start + t1 * d1 = s2.start + t2 * d2 with Cramer's rule
    let t1 = d.cross(d2) / cross;
    let t2 = d.cross(d1) / cross;

    let t1_eps = eps / len1;
    let t2_eps = eps / len2;
    let inside = |t: F, e: F| t >= -e && t <= F::one() + e;

    if inside(t1, t1_eps) && inside(t2, t2_eps) {
        let t1_clamped = t1.max(F::zero()).min(F::one());
        SegmentIntersection::Point {
            point: s1.point_at(t1_clamped),
            t1: t1_clamped,
            t2: t2.max(F::zero()).min(F::one()),
        }
    } else {
        endpoint_contact(s1, s2, eps)
    }
}

/// Returns true if the segments cross, or come within `eps` of each other.
///
/// The answer does not depend on argument order, and it is true exactly
/// when the closest endpoint-to-segment distance is at most `eps` or the
/// segments properly cross.
pub fn segments_touch<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> bool {
    let (d1, d2) = (s1.direction(), s2.direction());
    let crossing = opposite_signs(d1.cross(s2.start - s1.start), d1.cross(s2.end - s1.start))
        && opposite_signs(d2.cross(s1.start - s2.start), d2.cross(s1.end - s2.start));

    crossing
        || point_on_segment(s2.start, s1, eps)
        || point_on_segment(s2.end, s1, eps)
        || point_on_segment(s1.start, s2, eps)
        || point_on_segment(s1.end, s2, eps)
}

#[inline]
fn opposite_signs<F: Float>(u: F, v: F) -> bool {
    (u > F::zero() && v < F::zero()) || (u < F::zero() && v > F::zero())
}

// Touch at an endpoint lying within `eps` of the other segment.
fn endpoint_contact<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> SegmentIntersection<F> {
    let near = |p: Point2<F>, seg: Segment2<F>| {
        let (closest, t) = seg.closest_point(p);
        (closest.distance_squared(p) <= eps * eps).then_some(t)
    };

    let candidates = [
        (s2.start, near(s2.start, s1).map(|t| (t, F::zero()))),
        (s2.end, near(s2.end, s1).map(|t| (t, F::one()))),
        (s1.start, near(s1.start, s2).map(|t| (F::zero(), t))),
        (s1.end, near(s1.end, s2).map(|t| (F::one(), t))),
    ];
    candidates
        .into_iter()
        .find_map(|(point, ts)| ts.map(|(t1, t2)| SegmentIntersection::Point { point, t1, t2 }))
        .unwrap_or(SegmentIntersection::None)
}

// A degenerate segment collapsed to `p` against a proper segment.
fn point_contact<F: Float>(
    p: Point2<F>,
    seg: Segment2<F>,
    eps: F,
    swapped: bool,
) -> SegmentIntersection<F> {
    let (closest, t) = seg.closest_point(p);
    if closest.distance_squared(p) > eps * eps {
        return SegmentIntersection::None;
    }
    let (t1, t2) = if swapped {
        (t, F::zero())
    } else {
        (F::zero(), t)
    };
    SegmentIntersection::Point { point: p, t1, t2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_orient2d() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert_eq!(orient2d(a, b, Point2::new(0.5, 1.0), EPS), Orientation::CounterClockwise);
        assert_eq!(orient2d(a, b, Point2::new(0.5, -1.0), EPS), Orientation::Clockwise);
        assert_eq!(orient2d(a, b, Point2::new(2.0, 1e-12), EPS), Orientation::Collinear);
    }

    #[test]
    fn test_point_on_segment() {
        let seg: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(point_on_segment(Point2::new(0.0, 0.0), seg, EPS));
        assert!(point_on_segment(Point2::new(10.0, 0.0), seg, EPS));
        assert!(point_on_segment(Point2::new(5.0, 0.0), seg, EPS));
        assert!(!point_on_segment(Point2::new(15.0, 0.0), seg, EPS));
        assert!(point_on_segment(Point2::new(5.0, 0.5), seg, 1.0));
    }

    #[test]
    fn test_segments_crossing() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 10.0);
        let s2 = Segment2::from_coords(0.0, 10.0, 10.0, 0.0);

        match segments_intersect(s1, s2, EPS) {
            SegmentIntersection::Point { point, t1, t2 } => {
                assert_relative_eq!(point.x, 5.0, epsilon = 1e-12);
                assert_relative_eq!(point.y, 5.0, epsilon = 1e-12);
                assert_relative_eq!(t1, 0.5, epsilon = 1e-12);
                assert_relative_eq!(t2, 0.5, epsilon = 1e-12);
            }
            other => panic!("expected point intersection, got {other:?}"),
        }
    }

    #[test]
    fn test_segments_shared_endpoint() {
        let s1: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 2.0, 2.0);
        let s2 = Segment2::from_coords(2.0, 2.0, 4.0, 4.0);
        match segments_intersect(s1, s2, EPS) {
            SegmentIntersection::Point { point, .. } => {
                assert_relative_eq!(point.x, 2.0, epsilon = 1e-12);
                assert_relative_eq!(point.y, 2.0, epsilon = 1e-12);
            }
            other => panic!("expected touching point, got {other:?}"),
        }
    }

    #[test]
    fn test_segments_t_junction() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let s2 = Segment2::from_coords(5.0, 0.0, 5.0, 5.0);
        assert!(segments_touch(s1, s2, EPS));
        assert!(segments_touch(s2, s1, EPS));
    }

    #[test]
    fn test_segments_disjoint() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 0.0);
        let parallel = Segment2::from_coords(0.0, 1.0, 1.0, 1.0);
        let collinear_gap = Segment2::from_coords(2.0, 0.0, 3.0, 0.0);
        let almost = Segment2::from_coords(1.5, 1.0, 1.5, -1.0);
        assert_eq!(segments_intersect(s1, parallel, EPS), SegmentIntersection::None);
        assert_eq!(segments_intersect(s1, collinear_gap, EPS), SegmentIntersection::None);
        assert_eq!(segments_intersect(s1, almost, EPS), SegmentIntersection::None);
    }

    #[test]
    fn test_segments_collinear_overlap_from_outside() {
        // s2 starts before s1; the overlap must still be reported
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let s2 = Segment2::from_coords(-5.0, 0.0, 5.0, 0.0);
        match segments_intersect(s1, s2, EPS) {
            SegmentIntersection::Overlapping { start, end } => {
                assert_relative_eq!(start.x, 0.0, epsilon = 1e-12);
                assert_relative_eq!(end.x, 5.0, epsilon = 1e-12);
            }
            other => panic!("expected overlap, got {other:?}"),
        }
    }

    #[test]
    fn test_segments_collinear_touching() {
        let s1: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 5.0, 0.0);
        let s2 = Segment2::from_coords(5.0, 0.0, 10.0, 0.0);
        match segments_intersect(s1, s2, EPS) {
            SegmentIntersection::Point { point, t1, .. } => {
                assert_relative_eq!(point.x, 5.0, epsilon = 1e-12);
                assert_relative_eq!(t1, 1.0, epsilon = 1e-12);
            }
            other => panic!("expected touching point, got {other:?}"),
        }
    }

    #[test]
    fn test_long_near_parallel_segments_are_symmetric() {
        // b starts on the carrier line of a but ends just above it
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1000.0, 0.0);
        let b = Segment2::from_coords(2000.0, 0.0, 500.0, 1.35e-6);
        assert_eq!(segments_intersect(a, b, EPS), SegmentIntersection::None);
        assert_eq!(segments_intersect(b, a, EPS), SegmentIntersection::None);
        assert!(!segments_touch(a, b, EPS));
        assert!(!segments_touch(b, a, EPS));
    }

    #[test]
    fn test_shallow_endpoint_touch() {
        // b ends within eps of a, far from where the carrier lines cross
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let b = Segment2::from_coords(15.0, 1.0, 5.0, 0.9e-9);
        assert!(segments_touch(a, b, EPS));
        assert!(segments_touch(b, a, EPS));
        match segments_intersect(a, b, EPS) {
            SegmentIntersection::Point { point, t1, t2 } => {
                assert_relative_eq!(point.x, 5.0, epsilon = 1e-12);
                assert_relative_eq!(t1, 0.5, epsilon = 1e-12);
                assert_eq!(t2, 1.0);
            }
            other => panic!("expected touching point, got {other:?}"),
        }
        assert!(segments_intersect(b, a, EPS).is_some());
    }

    #[test]
    fn test_degenerate_segment_inside_other() {
        let dot: Segment2<f64> = Segment2::from_coords(3.0, 0.0, 3.0, 0.0);
        let s = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(segments_touch(dot, s, EPS));
        assert!(segments_touch(s, dot, EPS));
        let off = Segment2::from_coords(3.0, 1.0, 3.0, 1.0);
        assert!(!segments_touch(off, s, EPS));
    }
}
