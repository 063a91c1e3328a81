//! 2D line segment type.

use super::{Point2, Vec2};
use crate::tolerance::segments_touch;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// `t = 0` returns `start`, `t = 1` returns `end`; both exactly.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// Returns a tuple of (closest_point, parameter_t) where t is in [0, 1].
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();

        // Degenerate segment (start == end)
        if len_sq <= F::epsilon() * F::epsilon() {
            return (self.start, F::zero());
        }

        // Project p onto the carrier line, clamping to the segment
        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.point_at(t_clamped), t_clamped)
    }

    /// Computes the squared distance from a point to this segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }

    /// Computes the minimum distance between two segments.
    ///
    /// Zero when the segments intersect or touch within `eps`; otherwise the
    /// minimum lies at one of the four endpoints.
    pub fn distance_to_segment(self, other: Self, eps: F) -> F {
        if segments_touch(self, other, eps) {
            return F::zero();
        }

        self.distance_squared_to_point(other.start)
            .min(self.distance_squared_to_point(other.end))
            .min(other.distance_squared_to_point(self.start))
            .min(other.distance_squared_to_point(self.end))
            .sqrt()
    }

    /// Returns `true` if the segment is degenerate (start equals end within epsilon).
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.length_squared() <= eps * eps
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.length_squared(), 25.0);
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_closest_point_on_segment() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);

        let (closest, t) = s.closest_point(Point2::new(5.0, 5.0));
        assert_relative_eq!(closest.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(closest.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);

        // Beyond either end clamps to the endpoint
        let (before, t0) = s.closest_point(Point2::new(-5.0, 0.0));
        assert_eq!(before, s.start);
        assert_eq!(t0, 0.0);
        let (after, t1) = s.closest_point(Point2::new(15.0, 1.0));
        assert_eq!(after, s.end);
        assert_eq!(t1, 1.0);
    }

    #[test]
    fn test_degenerate_closest_point() {
        let s: Segment2<f64> = Segment2::from_coords(5.0, 5.0, 5.0, 5.0);
        let (closest, t) = s.closest_point(Point2::new(0.0, 0.0));
        assert_eq!(closest, Point2::new(5.0, 5.0));
        assert_eq!(t, 0.0);
        assert!(s.is_degenerate(1e-12));
    }

    #[test]
    fn test_distance_to_point() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_relative_eq!(s.distance_to_point(Point2::new(5.0, 3.0)), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_to_segment_parallel() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let b = Segment2::from_coords(2.0, 2.0, 8.0, 2.0);
        assert_relative_eq!(a.distance_to_segment(b, 1e-9), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_to_segment_crossing_is_zero() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Segment2::from_coords(0.0, 10.0, 10.0, 0.0);
        assert_eq!(a.distance_to_segment(b, 1e-9), 0.0);
    }

    #[test]
    fn test_distance_to_segment_shallow_touch_is_zero() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let b = Segment2::from_coords(15.0, 1.0, 5.0, 0.9e-9);
        assert_eq!(a.distance_to_segment(b, 1e-9), 0.0);
        assert_eq!(b.distance_to_segment(a, 1e-9), 0.0);

        let lifted = Segment2::from_coords(15.0, 1.0, 5.0, 2e-9);
        assert_relative_eq!(a.distance_to_segment(lifted, 1e-9), 2e-9, epsilon = 1e-15);
    }

    #[test]
    fn test_distance_to_segment_endpoint_gap() {
        let a: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Segment2::from_coords(4.0, 4.0, 4.0, 10.0);
        assert_relative_eq!(a.distance_to_segment(b, 1e-9), 5.0, epsilon = 1e-12);
        assert_relative_eq!(b.distance_to_segment(a, 1e-9), 5.0, epsilon = 1e-12);
    }
}
