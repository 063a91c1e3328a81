//! Polyline with a cumulative arc-length table.

use crate::error::GeometryError;
use crate::primitives::{Affine2, Coord2, Point2, Pose, Segment2, Vec2};
use crate::tolerance::touch_epsilon;
use num_traits::{Float, One, ToPrimitive, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered polyline parameterized by arc length.
///
/// Alongside the points, the line keeps `s[i]`, the distance travelled from
/// the first point to point `i`. The table always has one entry per point,
/// starts at zero and never decreases. Only [`Line::add_point`] mutates a
/// line; every other operation builds a new one.
///
/// Queries "at s" clamp `s` into `[0, length]` instead of failing.
///
/// # Example
///
/// ```
/// use roadgeom::{Line, Point2};
///
/// let line: Line<Point2<f64>> = Line::from_points(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 10.0),
/// ]);
///
/// assert_eq!(line.length(), 10.0);
/// assert_eq!(line.point_at_s(5.0), Point2::new(0.0, 5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<P>",
        into = "Vec<P>",
        bound(serialize = "P: Serialize", deserialize = "P: Deserialize<'de>")
    )
)]
pub struct Line<P: Coord2> {
    points: Vec<P>,
    s: Vec<P::Scalar>,
}

impl<P: Coord2> Line<P> {
    /// Creates an empty line.
    #[inline]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            s: Vec::new(),
        }
    }

    /// Builds a line from points, computing the arc-length table.
    pub fn from_points(points: Vec<P>) -> Self {
        let mut line = Self {
            points: Vec::with_capacity(points.len()),
            s: Vec::with_capacity(points.len()),
        };
        for p in points {
            line.add_point(p);
        }
        line
    }

    /// Appends a point, extending the arc-length table by one entry.
    pub fn add_point(&mut self, p: P) {
        let s = match self.points.last() {
            Some(last) => {
                let tail = self.s[self.s.len() - 1];
                tail + last.to_point2().distance(p.to_point2())
            }
            None => P::Scalar::zero(),
        };
        self.points.push(p);
        self.s.push(s);
    }

    /// The points of the line, in order.
    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// The cumulative arc-length table, one entry per point.
    #[inline]
    pub fn s_values(&self) -> &[P::Scalar] {
        &self.s
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the line has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total arc length; zero for fewer than two points.
    #[inline]
    pub fn length(&self) -> P::Scalar {
        self.s.last().copied().unwrap_or_else(P::Scalar::zero)
    }

    /// Returns the vertex at index `idx` without interpolation.
    pub fn point_at_idx(&self, idx: usize) -> Result<P, GeometryError> {
        self.points
            .get(idx)
            .copied()
            .ok_or(GeometryError::IndexOutOfBounds {
                index: idx,
                len: self.points.len(),
            })
    }

    /// Iterates over the segments of the line.
    pub fn segments(&self) -> impl Iterator<Item = Segment2<P::Scalar>> + '_ {
        self.points
            .windows(2)
            .map(|w| Segment2::new(w[0].to_point2(), w[1].to_point2()))
    }

    /// Index of the end point of the segment containing arc length `s`.
    ///
    /// This is the first index whose table value exceeds `s`, so at a vertex
    /// the outgoing segment wins. The result is clamped to `[1, len - 1]`:
    /// `s <= 0` gives 1 and `s >= length` gives the last segment with
    /// positive length. Returns 0 for lines with fewer than two points.
    pub fn segment_end_idx(&self, s: P::Scalar) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }

        let mut idx = self.s.partition_point(|&v| v <= s).clamp(1, n - 1);

        // Past the end: skip trailing zero-length segments
        while idx > 1 && self.s[idx] <= self.s[idx - 1] {
            idx -= 1;
        }
        idx
    }

    /// Interpolated point at arc length `s`.
    ///
    /// Vertices are reproduced exactly at their table values. An empty line
    /// yields the origin and a single-point line yields that point.
    pub fn point_at_s(&self, s: P::Scalar) -> P {
        match self.points.len() {
            0 => return P::from_xy(P::Scalar::zero(), P::Scalar::zero()),
            1 => return self.points[0],
            _ => {}
        }

        let s = self.clamp_s(s);
        let idx = self.segment_end_idx(s);
        let (s0, s1) = (self.s[idx - 1], self.s[idx]);
        let seg_len = s1 - s0;
        if seg_len <= P::Scalar::zero() {
            return self.points[idx - 1];
        }

        let t = ((s - s0) / seg_len).max(P::Scalar::zero()).min(P::Scalar::one());
        if t == P::Scalar::zero() {
            return self.points[idx - 1];
        }
        if t == P::Scalar::one() {
            return self.points[idx];
        }
        let a = self.points[idx - 1].to_point2();
        let b = self.points[idx].to_point2();
        P::from_point2(a.lerp(b, t))
    }

    /// Heading of the segment containing arc length `s`, in `(-pi, pi]`.
    ///
    /// At a vertex the outgoing segment is used. Lines with fewer than two
    /// points have heading 0.
    pub fn tangent_angle_at_s(&self, s: P::Scalar) -> P::Scalar {
        if self.points.len() < 2 {
            return P::Scalar::zero();
        }
        let idx = self.segment_end_idx(self.clamp_s(s));
        self.segment_direction(idx).angle()
    }

    /// Heading at arc length `s`, bisecting the corner at interior vertices.
    ///
    /// When `s` hits an interior vertex, the result is the direction of the
    /// sum of the unit incoming and outgoing directions. Everywhere else it
    /// equals [`Line::tangent_angle_at_s`].
    pub fn bisector_tangent_angle_at_s(&self, s: P::Scalar) -> P::Scalar {
        let n = self.points.len();
        if n < 3 {
            return self.tangent_angle_at_s(s);
        }

        let s = self.clamp_s(s);
        let idx = self.segment_end_idx(s);
        let vertex = idx - 1;
        let tol = touch_epsilon::<P::Scalar>() * s.abs().max(P::Scalar::one());
        if vertex == 0 || (s - self.s[vertex]).abs() > tol {
            return self.segment_direction(idx).angle();
        }

        let outgoing = self.segment_direction(idx);
        let incoming = self.segment_direction(vertex).normalize();
        match (incoming, outgoing.normalize()) {
            (Some(inc), Some(out)) => (inc + out).normalize().unwrap_or(out).angle(),
            _ => outgoing.angle(),
        }
    }

    /// Unit left-hand normal at arc length `s`.
    ///
    /// The tangent rotated by +90 degrees: a line heading up the y axis has
    /// normal `(-1, 0)`.
    pub fn normal_at_s(&self, s: P::Scalar) -> Vec2<P::Scalar> {
        Vec2::from_angle(self.tangent_angle_at_s(s)).perpendicular()
    }

    /// Nearest point on the line, its arc length and the end index of the
    /// segment it lies on.
    ///
    /// Ties go to the first segment in traversal order. An empty line yields
    /// the origin at `s = 0`.
    pub fn nearest_point_and_s(&self, p: P) -> (P, P::Scalar, usize) {
        let zero = P::Scalar::zero();
        match self.points.len() {
            0 => return (P::from_xy(zero, zero), zero, 0),
            1 => return (self.points[0], zero, 0),
            _ => {}
        }

        let target = p.to_point2();
        let mut best_d2 = P::Scalar::infinity();
        let mut best = (self.points[0], zero, 1);

        for (i, seg) in self.segments().enumerate() {
            let end = i + 1;
            let (closest, t) = seg.closest_point(target);
            let d2 = closest.distance_squared(target);
            if d2 < best_d2 {
                best_d2 = d2;
                let s = self.s[i] + t * (self.s[end] - self.s[i]);
                let point = if t == zero {
                    self.points[i]
                } else if t == P::Scalar::one() {
                    self.points[end]
                } else {
                    P::from_point2(closest)
                };
                best = (point, s, end);
            }
        }

        best
    }

    /// Nearest point on the line to `p`.
    #[inline]
    pub fn nearest_point(&self, p: P) -> P {
        self.nearest_point_and_s(p).0
    }

    /// Arc length of the nearest point on the line to `p`.
    #[inline]
    pub fn nearest_s(&self, p: P) -> P::Scalar {
        self.nearest_point_and_s(p).1
    }

    /// Euclidean distance from `p` to the line; infinite for an empty line.
    pub fn distance_to_point(&self, p: P) -> P::Scalar {
        if self.points.is_empty() {
            return P::Scalar::infinity();
        }
        let (nearest, _, _) = self.nearest_point_and_s(p);
        nearest.to_point2().distance(p.to_point2())
    }

    /// Sub-line between arc lengths `s0` and `s1`.
    ///
    /// Both bounds are clamped to `[0, length]`. The result holds the point
    /// at `s0`, every vertex strictly between the bounds, then the point at
    /// `s1`.
    pub fn line_from_s_interval(
        &self,
        s0: P::Scalar,
        s1: P::Scalar,
    ) -> Result<Self, GeometryError> {
        let (s0, s1) = (self.clamp_s(s0), self.clamp_s(s1));
        if s0 > s1 {
            return Err(GeometryError::InvalidInterval {
                start: s0.to_f64().unwrap_or(f64::NAN),
                end: s1.to_f64().unwrap_or(f64::NAN),
            });
        }
        if self.points.len() < 2 {
            return Ok(self.clone());
        }

        let mut out = Self::new();
        out.add_point(self.point_at_s(s0));
        for (p, &s) in self.points.iter().zip(&self.s) {
            if s > s0 && s < s1 {
                out.add_point(*p);
            }
        }
        out.add_point(self.point_at_s(s1));
        Ok(out)
    }

    /// Applies an affine map to every point.
    pub fn apply_affine(&self, transform: &Affine2<P::Scalar>) -> Self {
        self.map_points(|p| transform.apply_point(p))
    }

    /// Rotates about the origin by `angle` radians.
    #[inline]
    pub fn rotate(&self, angle: P::Scalar) -> Self {
        self.apply_affine(&Affine2::rotation(angle))
    }

    /// Translates every point by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: P::Scalar, dy: P::Scalar) -> Self {
        self.apply_affine(&Affine2::translate(dx, dy))
    }

    /// Rotates by the pose heading, then translates to the pose position.
    #[inline]
    pub fn transform(&self, pose: &Pose<P::Scalar>) -> Self {
        self.apply_affine(&pose.to_affine())
    }

    /// The same points in reverse order.
    pub fn reversed(&self) -> Self {
        Self::from_points(self.points.iter().rev().copied().collect())
    }

    /// Axis-aligned bounding box as (min, max), `None` when empty.
    pub fn bounding_box(&self) -> Option<(Point2<P::Scalar>, Point2<P::Scalar>)> {
        bounding_box(&self.points)
    }

    /// Returns true if no two segments cross, touch or overlap, apart from
    /// neighbours meeting at their shared vertex.
    pub fn is_simple(&self) -> bool {
        let pts: Vec<Point2<P::Scalar>> = self.points.iter().map(Coord2::to_point2).collect();
        super::concat::polyline_is_simple(&pts, touch_epsilon())
    }

    /// Coordinates as `[x, y]` pairs.
    pub fn to_array(&self) -> Vec<[P::Scalar; 2]> {
        self.points.iter().map(|p| [p.x(), p.y()]).collect()
    }

    fn clamp_s(&self, s: P::Scalar) -> P::Scalar {
        s.max(P::Scalar::zero()).min(self.length())
    }

    // Direction of the segment ending at `idx`.
    fn segment_direction(&self, idx: usize) -> Vec2<P::Scalar> {
        self.points[idx].to_point2() - self.points[idx - 1].to_point2()
    }

    fn map_points(&self, f: impl Fn(Point2<P::Scalar>) -> Point2<P::Scalar>) -> Self {
        Self::from_points(
            self.points
                .iter()
                .map(|p| P::from_point2(f(p.to_point2())))
                .collect(),
        )
    }
}

impl<P: Coord2> Default for Line<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Coord2> From<Vec<P>> for Line<P> {
    fn from(points: Vec<P>) -> Self {
        Self::from_points(points)
    }
}

impl<P: Coord2> From<Line<P>> for Vec<P> {
    fn from(line: Line<P>) -> Self {
        line.points
    }
}

impl<P: Coord2> FromIterator<P> for Line<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut line = Self::new();
        for p in iter {
            line.add_point(p);
        }
        line
    }
}

impl<P: Coord2> Extend<P> for Line<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for p in iter {
            self.add_point(p);
        }
    }
}

impl<P: Coord2> fmt::Display for Line<P>
where
    P::Scalar: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_points(f, &self.points)
    }
}

pub(crate) fn write_points<P: Coord2>(f: &mut fmt::Formatter<'_>, points: &[P]) -> fmt::Result
where
    P::Scalar: fmt::Display,
{
    write!(f, "[")?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "({}, {})", p.x(), p.y())?;
    }
    write!(f, "]")
}

pub(crate) fn bounding_box<P: Coord2>(
    points: &[P],
) -> Option<(Point2<P::Scalar>, Point2<P::Scalar>)> {
    let first = points.first()?.to_point2();
    let mut min = first;
    let mut max = first;
    for p in &points[1..] {
        let p = p.to_point2();
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_4, FRAC_PI_8, PI, SQRT_2};

    fn line(coords: &[(f64, f64)]) -> Line<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn test_arc_length_table() {
        let l = line(&[(0.0, 0.0), (3.0, 4.0), (3.0, 4.0), (3.0, 10.0)]);
        assert_eq!(l.s_values(), &[0.0, 5.0, 5.0, 11.0]);
        assert_eq!(l.length(), 11.0);
        assert_eq!(l.len(), 4);
    }

    #[test]
    fn test_empty_and_single_point() {
        let empty: Line<Point2<f64>> = Line::new();
        assert_eq!(empty.length(), 0.0);
        assert_eq!(empty.point_at_s(3.0), Point2::origin());
        assert_eq!(empty.tangent_angle_at_s(1.0), 0.0);
        assert_eq!(empty.segment_end_idx(1.0), 0);
        assert!(empty.distance_to_point(Point2::origin()).is_infinite());

        let single = line(&[(2.0, 3.0)]);
        assert_eq!(single.length(), 0.0);
        assert_eq!(single.point_at_s(1.0), Point2::new(2.0, 3.0));
        assert_relative_eq!(single.distance_to_point(Point2::new(2.0, 4.0)), 1.0);
    }

    #[test]
    fn test_point_at_idx() {
        let l = line(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(l.point_at_idx(1), Ok(Point2::new(1.0, 0.0)));
        assert_eq!(
            l.point_at_idx(2),
            Err(GeometryError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_segment_end_idx() {
        let l = line(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, 0.0),
            (4.0, 0.0),
            (5.0, 0.0),
        ]);
        assert_eq!(l.segment_end_idx(0.0), 1);
        assert_eq!(l.segment_end_idx(0.5), 1);
        assert_eq!(l.segment_end_idx(3.0), 4);
        assert_eq!(l.segment_end_idx(5.0), 5);
        assert_eq!(l.segment_end_idx(6.0), 5);
        assert_eq!(l.segment_end_idx(-1.0), 1);
    }

    #[test]
    fn test_segment_end_idx_skips_zero_length() {
        let leading = line(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(leading.segment_end_idx(0.0), 2);

        let trailing = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0)]);
        assert_eq!(trailing.segment_end_idx(1.0), 1);
        assert_relative_eq!(trailing.tangent_angle_at_s(1.0), 0.0);
    }

    #[test]
    fn test_point_at_s_vertical() {
        let l = line(&[(0.0, 0.0), (0.0, 10.0)]);
        assert_eq!(l.point_at_s(5.0), Point2::new(0.0, 5.0));
        let n = l.normal_at_s(5.0);
        assert_relative_eq!(n.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(n.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_on_diagonal() {
        let l = line(&[(0.0, 0.0), (10.0, 10.0)]);
        let n = l.normal_at_s(l.length() / 2.0);
        assert_relative_eq!(n.x, -0.7, epsilon = 0.01);
        assert_relative_eq!(n.y, 0.7, epsilon = 0.01);
    }

    #[test]
    fn test_normal_on_closed_square() {
        let l = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        // last segment heads down the y axis
        let n = l.normal_at_s(4.0);
        assert_relative_eq!(n.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_point_at_s_reproduces_vertices() {
        let l = line(&[(0.0, 0.0), (0.3, 1.7), (2.9, -4.1), (8.0, 0.25)]);
        for (i, &s) in l.s_values().iter().enumerate() {
            assert_eq!(l.point_at_s(s), l.points()[i]);
        }
        assert_eq!(l.point_at_s(-5.0), l.points()[0]);
        assert_eq!(l.point_at_s(1e6), l.points()[3]);
    }

    #[test]
    fn test_tangent_angles() {
        let l = line(&[
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 0.0),
            (2.0, SQRT_2),
            (2.0 + SQRT_2, SQRT_2),
        ]);
        assert_relative_eq!(l.tangent_angle_at_s(0.0), FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(l.tangent_angle_at_s(0.5), FRAC_PI_4, epsilon = 1e-12);
        // outgoing segment at a vertex
        assert_relative_eq!(l.tangent_angle_at_s(SQRT_2), -FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(l.tangent_angle_at_s(2.0 * SQRT_2), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(l.tangent_angle_at_s(l.length()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bisector_tangent_angles() {
        let l = line(&[
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 0.0),
            (2.0, SQRT_2),
            (2.0 + SQRT_2, SQRT_2),
        ]);
        assert_relative_eq!(l.bisector_tangent_angle_at_s(0.0), FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(l.bisector_tangent_angle_at_s(SQRT_2), 0.0, epsilon = 1e-12);
        assert_relative_eq!(l.bisector_tangent_angle_at_s(2.0 * SQRT_2), FRAC_PI_8, epsilon = 1e-12);
        assert_relative_eq!(l.bisector_tangent_angle_at_s(0.5), FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_nearest_point() {
        let l = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let (p, s, idx) = l.nearest_point_and_s(Point2::new(4.0, -3.0));
        assert_eq!(p, Point2::new(4.0, 0.0));
        assert_relative_eq!(s, 4.0);
        assert_eq!(idx, 1);

        let (p, s, idx) = l.nearest_point_and_s(Point2::new(12.0, 5.0));
        assert_eq!(p, Point2::new(10.0, 5.0));
        assert_relative_eq!(s, 15.0);
        assert_eq!(idx, 2);

        // beyond the end clamps to the last vertex
        assert_eq!(l.nearest_point(Point2::new(10.0, 20.0)), Point2::new(10.0, 10.0));
        assert_relative_eq!(l.nearest_s(Point2::new(-3.0, 0.0)), 0.0);
        assert_relative_eq!(l.distance_to_point(Point2::new(12.0, 5.0)), 2.0);
    }

    #[test]
    fn test_nearest_point_tie_prefers_first_segment() {
        // (5, 5) is equidistant from both legs
        let l = line(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let (_, _, idx) = l.nearest_point_and_s(Point2::new(5.0, 5.0));
        assert_eq!(idx, 1);
    }

    #[test]
    fn test_line_from_s_interval() {
        let l = line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let sub = l.line_from_s_interval(0.5, 1.5).unwrap();
        assert_eq!(
            sub.points(),
            &[Point2::new(0.5, 0.0), Point2::new(1.0, 0.0), Point2::new(1.5, 0.0)]
        );
        assert_relative_eq!(sub.length(), 1.0);

        let full = l.line_from_s_interval(0.0, l.length()).unwrap();
        assert_eq!(full.points().first(), l.points().first());
        assert_eq!(full.points().last(), l.points().last());

        assert!(matches!(
            l.line_from_s_interval(1.5, 0.5),
            Err(GeometryError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_rotate_and_translate() {
        let l = line(&[(0.0, 0.0), (0.0, 10.0)]);
        let rotated = l.rotate(PI);
        let p = rotated.points()[1];
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, -10.0, epsilon = 1e-9);
        assert_relative_eq!(rotated.length(), l.length(), epsilon = 1e-2);

        let moved = rotated.translate(1.0, 2.0);
        let p = moved.points()[1];
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, -8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_transform_by_pose() {
        let l = line(&[(0.0, 0.0), (1.0, 0.0)]);
        let t = l.transform(&Pose::new(5.0, 5.0, PI / 2.0));
        let p = t.points()[1];
        assert_relative_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_generic_coordinates() {
        let l: Line<[f64; 2]> = Line::from_points(vec![[0.0, 0.0], [3.0, 4.0]]);
        assert_eq!(l.length(), 5.0);
        assert_eq!(l.point_at_s(0.0), [0.0, 0.0]);
        let mid = l.point_at_s(2.5);
        assert_relative_eq!(mid[0], 1.5, epsilon = 1e-12);
        assert_relative_eq!(mid[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reversed_bbox_and_simple() {
        let l = line(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
        assert_eq!(l.reversed().points()[0], Point2::new(4.0, 3.0));
        assert_eq!(
            l.bounding_box(),
            Some((Point2::new(0.0, 0.0), Point2::new(4.0, 3.0)))
        );
        assert!(l.is_simple());

        let crossing = line(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
        assert!(!crossing.is_simple());
    }

    #[test]
    fn test_display_and_array() {
        let l = line(&[(0.0, 1.0), (2.5, 3.0)]);
        assert_eq!(l.to_string(), "[(0, 1), (2.5, 3)]");
        assert_eq!(l.to_array(), vec![[0.0, 1.0], [2.5, 3.0]]);
    }
}
