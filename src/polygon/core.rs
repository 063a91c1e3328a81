//! Core polygon type and basic operations.

use crate::line::{bounding_box, write_points};
use crate::primitives::{Affine2, Coord2, Point2, Pose, Segment2};
use crate::tolerance::{coincident, remove_duplicate_ring_vertices, touch_epsilon};
use num_traits::{Float, NumCast, One, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon stored as a ring of points.
///
/// A well-formed ring repeats its first point at the end; like the other
/// points, the closing duplicate is added by the caller. Nothing is checked
/// at construction: use [`Polygon::is_valid`] before trusting geometric
/// results. Either winding is accepted.
///
/// # Example
///
/// ```
/// use roadgeom::{Point2, Polygon};
///
/// let square: Polygon<Point2<f64>> = Polygon::from_points(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
///     Point2::new(0.0, 0.0),
/// ]);
///
/// assert!(square.is_valid());
/// assert_eq!(square.area(), 16.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon<P> {
    points: Vec<P>,
}

/// Reach of a polygon from its local origin along each body axis.
///
/// Measured in the polygon's own frame with x pointing forward and y to the
/// left. Distances are positive when the polygon extends past the origin in
/// that direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents<F> {
    pub front: F,
    pub rear: F,
    pub left: F,
    pub right: F,
}

impl<P: Coord2> Polygon<P> {
    /// Creates an empty polygon.
    #[inline]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a polygon from ring points.
    #[inline]
    pub fn from_points(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Creates a polygon from points in a local frame placed at `pose`.
    ///
    /// The points are rotated by the pose heading and translated to the pose
    /// position once, here; the polygon keeps no pose.
    pub fn from_pose(pose: &Pose<P::Scalar>, points: Vec<P>) -> Self {
        Self::from_points(points).transform(pose)
    }

    /// Appends a point to the ring.
    #[inline]
    pub fn add_point(&mut self, p: P) {
        self.points.push(p);
    }

    /// The ring points, including the closing duplicate if present.
    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the last point repeats the first exactly.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                first.to_point2() == last.to_point2()
            }
            _ => false,
        }
    }

    /// Appends the first point if the ring is not closed yet.
    pub fn close(&mut self) {
        if !self.is_closed() {
            if let Some(&first) = self.points.first() {
                self.points.push(first);
            }
        }
    }

    /// Iterates over the ring's edges, including the closing edge.
    ///
    /// An explicitly closed ring yields no extra zero-length edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<P::Scalar>> + '_ {
        let n = self.points.len();
        let closing = if n > 2 && !self.is_closed() {
            Some(Segment2::new(
                self.points[n - 1].to_point2(),
                self.points[0].to_point2(),
            ))
        } else {
            None
        };
        self.points
            .windows(2)
            .map(|w| Segment2::new(w[0].to_point2(), w[1].to_point2()))
            .chain(closing)
    }

    /// Signed area by the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise. Zero
    /// for fewer than three points.
    pub fn signed_area(&self) -> P::Scalar {
        polygon_signed_area(&self.points)
    }

    /// Absolute area.
    #[inline]
    pub fn area(&self) -> P::Scalar {
        self.signed_area().abs()
    }

    /// Area centroid, `None` for a ring without area.
    pub fn centroid(&self) -> Option<Point2<P::Scalar>> {
        let area = self.signed_area();
        if area.abs() <= P::Scalar::epsilon() {
            return None;
        }

        let mut cx = P::Scalar::zero();
        let mut cy = P::Scalar::zero();
        for e in self.edges() {
            let (a, b) = (e.start, e.end);
            let cross = a.x * b.y - b.x * a.y;
            cx = cx + (a.x + b.x) * cross;
            cy = cy + (a.y + b.y) * cross;
        }

        let six = <P::Scalar as NumCast>::from(6.0).unwrap();
        Some(Point2::new(cx / (six * area), cy / (six * area)))
    }

    /// Axis-aligned bounding box as (min, max).
    pub fn bounding_box(&self) -> Option<(Point2<P::Scalar>, Point2<P::Scalar>)> {
        bounding_box(&self.points)
    }

    /// Distance from `p` to the nearest edge; infinite for an empty polygon.
    pub fn boundary_distance(&self, p: Point2<P::Scalar>) -> P::Scalar {
        match self.points.len() {
            0 => P::Scalar::infinity(),
            1 => self.points[0].to_point2().distance(p),
            _ => self
                .edges()
                .map(|e| e.distance_squared_to_point(p))
                .fold(P::Scalar::infinity(), P::Scalar::min)
                .sqrt(),
        }
    }

    /// Tests if a point is inside the polygon or on its boundary.
    ///
    /// Points within [`touch_epsilon`] of an edge count as inside.
    pub fn contains(&self, p: Point2<P::Scalar>) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        if self.boundary_distance(p) <= touch_epsilon() {
            return true;
        }

        // Ray casting; zero-length closing edges never toggle
        let mut inside = false;
        for e in self.edges() {
            let (vi, vj) = (e.start, e.end);
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
        }
        inside
    }

    /// Applies an affine map to every point.
    pub fn apply_affine(&self, transform: &Affine2<P::Scalar>) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| P::from_point2(transform.apply_point(p.to_point2())))
                .collect(),
        }
    }

    /// Rotates by the pose heading about the origin, then translates to the
    /// pose position.
    #[inline]
    pub fn transform(&self, pose: &Pose<P::Scalar>) -> Self {
        self.apply_affine(&pose.to_affine())
    }

    /// Rotates about the origin by `angle` radians, counter-clockwise.
    #[inline]
    pub fn rotate(&self, angle: P::Scalar) -> Self {
        self.apply_affine(&Affine2::rotation(angle))
    }

    /// Translates every point by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: P::Scalar, dy: P::Scalar) -> Self {
        self.apply_affine(&Affine2::translate(dx, dy))
    }

    /// Scales along the local axes: x by `longitudinal`, y by `lateral`.
    ///
    /// A factor of exactly zero is treated as one, leaving that axis alone.
    pub fn scale(&self, longitudinal: P::Scalar, lateral: P::Scalar) -> Self {
        let zero = P::Scalar::zero();
        let sx = if longitudinal == zero { P::Scalar::one() } else { longitudinal };
        let sy = if lateral == zero { P::Scalar::one() } else { lateral };
        self.apply_affine(&Affine2::scale_xy(sx, sy))
    }

    /// Uniformly scales about the origin, then places the result at `pose`.
    pub fn scaling_transform(&self, factor: P::Scalar, pose: &Pose<P::Scalar>) -> Self {
        self.apply_affine(&Affine2::scale(factor).then(pose.to_affine()))
    }

    /// Pushes every point away from the local axes.
    ///
    /// Each point moves by `dx` along x and `dy` along y, in the direction of
    /// the quadrant it lies in. Points on an axis count as positive. For a
    /// box around the origin this grows each side by the given amounts.
    pub fn inflate(&self, dx: P::Scalar, dy: P::Scalar) -> Self {
        let zero = P::Scalar::zero();
        Self {
            points: self
                .points
                .iter()
                .map(|p| {
                    let x = if p.x() >= zero { p.x() + dx } else { p.x() - dx };
                    let y = if p.y() >= zero { p.y() + dy } else { p.y() - dy };
                    P::from_xy(x, y)
                })
                .collect(),
        }
    }

    /// Reach of the polygon from the local origin, `None` when empty.
    pub fn extents(&self) -> Option<Extents<P::Scalar>> {
        let (min, max) = self.bounding_box()?;
        Some(Extents {
            front: max.x,
            rear: -min.x,
            left: max.y,
            right: -min.y,
        })
    }

    /// Compares two rings vertex by vertex within `tolerance`.
    ///
    /// The rings match if they visit the same corners in the same cyclic
    /// order, starting anywhere and in either direction. The closing
    /// duplicate and repeated points are ignored.
    pub fn equals(&self, other: &Self, tolerance: P::Scalar) -> bool {
        let eps = touch_epsilon();
        let a = remove_duplicate_ring_vertices(&self.points, eps);
        let b = remove_duplicate_ring_vertices(&other.points, eps);
        if a.len() != b.len() {
            return false;
        }
        let n = a.len();
        if n == 0 {
            return true;
        }

        (0..n).any(|shift| {
            let forward = (0..n).all(|i| coincident(a[i], b[(i + shift) % n], tolerance));
            let backward = (0..n).all(|i| coincident(a[i], b[(shift + n - i) % n], tolerance));
            forward || backward
        })
    }

    /// Coordinates as `[x, y]` pairs.
    pub fn to_array(&self) -> Vec<[P::Scalar; 2]> {
        self.points.iter().map(|p| [p.x(), p.y()]).collect()
    }
}

impl<P: Coord2> Default for Polygon<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Coord2> From<Vec<P>> for Polygon<P> {
    fn from(points: Vec<P>) -> Self {
        Self::from_points(points)
    }
}

impl<P: Coord2> FromIterator<P> for Polygon<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl<P: Coord2> fmt::Display for Polygon<P>
where
    P::Scalar: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_points(f, &self.points)
    }
}

/// Computes the signed area of a ring using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding. The ring may or may
/// not repeat its first point.
pub fn polygon_signed_area<P: Coord2>(points: &[P]) -> P::Scalar {
    let n = points.len();
    if n < 3 {
        return P::Scalar::zero();
    }

    let mut area = P::Scalar::zero();
    for i in 0..n {
        let a = points[i].to_point2();
        let b = points[(i + 1) % n].to_point2();
        area = area + a.x * b.y - b.x * a.y;
    }

    area / (P::Scalar::one() + P::Scalar::one())
}
