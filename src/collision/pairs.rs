//! Pairwise implementations of [`Distance`] and [`Collide`].

use crate::line::Line;
use crate::polygon::Polygon;
use crate::primitives::{Coord2, Point2, Segment2};
use crate::tolerance::{segments_touch, touch_epsilon};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Minimum Euclidean distance between two shapes.
pub trait Distance<Rhs: ?Sized> {
    /// The scalar type of the result.
    type Output;

    /// Distance from `self` to `other`; zero when they touch or overlap.
    fn distance_to(&self, other: &Rhs) -> Self::Output;
}

/// Boolean overlap test between two shapes. Touching counts as colliding.
pub trait Collide<Rhs: ?Sized> {
    /// Returns true if `self` and `other` share at least one point.
    fn collides_with(&self, other: &Rhs) -> bool;
}

/// Distance between any supported pair of shapes.
///
/// Empty shapes are infinitely far from everything.
#[inline]
pub fn distance<A, B>(a: &A, b: &B) -> A::Output
where
    A: Distance<B>,
{
    a.distance_to(b)
}

/// Collision test between any supported pair of shapes.
///
/// Empty shapes collide with nothing.
#[inline]
pub fn collide<A, B>(a: &A, b: &B) -> bool
where
    A: Collide<B>,
{
    a.collides_with(b)
}

// Segments of a line; a single point becomes a zero-length segment.
fn line_parts<P: Coord2>(line: &Line<P>) -> Vec<Segment2<P::Scalar>> {
    match line.points() {
        [] => Vec::new(),
        [p] => vec![Segment2::new(p.to_point2(), p.to_point2())],
        _ => line.segments().collect(),
    }
}

fn ring_parts<P: Coord2>(polygon: &Polygon<P>) -> Vec<Segment2<P::Scalar>> {
    match polygon.points() {
        [] => Vec::new(),
        [p] => vec![Segment2::new(p.to_point2(), p.to_point2())],
        _ => polygon.edges().collect(),
    }
}

fn snap<F: Float>(d: F) -> F {
    if d <= touch_epsilon() {
        F::zero()
    } else {
        d
    }
}

fn point_parts_distance<F: Float>(p: Point2<F>, parts: &[Segment2<F>]) -> F {
    let d = parts
        .iter()
        .map(|s| s.distance_squared_to_point(p))
        .fold(F::infinity(), F::min)
        .sqrt();
    snap(d)
}

fn parts_touch<F: Float>(a: &[Segment2<F>], b: &[Segment2<F>]) -> bool {
    let eps = touch_epsilon();
    a.iter()
        .any(|&sa| b.iter().any(|&sb| segments_touch(sa, sb, eps)))
}

// Exactly zero iff `parts_touch` holds; otherwise every endpoint gap is
// already above the tolerance.
fn parts_distance<F: Float>(a: &[Segment2<F>], b: &[Segment2<F>]) -> F {
    let eps = touch_epsilon();
    a.iter()
        .flat_map(|&sa| b.iter().map(move |&sb| sa.distance_to_segment(sb, eps)))
        .fold(F::infinity(), F::min)
}

fn point_polygon_distance<P: Coord2>(p: Point2<P::Scalar>, polygon: &Polygon<P>) -> P::Scalar {
    if polygon.contains(p) {
        return P::Scalar::zero();
    }
    point_parts_distance(p, &ring_parts(polygon))
}

// With no edge contact, one shape lies inside the other iff any single
// vertex does.
fn line_polygon_contact<P: Coord2>(line: &[Segment2<P::Scalar>], polygon: &Polygon<P>) -> bool {
    match line.first() {
        None => false,
        Some(first) => polygon.contains(first.start) || parts_touch(line, &ring_parts(polygon)),
    }
}

fn polygons_contact<P: Coord2>(a: &Polygon<P>, b: &Polygon<P>) -> bool {
    let (Some(pa), Some(pb)) = (a.points().first(), b.points().first()) else {
        return false;
    };
    b.contains(pa.to_point2())
        || a.contains(pb.to_point2())
        || parts_touch(&ring_parts(a), &ring_parts(b))
}

// Point and point

impl<F: Float + Debug> Distance<Point2<F>> for Point2<F> {
    type Output = F;

    #[inline]
    fn distance_to(&self, other: &Point2<F>) -> F {
        self.distance(*other)
    }
}

// Point and line

impl<P: Coord2> Distance<P> for Line<P> {
    type Output = P::Scalar;

    fn distance_to(&self, other: &P) -> P::Scalar {
        point_parts_distance(other.to_point2(), &line_parts(self))
    }
}

impl<P: Coord2> Distance<Line<P>> for P {
    type Output = P::Scalar;

    #[inline]
    fn distance_to(&self, other: &Line<P>) -> P::Scalar {
        other.distance_to(self)
    }
}

impl<P: Coord2> Collide<P> for Line<P> {
    fn collides_with(&self, other: &P) -> bool {
        self.distance_to(other) == P::Scalar::zero()
    }
}

impl<P: Coord2> Collide<Line<P>> for P {
    #[inline]
    fn collides_with(&self, other: &Line<P>) -> bool {
        other.collides_with(self)
    }
}

// Point and polygon

impl<P: Coord2> Distance<P> for Polygon<P> {
    type Output = P::Scalar;

    fn distance_to(&self, other: &P) -> P::Scalar {
        point_polygon_distance(other.to_point2(), self)
    }
}

impl<P: Coord2> Distance<Polygon<P>> for P {
    type Output = P::Scalar;

    #[inline]
    fn distance_to(&self, other: &Polygon<P>) -> P::Scalar {
        other.distance_to(self)
    }
}

impl<P: Coord2> Collide<P> for Polygon<P> {
    fn collides_with(&self, other: &P) -> bool {
        self.distance_to(other) == P::Scalar::zero()
    }
}

impl<P: Coord2> Collide<Polygon<P>> for P {
    #[inline]
    fn collides_with(&self, other: &Polygon<P>) -> bool {
        other.collides_with(self)
    }
}

// Line and line

impl<P: Coord2> Distance<Line<P>> for Line<P> {
    type Output = P::Scalar;

    fn distance_to(&self, other: &Line<P>) -> P::Scalar {
        parts_distance(&line_parts(self), &line_parts(other))
    }
}

impl<P: Coord2> Collide<Line<P>> for Line<P> {
    fn collides_with(&self, other: &Line<P>) -> bool {
        parts_touch(&line_parts(self), &line_parts(other))
    }
}

// Line and polygon

impl<P: Coord2> Distance<Polygon<P>> for Line<P> {
    type Output = P::Scalar;

    fn distance_to(&self, other: &Polygon<P>) -> P::Scalar {
        let parts = line_parts(self);
        if line_polygon_contact(&parts, other) {
            return P::Scalar::zero();
        }
        parts_distance(&parts, &ring_parts(other))
    }
}

impl<P: Coord2> Distance<Line<P>> for Polygon<P> {
    type Output = P::Scalar;

    #[inline]
    fn distance_to(&self, other: &Line<P>) -> P::Scalar {
        other.distance_to(self)
    }
}

impl<P: Coord2> Collide<Polygon<P>> for Line<P> {
    fn collides_with(&self, other: &Polygon<P>) -> bool {
        line_polygon_contact(&line_parts(self), other)
    }
}

impl<P: Coord2> Collide<Line<P>> for Polygon<P> {
    #[inline]
    fn collides_with(&self, other: &Line<P>) -> bool {
        other.collides_with(self)
    }
}

// Polygon and polygon

impl<P: Coord2> Distance<Polygon<P>> for Polygon<P> {
    type Output = P::Scalar;

    fn distance_to(&self, other: &Polygon<P>) -> P::Scalar {
        if polygons_contact(self, other) {
            return P::Scalar::zero();
        }
        parts_distance(&ring_parts(self), &ring_parts(other))
    }
}

impl<P: Coord2> Collide<Polygon<P>> for Polygon<P> {
    fn collides_with(&self, other: &Polygon<P>) -> bool {
        polygons_contact(self, other)
    }
}
