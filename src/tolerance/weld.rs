//! Removal of coincident consecutive vertices.

use crate::primitives::Coord2;
use num_traits::Float;

/// Drops vertices that coincide with their predecessor within `epsilon`.
///
/// The first vertex of every run of duplicates is kept, so the output
/// preserves the caller's coordinates exactly.
pub fn remove_duplicate_vertices<P: Coord2>(points: &[P], epsilon: P::Scalar) -> Vec<P> {
    let eps_sq = epsilon * epsilon;
    let mut result: Vec<P> = Vec::with_capacity(points.len());

    for &p in points {
        let keep = match result.last() {
            Some(last) => last.to_point2().distance_squared(p.to_point2()) > eps_sq,
            None => true,
        };
        if keep {
            result.push(p);
        }
    }

    result
}

/// Like [`remove_duplicate_vertices`] but treats the sequence as a ring.
///
/// A trailing vertex equal to the first one is dropped too, so the result
/// is an open vertex list of the distinct ring corners.
pub fn remove_duplicate_ring_vertices<P: Coord2>(points: &[P], epsilon: P::Scalar) -> Vec<P> {
    let mut result = remove_duplicate_vertices(points, epsilon);
    while result.len() > 1 {
        let first = result[0].to_point2();
        let last = result[result.len() - 1].to_point2();
        if first.distance_squared(last) > epsilon * epsilon {
            break;
        }
        result.pop();
    }
    result
}

/// Returns true if two coordinates coincide within `epsilon`.
#[inline]
pub fn coincident<P: Coord2>(a: P, b: P, epsilon: P::Scalar) -> bool {
    a.to_point2().distance_squared(b.to_point2()) <= epsilon * epsilon
}

/// Tolerance used for touching tests: a few ulps above machine epsilon,
/// floored so that `f32` and `f64` both get a usable margin.
#[inline]
pub fn touch_epsilon<F: Float>() -> F {
    let scaled = F::epsilon() * F::from(64.0).unwrap();
    scaled.max(F::from(1e-9).unwrap())
}
