//! Finite-difference derivatives along a polyline.
//!
//! Samples are assumed to be unit-spaced. Values at the first and last
//! sample come from one-sided differences and are less accurate than the
//! interior ones.

use super::Line;
use crate::primitives::Coord2;
use num_traits::{Float, NumCast, Zero};

/// Discrete first derivative of a sequence.
///
/// Central differences `(v[i+1] - v[i-1]) / 2` in the interior, forward and
/// backward differences at the ends. The output has the input's length;
/// fewer than two samples give zeros.
pub fn gradient<F: Float>(values: &[F]) -> Vec<F> {
    let n = values.len();
    if n < 2 {
        return vec![F::zero(); n];
    }

    let two = F::one() + F::one();
    let mut out = Vec::with_capacity(n);
    out.push(values[1] - values[0]);
    for w in values.windows(3) {
        out.push((w[2] - w[0]) / two);
    }
    out.push(values[n - 1] - values[n - 2]);
    out
}

/// Signed curvature at every vertex.
///
/// Computed as `(x' y'' - y' x'') / (x'^2 + y'^2)^(3/2)` where both
/// derivatives come from [`gradient`] over the coordinate columns. Positive
/// values turn left. Where the first derivative vanishes the curvature is
/// reported as zero.
pub fn curvature<P: Coord2>(line: &Line<P>) -> Vec<P::Scalar> {
    let xs: Vec<P::Scalar> = line.points().iter().map(|p| p.x()).collect();
    let ys: Vec<P::Scalar> = line.points().iter().map(|p| p.y()).collect();

    let dx = gradient(&xs);
    let dy = gradient(&ys);
    let ddx = gradient(&dx);
    let ddy = gradient(&dy);

    let three_halves = <P::Scalar as NumCast>::from(1.5).unwrap();
    dx.iter()
        .zip(&dy)
        .zip(ddx.iter().zip(&ddy))
        .map(|((&dx, &dy), (&ddx, &ddy))| {
            let speed_sq = dx * dx + dy * dy;
            if speed_sq <= P::Scalar::epsilon() {
                P::Scalar::zero()
            } else {
                (dx * ddy - ddx * dy) / speed_sq.powf(three_halves)
            }
        })
        .collect()
}
