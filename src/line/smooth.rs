//! Resampling a polyline along an interpolating cubic B-spline.

use super::Line;
use crate::primitives::{Coord2, Point2};
use crate::tolerance::{remove_duplicate_vertices, touch_epsilon};
use num_traits::{Float, NumCast, Zero};

/// Resamples `line` every `ds` along a cubic spline through its vertices.
///
/// The spline interpolates every vertex, with chord-length parameters and
/// averaged knots. It is sampled at the fractions `k * ds / L` of its
/// parameter range for every `k * ds < L`, where `L` is the length of the
/// input, and the last vertex is appended. First and last vertex are copied
/// unchanged. Rounding the corners usually makes the result slightly longer
/// than the input.
///
/// Lines with fewer than two distinct points, zero length, or a
/// non-positive `ds` are returned unchanged.
///
/// # Example
///
/// ```
/// use roadgeom::{smooth_line, Line, Point2};
///
/// let line: Line<Point2<f64>> = Line::from_points(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(3.0, 1.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(7.0, 5.0),
/// ]);
/// let smooth = smooth_line(&line, 1.0);
/// assert_eq!(smooth.len(), 11);
/// assert!(smooth.length() >= line.length());
/// ```
pub fn smooth_line<P: Coord2>(line: &Line<P>, ds: P::Scalar) -> Line<P> {
    let length = line.length();
    if ds.is_nan() || ds <= P::Scalar::zero() || length <= P::Scalar::zero() {
        return line.clone();
    }

    let pts: Vec<Point2<P::Scalar>> = line.points().iter().map(Coord2::to_point2).collect();
    let distinct = remove_duplicate_vertices(&pts, touch_epsilon());
    let spline = match InterpolatingSpline::fit(&distinct) {
        Some(spline) => spline,
        None => return line.clone(),
    };

    let points = line.points();
    let mut out = Line::new();
    out.add_point(points[0]);

    let mut k = 1usize;
    loop {
        let Some(kf) = <P::Scalar as NumCast>::from(k) else { break };
        let s = kf * ds;
        if s >= length {
            break;
        }
        out.add_point(P::from_point2(spline.eval(s / length)));
        k += 1;
    }

    out.add_point(points[points.len() - 1]);
    out
}

/// A B-spline through a set of points, over the parameter range [0, 1].
struct InterpolatingSpline<F> {
    control_points: Vec<Point2<F>>,
    degree: usize,
    knots: Vec<F>,
}

impl<F: Float> InterpolatingSpline<F> {
    /// Global interpolation with chord-length parameters.
    ///
    /// Returns `None` for fewer than two points or coincident parameters.
    fn fit(points: &[Point2<F>]) -> Option<Self> {
        let n = points.len();
        if n < 2 {
            return None;
        }
        let degree = 3.min(n - 1);

        let params = chord_length_params(points)?;
        let knots = averaged_knots(&params, degree)?;

        let mut spline = Self {
            control_points: Vec::new(),
            degree,
            knots,
        };

        // Collocation matrix: row k holds the degree + 1 basis functions that
        // are non-zero at params[k], starting at column first[k].
        let mut first = Vec::with_capacity(n);
        let mut rows = Vec::with_capacity(n);
        for &u in &params {
            let span = spline.find_knot_span(u, n);
            first.push(span - degree);
            rows.push(spline.basis_functions(span, u));
        }

        spline.control_points = solve_banded(&first, rows, points, degree)?;
        Some(spline)
    }

    /// Evaluates the spline at `t` in [0, 1] with de Boor's algorithm.
    fn eval(&self, t: F) -> Point2<F> {
        let n = self.control_points.len();
        let t = t.max(self.knots[self.degree]).min(self.knots[n]);
        let k = self.find_knot_span(t, n);
        self.de_boor(t, k)
    }

    /// Finds k such that knots[k] <= t < knots[k+1], within the domain.
    fn find_knot_span(&self, t: F, n: usize) -> usize {
        let p = self.degree;
        if t >= self.knots[n] {
            return n - 1;
        }

        let mut low = p;
        let mut high = n;
        while low < high {
            let mid = (low + high) / 2;
            if t < self.knots[mid] {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        low - 1
    }

    /// The degree + 1 non-zero basis functions at `u` in knot span `span`.
    fn basis_functions(&self, span: usize, u: F) -> Vec<F> {
        let p = self.degree;
        let mut values = vec![F::zero(); p + 1];
        let mut left = vec![F::zero(); p + 1];
        let mut right = vec![F::zero(); p + 1];
        values[0] = F::one();

        for j in 1..=p {
            left[j] = u - self.knots[span + 1 - j];
            right[j] = self.knots[span + j] - u;
            let mut saved = F::zero();
            for r in 0..j {
                let denom = right[r + 1] + left[j - r];
                let temp = if denom.abs() < F::epsilon() {
                    F::zero()
                } else {
                    values[r] / denom
                };
                values[r] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }
            values[j] = saved;
        }

        values
    }

    fn de_boor(&self, t: F, k: usize) -> Point2<F> {
        let p = self.degree;
        let mut d: Vec<Point2<F>> = (0..=p).map(|j| self.control_points[k - p + j]).collect();

        for r in 1..=p {
            for j in (r..=p).rev() {
                let i = k - p + j;
                let denom = self.knots[i + p - r + 1] - self.knots[i];
                let alpha = if denom.abs() < F::epsilon() {
                    F::zero()
                } else {
                    (t - self.knots[i]) / denom
                };
                d[j] = d[j - 1].lerp(d[j], alpha);
            }
        }

        d[p]
    }
}

// Cumulative chord lengths scaled to [0, 1].
fn chord_length_params<F: Float>(points: &[Point2<F>]) -> Option<Vec<F>> {
    let mut params = Vec::with_capacity(points.len());
    let mut total = F::zero();
    params.push(total);
    for w in points.windows(2) {
        total = total + w[0].distance(w[1]);
        params.push(total);
    }
    if total <= F::zero() || total.is_nan() {
        return None;
    }
    for u in params.iter_mut() {
        *u = *u / total;
    }
    let last = params.len() - 1;
    params[last] = F::one();
    Some(params)
}

// Clamped knot vector whose interior knots average `degree` parameters.
fn averaged_knots<F: Float>(params: &[F], degree: usize) -> Option<Vec<F>> {
    let n = params.len();
    let p_f = <F as NumCast>::from(degree)?;
    let mut knots = Vec::with_capacity(n + degree + 1);

    knots.extend(std::iter::repeat(F::zero()).take(degree + 1));
    for j in 1..n - degree {
        let sum = params[j..j + degree].iter().fold(F::zero(), |acc, &u| acc + u);
        knots.push(sum / p_f);
    }
    knots.extend(std::iter::repeat(F::one()).take(degree + 1));

    Some(knots)
}

// Solves the collocation system for the control points.
//
// Totally positive matrix: no pivoting, and every row stays inside its band.
fn solve_banded<F: Float>(
    first: &[usize],
    mut rows: Vec<Vec<F>>,
    rhs: &[Point2<F>],
    degree: usize,
) -> Option<Vec<Point2<F>>> {
    let n = rhs.len();
    let mut b: Vec<Point2<F>> = rhs.to_vec();
    let tiny = F::epsilon();

    for k in 0..n {
        if k < first[k] || k > first[k] + degree {
            return None;
        }
        let pivot = rows[k][k - first[k]];
        if pivot.abs() <= tiny {
            return None;
        }
        let row_end = (first[k] + degree).min(n - 1);

        for i in (k + 1)..n {
            if first[i] > k {
                break;
            }
            let factor = rows[i][k - first[i]] / pivot;
            if factor == F::zero() {
                continue;
            }
            for c in k..=row_end {
                let pivot_entry = rows[k][c - first[k]];
                let entry = &mut rows[i][c - first[i]];
                *entry = *entry - factor * pivot_entry;
            }
            b[i] = Point2::new(b[i].x - factor * b[k].x, b[i].y - factor * b[k].y);
        }
    }

    let mut x = vec![Point2::origin(); n];
    for k in (0..n).rev() {
        let row_end = (first[k] + degree).min(n - 1);
        let mut acc = b[k];
        for c in (k + 1)..=row_end {
            let a = rows[k][c - first[k]];
            acc = Point2::new(acc.x - a * x[c].x, acc.y - a * x[c].y);
        }
        let pivot = rows[k][k - first[k]];
        x[k] = Point2::new(acc.x / pivot, acc.y / pivot);
    }

    Some(x)
}
