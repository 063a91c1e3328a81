//! Joining polylines without creating self-intersections.

use super::Line;
use crate::primitives::{Coord2, Point2, Segment2};
use crate::tolerance::{
    remove_duplicate_vertices, segments_intersect, touch_epsilon, SegmentIntersection,
};
use num_traits::{Float, Zero};
use std::fmt::Debug;
use tracing::debug;

/// Returns true if the polyline has no crossing, touching or overlapping
/// segments other than neighbours meeting at their shared vertex.
///
/// Consecutive duplicate points are ignored. A closed polyline (first point
/// equal to last) may touch itself at the closing vertex.
pub fn polyline_is_simple<F: Float + Debug>(points: &[Point2<F>], eps: F) -> bool {
    let pts = remove_duplicate_vertices(points, eps);
    if pts.len() < 3 {
        return true;
    }

    let closed = pts.len() > 3 && pts[0].approx_eq(pts[pts.len() - 1], eps);
    let segs: Vec<Segment2<F>> = pts.windows(2).map(|w| Segment2::new(w[0], w[1])).collect();
    let last = segs.len() - 1;

    for i in 0..segs.len() {
        // Neighbours share a vertex; only a fold-back counts
        if i + 1 < segs.len() {
            if let SegmentIntersection::Overlapping { .. } =
                segments_intersect(segs[i], segs[i + 1], eps)
            {
                return false;
            }
        }

        for j in (i + 2)..segs.len() {
            let hit = segments_intersect(segs[i], segs[j], eps);
            match hit {
                SegmentIntersection::None => {}
                SegmentIntersection::Point { point, .. }
                    if closed && i == 0 && j == last && point.approx_eq(pts[0], eps) => {}
                _ => return false,
            }
        }
    }

    true
}

/// Incrementally builds a simple polyline.
///
/// A point is accepted when the segment it opens neither folds back onto
/// the previous segment nor touches any earlier one. Otherwise tail points
/// are dropped until it fits.
struct SimpleBuilder<P: Coord2> {
    points: Vec<P>,
    eps: P::Scalar,
    trimmed: usize,
}

impl<P: Coord2> SimpleBuilder<P> {
    fn new(eps: P::Scalar) -> Self {
        Self {
            points: Vec::new(),
            eps,
            trimmed: 0,
        }
    }

    fn push(&mut self, p: P) {
        loop {
            if let Some(last) = self.points.last() {
                if last.to_point2().approx_eq(p.to_point2(), self.eps) {
                    return;
                }
            }
            if self.points.len() < 2 || self.accepts(p) {
                self.points.push(p);
                return;
            }
            self.points.pop();
            self.trimmed += 1;
        }
    }

    fn accepts(&self, p: P) -> bool {
        let m = self.points.len();
        let last = self.points[m - 1].to_point2();
        let candidate = Segment2::new(last, p.to_point2());

        let previous = Segment2::new(self.points[m - 2].to_point2(), last);
        if let SegmentIntersection::Overlapping { .. } =
            segments_intersect(previous, candidate, self.eps)
        {
            return false;
        }

        !self.points[..m - 1].windows(2).any(|w| {
            let earlier = Segment2::new(w[0].to_point2(), w[1].to_point2());
            segments_intersect(earlier, candidate, self.eps).is_some()
        })
    }

    fn finish(self) -> Line<P> {
        Line::from_points(self.points)
    }
}

/// Appends `b` to `a`, trimming points near the junction so that the
/// result does not intersect itself.
///
/// Every point of `a` and then `b` is fed through the same simplicity
/// check; points whose inclusion would cause a crossing are dropped.
pub fn append_lines_no_intersect<P: Coord2>(a: &Line<P>, b: &Line<P>) -> Line<P> {
    let mut builder = SimpleBuilder::new(touch_epsilon());
    for &p in a.points().iter().chain(b.points()) {
        builder.push(p);
    }
    if builder.trimmed > 0 {
        debug!(trimmed = builder.trimmed, "append dropped points to stay simple");
    }
    builder.finish()
}

/// Merges two polylines that may overlap into one simple polyline.
///
/// When the lines cross, `a` is cut at the crossing furthest along `a`
/// (ties go to the one earliest along `b`) and continues as `b` from there.
/// Points away from the overlap are kept; the result never intersects
/// itself.
pub fn concatenate_linestring<P: Coord2>(a: &Line<P>, b: &Line<P>) -> Line<P> {
    let eps = touch_epsilon::<P::Scalar>();

    let joined: Vec<P> = match last_crossing(a, b, eps) {
        Some((sa, sb)) => {
            let head = a.line_from_s_interval(P::Scalar::zero(), sa);
            let tail = b.line_from_s_interval(sb, b.length());
            match (head, tail) {
                (Ok(head), Ok(tail)) => head
                    .points()
                    .iter()
                    .chain(tail.points())
                    .copied()
                    .collect(),
                _ => a.points().iter().chain(b.points()).copied().collect(),
            }
        }
        None => a.points().iter().chain(b.points()).copied().collect(),
    };

    let mut builder = SimpleBuilder::new(eps);
    for p in joined {
        builder.push(p);
    }
    if builder.trimmed > 0 {
        debug!(
            trimmed = builder.trimmed,
            "concatenation dropped points to stay simple"
        );
    }
    builder.finish()
}

// Arc lengths (along a, along b) of the crossing furthest along a. A
// collinear overlap counts as a crossing at its far end.
fn last_crossing<P: Coord2>(
    a: &Line<P>,
    b: &Line<P>,
    eps: P::Scalar,
) -> Option<(P::Scalar, P::Scalar)> {
    let (sa_table, sb_table) = (a.s_values(), b.s_values());
    let mut best: Option<(P::Scalar, P::Scalar)> = None;

    for (i, seg_a) in a.segments().enumerate() {
        for (j, seg_b) in b.segments().enumerate() {
            let (t1, t2) = match segments_intersect(seg_a, seg_b, eps) {
                SegmentIntersection::Point { t1, t2, .. } => (t1, t2),
                // Cut where the shared stretch ends along a
                SegmentIntersection::Overlapping { start, end } => {
                    let (_, t_start) = seg_a.closest_point(start);
                    let (_, t_end) = seg_a.closest_point(end);
                    let cut = if t_end >= t_start { end } else { start };
                    (t_start.max(t_end), seg_b.closest_point(cut).1)
                }
                SegmentIntersection::None => continue,
            };
            let sa = sa_table[i] + t1 * (sa_table[i + 1] - sa_table[i]);
            let sb = sb_table[j] + t2 * (sb_table[j + 1] - sb_table[j]);

            let better = match best {
                None => true,
                Some((best_a, best_b)) => {
                    sa > best_a + eps || ((sa - best_a).abs() <= eps && sb < best_b)
                }
            };
            if better {
                best = Some((sa, sb));
            }
        }
    }

    best
}
