//! Polygon buffering (inflating and shrinking by a signed distance).
//!
//! Every edge moves along its outward normal; positive distances grow the
//! polygon and negative ones shrink it. Where offset edges spread apart the
//! gap is filled according to a [`JoinStyle`]; where they overlap they are
//! cut at their intersection. An edge whose offset shrinks past zero length
//! is removed and its neighbours meet instead.
//!
//! # Example
//!
//! ```
//! use roadgeom::{buffer_polygon, Point2, Polygon};
//!
//! let square: Polygon<Point2<f64>> = Polygon::from_points(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//!     Point2::new(0.0, 0.0),
//! ]);
//!
//! let grown = buffer_polygon(&square, 1.0).unwrap();
//! assert!((grown.area() - 144.0).abs() < 1e-9);
//!
//! let shrunk = buffer_polygon(&square, -1.0).unwrap();
//! assert!((shrunk.area() - 64.0).abs() < 1e-9);
//! ```

use super::core::{polygon_signed_area, Polygon};
use super::validate::first_self_intersection;
use crate::error::BufferError;
use crate::primitives::{Coord2, Point2, Vec2};
use crate::tolerance::{remove_duplicate_ring_vertices, touch_epsilon};
use num_traits::{Float, ToPrimitive};
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Style for handling corners where offset edges spread apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JoinStyle {
    /// Extend edges until they meet; past the miter limit, bevel instead.
    Miter,
    /// Cut off corners with a straight line.
    Bevel,
    /// Round corners with arc segments.
    Round,
}

/// Options for [`buffer_polygon_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BufferConfig<F> {
    /// Style for corners that open a gap.
    pub join: JoinStyle,
    /// Largest allowed ratio of miter length to offset distance.
    pub miter_limit: F,
    /// Largest allowed distance between a round join and its true arc.
    pub arc_tolerance: F,
}

impl<F: Float> Default for BufferConfig<F> {
    fn default() -> Self {
        Self {
            join: JoinStyle::Miter,
            miter_limit: F::from(2.0).unwrap(),
            arc_tolerance: F::from(0.01).unwrap(),
        }
    }
}

impl<F: Float> BufferConfig<F> {
    /// Sets the join style.
    pub fn with_join(mut self, join: JoinStyle) -> Self {
        self.join = join;
        self
    }

    /// Sets the miter limit.
    pub fn with_miter_limit(mut self, limit: F) -> Self {
        self.miter_limit = limit;
        self
    }

    /// Sets the arc tolerance for round joins.
    pub fn with_arc_tolerance(mut self, tolerance: F) -> Self {
        self.arc_tolerance = tolerance;
        self
    }
}

/// Buffers a polygon by `distance` with the default [`BufferConfig`].
///
/// See [`buffer_polygon_with`].
pub fn buffer_polygon<P: Coord2>(
    polygon: &Polygon<P>,
    distance: P::Scalar,
) -> Result<Polygon<P>, BufferError> {
    buffer_polygon_with(polygon, distance, &BufferConfig::default())
}

/// Buffers a polygon by a signed distance.
///
/// Positive `distance` grows the polygon, negative shrinks it. The input
/// must pass [`Polygon::is_valid`]; either winding works. The result keeps
/// the input's winding and is explicitly closed. It starts at the offset of
/// the input's first vertex unless the edge leaving that vertex vanished.
///
/// Offset edges that shrink to nothing are dropped and their neighbours
/// extended until they meet, so concave outlines can be inflated and
/// chamfered ones shrunk. Fails if the input is invalid, if fewer than three
/// edges survive or the ring loses its area, or if the offset ring would
/// intersect itself.
pub fn buffer_polygon_with<P: Coord2>(
    polygon: &Polygon<P>,
    distance: P::Scalar,
    config: &BufferConfig<P::Scalar>,
) -> Result<Polygon<P>, BufferError> {
    polygon.validate().map_err(|reason| {
        debug!(%reason, "cannot buffer invalid polygon");
        BufferError::InvalidInput(reason)
    })?;

    let eps = touch_epsilon::<P::Scalar>();
    let corners: Vec<Point2<P::Scalar>> = remove_duplicate_ring_vertices(polygon.points(), eps)
        .iter()
        .map(Coord2::to_point2)
        .collect();

    if distance.abs() <= eps {
        return Ok(Polygon::from_points(
            closed_ring(&corners).into_iter().map(P::from_point2).collect(),
        ));
    }

    let collapsed = || BufferError::Collapsed {
        distance: distance.to_f64().unwrap_or(f64::NAN),
    };

    let orientation = polygon.signed_area().signum();
    let m = corners.len();

    let mut edges = Vec::with_capacity(m);
    for i in 0..m {
        let (start, end) = (corners[i], corners[(i + 1) % m]);
        let dir = (end - start).normalize().ok_or_else(collapsed)?;
        edges.push(OffsetEdge {
            index: i,
            start,
            end,
            dir,
            normal: Vec2::new(dir.y, -dir.x) * orientation,
        });
    }

    let offset = Offset {
        edges: &edges,
        orientation,
        config,
    };

    // Positions in `edges` of the edges still present in the offset ring
    let mut kept: Vec<usize> = (0..m).collect();
    let joins = loop {
        if kept.len() < 3 {
            debug!(?distance, "fewer than three offset edges survive");
            return Err(collapsed());
        }
        let joins = match offset.joins(&kept, distance) {
            Ok(joins) => joins,
            Err(j) => {
                trace!(edge = kept[j], "offset line passed its opposite neighbour");
                kept.remove(j);
                continue;
            }
        };
        match offset.first_vanished(&kept, &joins) {
            Some(j) => {
                trace!(edge = kept[j], "offset edge vanished");
                kept.remove(j);
            }
            None => break joins,
        }
    };

    let out: Vec<Point2<P::Scalar>> = joins.into_iter().flatten().collect();
    let ring = remove_duplicate_ring_vertices(&out, eps);
    if ring.len() < 3 {
        debug!(?distance, "buffered ring has fewer than three corners");
        return Err(collapsed());
    }

    let area = polygon_signed_area(&ring);
    if area.abs() <= eps || area.signum() != orientation {
        debug!(?distance, "buffered ring lost its area or flipped winding");
        return Err(collapsed());
    }

    if let Some((a, b)) = first_self_intersection(&ring, eps) {
        debug!(edge_a = a, edge_b = b, "buffered ring intersects itself");
        return Err(BufferError::SelfIntersecting);
    }

    Ok(Polygon::from_points(
        closed_ring(&ring).into_iter().map(P::from_point2).collect(),
    ))
}

// One source edge and its outward normal.
struct OffsetEdge<F> {
    index: usize,
    start: Point2<F>,
    end: Point2<F>,
    dir: Vec2<F>,
    normal: Vec2<F>,
}

struct Offset<'a, F> {
    edges: &'a [OffsetEdge<F>],
    orientation: F,
    config: &'a BufferConfig<F>,
}

impl<F: Float> Offset<'_, F> {
    /// Offset geometry between consecutive kept edges; entry j is the join
    /// that ends kept edge j - 1 and starts kept edge j.
    ///
    /// Fails with the position of an edge whose offset line has crossed an
    /// antiparallel neighbour's.
    fn joins(&self, kept: &[usize], distance: F) -> Result<Vec<Vec<Point2<F>>>, usize> {
        let k = kept.len();
        (0..k)
            .map(|j| {
                let a = &self.edges[kept[(j + k - 1) % k]];
                let b = &self.edges[kept[j]];
                self.join(a, b, distance).ok_or(j)
            })
            .collect()
    }

    fn join(
        &self,
        a: &OffsetEdge<F>,
        b: &OffsetEdge<F>,
        distance: F,
    ) -> Option<Vec<Point2<F>>> {
        let mut out = Vec::with_capacity(2);
        if (a.index + 1) % self.edges.len() == b.index {
            join_corner(
                &mut out,
                b.start,
                (a.dir, a.normal),
                (b.dir, b.normal),
                self.orientation,
                distance,
                self.config,
            );
            return Some(out);
        }

        // Neighbours of a dropped run: meet where the offset lines do
        let a_start = a.start + a.normal * distance;
        let a_end = a.end + a.normal * distance;
        let b_start = b.start + b.normal * distance;
        let cross = a.dir.cross(b.dir);
        let eps = touch_epsilon::<F>();

        if cross.abs() > F::epsilon() * F::from(16.0).unwrap() {
            let t = (b_start - a_start).cross(b.dir) / cross;
            out.push(a_start + a.dir * t);
        } else if a.dir.dot(b.dir) > F::zero() {
            if (b_start - a_end).dot(a.normal).abs() <= eps {
                out.push(a_end.lerp(b_start, F::from(0.5).unwrap()));
            } else {
                out.push(a_end);
                out.push(b_start);
            }
        } else {
            let before = (b.start - a.start).dot(a.normal);
            let after = (b_start - a_start).dot(a.normal);
            if after.abs() <= eps || (before > F::zero()) != (after > F::zero()) {
                return None;
            }
            out.push(a_end);
            out.push(b_start);
        }
        Some(out)
    }

    /// Position of the kept edge that reversed first as the offset grew.
    fn first_vanished(&self, kept: &[usize], joins: &[Vec<Point2<F>>]) -> Option<usize> {
        let eps = touch_epsilon::<F>();
        let source = self.joins(kept, F::zero()).ok();

        let mut first: Option<(usize, F)> = None;
        for (j, &e) in kept.iter().enumerate() {
            let dir = self.edges[e].dir;
            let along = run_along(joins, j, dir);
            if along >= -eps {
                continue;
            }
            // Lengths change linearly with the distance
            let before = source
                .as_ref()
                .map_or(F::zero(), |s| run_along(s, j, dir))
                .max(F::zero());
            let when = before / (before - along);
            if first.map_or(true, |(_, w)| when < w) {
                first = Some((j, when));
            }
        }
        first.map(|(j, _)| j)
    }
}

// Signed length of kept edge j along its source direction.
fn run_along<F: Float>(joins: &[Vec<Point2<F>>], j: usize, dir: Vec2<F>) -> F {
    let next = (j + 1) % joins.len();
    match (joins[j].last(), joins[next].first()) {
        (Some(&start), Some(&end)) => (end - start).dot(dir),
        _ => F::zero(),
    }
}

// Emits the offset geometry for one corner.
fn join_corner<F: Float>(
    out: &mut Vec<Point2<F>>,
    corner: Point2<F>,
    (dir_in, n_in): (Vec2<F>, Vec2<F>),
    (dir_out, n_out): (Vec2<F>, Vec2<F>),
    orientation: F,
    distance: F,
    config: &BufferConfig<F>,
) {
    let turn = orientation * dir_in.cross(dir_out) * distance;
    let denom = F::one() + n_in.dot(n_out);
    let tiny = F::epsilon() * F::from(16.0).unwrap();

    if turn <= F::zero() || turn.abs() <= tiny {
        // Offset edges overlap or continue straight: meet at their intersection
        if denom <= tiny {
            out.push(corner + n_in * distance);
            out.push(corner + n_out * distance);
        } else {
            out.push(corner + (n_in + n_out) * (distance / denom));
        }
        return;
    }

    match config.join {
        JoinStyle::Miter => {
            let ratio = if denom <= tiny {
                F::infinity()
            } else {
                (n_in + n_out).magnitude() / denom
            };
            if ratio <= config.miter_limit {
                out.push(corner + (n_in + n_out) * (distance / denom));
            } else {
                trace!("miter limit exceeded, beveling corner");
                out.push(corner + n_in * distance);
                out.push(corner + n_out * distance);
            }
        }
        JoinStyle::Bevel => {
            out.push(corner + n_in * distance);
            out.push(corner + n_out * distance);
        }
        JoinStyle::Round => round_join(out, corner, n_in, n_out, distance, config.arc_tolerance),
    }
}

// Arc around `corner` from the incoming to the outgoing offset point.
fn round_join<F: Float>(
    out: &mut Vec<Point2<F>>,
    corner: Point2<F>,
    n_in: Vec2<F>,
    n_out: Vec2<F>,
    distance: F,
    tolerance: F,
) {
    let radius = distance.abs();
    let start = n_in * distance.signum();
    let end = n_out * distance.signum();
    let sweep = start.cross(end).atan2(start.dot(end));

    let ratio = (tolerance / radius).min(F::one());
    let max_step = if ratio > F::zero() {
        F::from(2.0).unwrap() * (F::one() - ratio).acos()
    } else {
        F::from(0.1).unwrap()
    };
    let steps = (sweep.abs() / max_step).ceil().max(F::one());
    let count = steps.to_usize().unwrap_or(1).max(1);
    let step = sweep / F::from(count).unwrap();

    out.push(corner + n_in * distance);
    for k in 1..count {
        let v = start.rotated(step * F::from(k).unwrap());
        out.push(corner + v * radius);
    }
    out.push(corner + n_out * distance);
}

fn closed_ring<F: Float>(ring: &[Point2<F>]) -> Vec<Point2<F>> {
    let mut closed = ring.to_vec();
    if let Some(&first) = ring.first() {
        closed.push(first);
    }
    closed
}
