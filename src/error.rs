//! Error types for roadgeom operations.

use thiserror::Error;

/// Errors from line and polygon queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A vertex index past the end of the sequence.
    #[error("index {index} out of bounds for {len} vertices")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of vertices available.
        len: usize,
    },

    /// An arc-length interval whose start lies after its end.
    #[error("invalid arc-length interval [{start}, {end}]")]
    InvalidInterval {
        /// Interval start after clamping.
        start: f64,
        /// Interval end after clamping.
        end: f64,
    },
}

/// Why a polygon ring is not valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// The last vertex does not repeat the first.
    #[error("ring is not closed")]
    NotClosed,

    /// Fewer than three distinct vertices.
    #[error("ring has only {count} distinct vertices")]
    TooFewVertices {
        /// Number of distinct vertices found.
        count: usize,
    },

    /// The enclosed area is zero.
    #[error("ring has zero area")]
    ZeroArea,

    /// Two non-adjacent edges cross or touch.
    #[error("edges {edge_a} and {edge_b} intersect")]
    SelfIntersection {
        /// Index of the first edge.
        edge_a: usize,
        /// Index of the second edge.
        edge_b: usize,
    },
}

/// Errors from polygon buffering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BufferError {
    /// The input ring failed validation.
    #[error("invalid input polygon: {0}")]
    InvalidInput(#[from] InvalidReason),

    /// The offset consumed the polygon: fewer than three edges survived or
    /// the ring lost its area.
    #[error("polygon collapsed when buffered by {distance}")]
    Collapsed {
        /// The requested offset distance.
        distance: f64,
    },

    /// The offset ring crosses itself.
    #[error("buffered ring is self-intersecting")]
    SelfIntersecting,
}
