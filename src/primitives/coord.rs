//! The 2D coordinate capability that lines and polygons are generic over.

use super::Point2;
use num_traits::Float;
use std::fmt::Debug;

/// Anything that can act as a 2D coordinate.
///
/// [`Line`](crate::line::Line) and [`Polygon`](crate::polygon::Polygon) store
/// values of this type and hand them back unchanged, so callers can keep
/// their own point representation. All arithmetic happens on [`Point2`].
pub trait Coord2: Copy + Debug {
    /// The floating-point type of the coordinates.
    type Scalar: Float + Debug;

    /// Returns the x coordinate.
    fn x(&self) -> Self::Scalar;

    /// Returns the y coordinate.
    fn y(&self) -> Self::Scalar;

    /// Builds a coordinate from its components.
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self;

    /// Converts into the crate's point type.
    #[inline]
    fn to_point2(&self) -> Point2<Self::Scalar> {
        Point2::new(self.x(), self.y())
    }

    /// Converts from the crate's point type.
    #[inline]
    fn from_point2(p: Point2<Self::Scalar>) -> Self {
        Self::from_xy(p.x, p.y)
    }
}

impl<F: Float + Debug> Coord2 for Point2<F> {
    type Scalar = F;

    #[inline]
    fn x(&self) -> F {
        self.x
    }

    #[inline]
    fn y(&self) -> F {
        self.y
    }

    #[inline]
    fn from_xy(x: F, y: F) -> Self {
        Point2::new(x, y)
    }

    #[inline]
    fn to_point2(&self) -> Point2<F> {
        *self
    }
}

impl<F: Float + Debug> Coord2 for [F; 2] {
    type Scalar = F;

    #[inline]
    fn x(&self) -> F {
        self[0]
    }

    #[inline]
    fn y(&self) -> F {
        self[1]
    }

    #[inline]
    fn from_xy(x: F, y: F) -> Self {
        [x, y]
    }
}

impl<F: Float + Debug> Coord2 for (F, F) {
    type Scalar = F;

    #[inline]
    fn x(&self) -> F {
        self.0
    }

    #[inline]
    fn y(&self) -> F {
        self.1
    }

    #[inline]
    fn from_xy(x: F, y: F) -> Self {
        (x, y)
    }
}
