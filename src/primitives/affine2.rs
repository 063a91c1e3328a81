//! 2D affine transformation used for rigid motions and anisotropic scaling.

use super::{Point2, Vec2};
use num_traits::Float;

/// A 2D affine transformation matrix.
///
/// Represented as a 2x3 matrix in row-major order:
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// ```
///
/// A point maps to `(a*x + b*y + tx, c*x + d*y + ty)`; a vector ignores the
/// translation column.
///
/// # Example
///
/// ```
/// use roadgeom::primitives::{Affine2, Point2};
/// use std::f64::consts::FRAC_PI_2;
///
/// // Rotate 90 degrees then translate
/// let transform: Affine2<f64> = Affine2::rotation(FRAC_PI_2).then_translate(10.0, 0.0);
/// let p = transform.apply_point(Point2::new(1.0, 0.0));
/// assert!((p.x - 10.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub d: F,
    pub tx: F,
    pub ty: F,
}

impl<F: Float> Affine2<F> {
    /// Creates a new affine transform from matrix components.
    #[inline]
    pub fn new(a: F, b: F, c: F, d: F, tx: F, ty: F) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Creates the identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::scale_xy(F::one(), F::one())
    }

    /// Creates a translation transform.
    #[inline]
    pub fn translate(tx: F, ty: F) -> Self {
        Self {
            tx,
            ty,
            ..Self::identity()
        }
    }

    /// Creates a rotation about the origin.
    ///
    /// Angle is in radians, positive is counter-clockwise.
    #[inline]
    pub fn rotation(angle: F) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self {
            a: cos_a,
            b: -sin_a,
            c: sin_a,
            d: cos_a,
            tx: F::zero(),
            ty: F::zero(),
        }
    }

    /// Creates a uniform scaling transform about the origin.
    #[inline]
    pub fn scale(factor: F) -> Self {
        Self::scale_xy(factor, factor)
    }

    /// Creates a non-uniform scaling transform about the origin.
    #[inline]
    pub fn scale_xy(sx: F, sy: F) -> Self {
        Self {
            a: sx,
            b: F::zero(),
            c: F::zero(),
            d: sy,
            tx: F::zero(),
            ty: F::zero(),
        }
    }

    /// Composes this transform with another (self * other).
    ///
    /// The resulting transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.a * other.tx + self.b * other.ty + self.tx,
            ty: self.c * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Returns a transform that applies `self` first, then `other`.
    #[inline]
    pub fn then(&self, other: Self) -> Self {
        other.compose(self)
    }

    /// Returns a transform that applies `self` first, then translates.
    #[inline]
    pub fn then_translate(&self, tx: F, ty: F) -> Self {
        self.then(Self::translate(tx, ty))
    }

    /// Returns a transform that applies `self` first, then rotates about the origin.
    #[inline]
    pub fn then_rotate(&self, angle: F) -> Self {
        self.then(Self::rotation(angle))
    }

    /// Applies this transform to a point.
    #[inline]
    pub fn apply_point(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }

    /// Applies this transform to a vector (no translation).
    #[inline]
    pub fn apply_vec(&self, v: Vec2<F>) -> Vec2<F> {
        Vec2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Returns the determinant of the linear part.
    ///
    /// Negative means the transform flips ring orientation.
    #[inline]
    pub fn determinant(&self) -> F {
        self.a * self.d - self.b * self.c
    }
}

impl<F: Float> Default for Affine2<F> {
    fn default() -> Self {
        Self::identity()
    }
}
