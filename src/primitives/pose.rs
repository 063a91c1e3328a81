//! Planar pose (position plus heading).

use super::{Affine2, Point2};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A planar pose: position `(x, y)` and heading `theta` in radians,
/// counter-clockwise from the x axis.
///
/// Applying a pose to a shape defined in its local frame rotates the shape
/// about the local origin by `theta`, then translates it to `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose<F> {
    pub x: F,
    pub y: F,
    pub theta: F,
}

impl<F: Float> Pose<F> {
    /// Creates a new pose.
    #[inline]
    pub fn new(x: F, y: F, theta: F) -> Self {
        Self { x, y, theta }
    }

    /// The identity pose at the origin with zero heading.
    #[inline]
    pub fn identity() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }

    /// Returns the position part of the pose.
    #[inline]
    pub fn position(&self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }

    /// Returns the rigid transform mapping local coordinates into the frame
    /// this pose is expressed in.
    #[inline]
    pub fn to_affine(&self) -> Affine2<F> {
        Affine2::rotation(self.theta).then_translate(self.x, self.y)
    }

    /// Maps a point from the pose's local frame.
    #[inline]
    pub fn apply(&self, p: Point2<F>) -> Point2<F> {
        self.to_affine().apply_point(p)
    }
}

impl<F: Float> Default for Pose<F> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_leaves_points() {
        let p = Point2::new(1.5_f64, -2.0);
        assert_eq!(Pose::identity().apply(p), p);
    }

    #[test]
    fn test_rotate_then_translate() {
        let pose = Pose::new(10.0_f64, 5.0, FRAC_PI_2);
        let q = pose.apply(Point2::new(1.0, 0.0));
        assert_relative_eq!(q.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(q.y, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_position() {
        let pose = Pose::new(1.25_f64, 0.0, 0.3);
        assert_eq!(pose.position(), Point2::new(1.25, 0.0));
    }
}
