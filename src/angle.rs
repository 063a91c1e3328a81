//! Heading normalization helpers.
//!
//! Tangent angles from [`Line`](crate::line::Line) come out of `atan2` in
//! `(-pi, pi]`; these functions move them into the range a consumer wants.

use num_traits::{Float, FloatConst};

/// Wraps an angle into `[0, 2pi)`.
pub fn normalize_0_2pi<F: Float + FloatConst>(angle: F) -> F {
    let two_pi = F::TAU();
    let wrapped = angle % two_pi;
    let wrapped = if wrapped < F::zero() {
        wrapped + two_pi
    } else {
        wrapped
    };
    // -tiny + 2pi rounds up to 2pi
    if wrapped >= two_pi {
        F::zero()
    } else {
        wrapped
    }
}

/// Wraps an angle into `(-pi, pi]`.
pub fn normalize_pi<F: Float + FloatConst>(angle: F) -> F {
    let a = normalize_0_2pi(angle);
    if a > F::PI() {
        a - F::TAU()
    } else {
        a
    }
}

/// Folds an undirected heading into `[0, pi)`.
///
/// Headings that differ by `pi` describe the same axis and map to the same
/// value.
pub fn normalize_0_pi<F: Float + FloatConst>(angle: F) -> F {
    let a = normalize_0_2pi(angle);
    let folded = if a >= F::PI() { a - F::PI() } else { a };
    if folded >= F::PI() {
        F::zero()
    } else {
        folded
    }
}

/// Smallest signed rotation taking heading `from` onto heading `to`.
///
/// The result is in `(-pi, pi]`; positive means counter-clockwise.
#[inline]
pub fn signed_angle_diff<F: Float + FloatConst>(from: F, to: F) -> F {
    normalize_pi(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_normalize_0_2pi() {
        assert_relative_eq!(normalize_0_2pi(-FRAC_PI_2), 1.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_0_2pi(5.0 * PI), PI, epsilon = 1e-12);
        assert_eq!(normalize_0_2pi(0.0_f64), 0.0);
        assert_eq!(normalize_0_2pi(TAU), 0.0);
        assert!(normalize_0_2pi(-1e-18_f64) < TAU);
    }

    #[test]
    fn test_normalize_pi() {
        assert_relative_eq!(normalize_pi(1.5 * PI), -FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(normalize_pi(PI), PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_pi(-PI), PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_pi(0.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_0_pi() {
        assert_relative_eq!(normalize_0_pi(-FRAC_PI_2), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(normalize_0_pi(1.25 * PI), 0.25 * PI, epsilon = 1e-12);
        assert_relative_eq!(normalize_0_pi(0.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_signed_angle_diff_wraps() {
        // 350 deg to 10 deg is +20 deg, not -340 deg
        let from = 350.0_f64.to_radians();
        let to = 10.0_f64.to_radians();
        assert_relative_eq!(signed_angle_diff(from, to), 20.0_f64.to_radians(), epsilon = 1e-12);
        assert_relative_eq!(signed_angle_diff(to, from), -20.0_f64.to_radians(), epsilon = 1e-12);
    }
}
