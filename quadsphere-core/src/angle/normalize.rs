//! Longitude wrapping.
//!
//! The cube projections only ever need one normalization: the longitude φ
//! reported by the validated inverse projection is brought into [-π, +π).
//! Latitude is never wrapped; it is validated instead.
//!
//! Wrapping uses `libm::fmod` (via [`crate::math::fmod`]), whose result keeps
//! the sign of the dividend; the half-open range is then restored by shifting
//! a full turn in the right direction.

use crate::constants::{PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [-π, +π) radians.
///
/// Both π and -π map to -π. Values already inside the range are returned
/// unchanged.
///
/// ```
/// use quadsphere_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_pm_pi(3.0 * PI / 2.0);
/// assert!((x - (-PI / 2.0)).abs() < 1e-10);
/// assert_eq!(wrap_pm_pi(1.0), 1.0);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w >= PI {
        w - TWOPI
    } else if w < -PI {
        w + TWOPI
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_wrap_pm_pi_in_range_is_identity() {
        for x in [0.0, 1.0, -1.0, HALF_PI, -HALF_PI, -PI, 3.0] {
            assert_eq!(wrap_pm_pi(x), x);
        }
    }

    #[test]
    fn test_wrap_pm_pi_half_open() {
        assert_eq!(wrap_pm_pi(PI), -PI);
        assert_eq!(wrap_pm_pi(-PI), -PI);
        assert_eq!(wrap_pm_pi(3.0 * PI), -PI);
    }

    #[test]
    fn test_wrap_pm_pi_full_turns() {
        assert!((wrap_pm_pi(3.0 * PI / 2.0) - (-PI / 2.0)).abs() < 1e-15);
        assert!((wrap_pm_pi(-3.0 * PI / 2.0) - (PI / 2.0)).abs() < 1e-15);
        assert!((wrap_pm_pi(10.0 * TWOPI + 0.25) - 0.25).abs() < 1e-13);
        assert!(wrap_pm_pi(f64::NAN).is_nan());
    }
}
