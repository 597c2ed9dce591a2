#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// `asin` with its argument clamped to [-1, 1].
///
/// Rounding can push a unit-vector component a hair past ±1; the clamp keeps
/// the result finite instead of NaN.
#[inline]
pub fn asin_safe(sin_value: f64) -> f64 {
    sin_value.clamp(-1.0, 1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmod_keeps_dividend_sign() {
        assert_eq!(fmod(370.0, 360.0), 10.0);
        assert_eq!(fmod(-1.0, 360.0), -1.0);
    }

    #[test]
    fn test_asin_safe_clamps() {
        assert_eq!(asin_safe(1.0 + 1e-15), asin_safe(1.0));
        assert_eq!(asin_safe(-1.0 - 1e-15), asin_safe(-1.0));
        assert!(asin_safe(2.0).is_finite());
    }
}
