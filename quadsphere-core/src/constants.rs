#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const QUARTER_PI: f64 = 0.7853981633974483096156608;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_fractions() {
        assert_eq!(HALF_PI, PI / 2.0);
        assert_eq!(QUARTER_PI, PI / 4.0);
        assert_eq!(TWOPI, 2.0 * PI);
    }
}
