//! Quadrilateralized spherical cube (CSC) projection.
//!
//! Also known as the COBE Sky Cube. The tangential cube projection is
//! followed by a curvilinear distortion of each face that makes the mapping
//! approximately equal-area, so data stored on the face planes can be
//! integrated without mapping back to the sphere. This is the Chan & O'Neill
//! (1975) variant, which stays differentiable along the face diagonals.
//!
//! Only the spherical projection lives here. The COBE pixel numbering along a
//! Z-order curve is a separate concern.

mod distortion;

pub use distortion::{forward_distort, inverse_distort};

use crate::coordinate::{FaceCoord, SphericalCoord};
use crate::face::CubeFace;
use crate::tangential;

/// Projects (φ, θ) in radians onto a cube face in CSC coordinates.
///
/// Face selection and tie-breaking are those of [`tangential::forward`]; the
/// returned (x, y) are `forward_distort(χ, ψ)` and `forward_distort(ψ, χ)`.
pub fn forward(phi: f64, theta: f64) -> FaceCoord {
    let (face, chi, psi) = tangential::forward(phi, theta).into_parts();
    FaceCoord::new(face, forward_distort(chi, psi), forward_distort(psi, chi))
}

/// Maps CSC (x, y) on `face` back to (φ, θ) in radians.
///
/// Because the two distortion polynomials are approximate inverses, a round
/// trip through [`forward`] reproduces (x, y) only to about 3e-4.
pub fn inverse(face: CubeFace, x: f64, y: f64) -> SphericalCoord {
    let chi = inverse_distort(x, y);
    let psi = inverse_distort(y, x);
    tangential::inverse(face, chi, psi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadsphere_core::constants::{HALF_PI, QUARTER_PI};

    const DELTA: f64 = 2.0 * f64::EPSILON;

    #[test]
    fn test_forward_matches_tangential_on_centre_lines() {
        let tsc = tangential::forward(0.0, QUARTER_PI);
        let csc = forward(0.0, QUARTER_PI);
        assert_eq!(csc.face(), tsc.face());
        assert!(csc.x().abs() <= DELTA);
        assert!((csc.y() - 1.0).abs() <= DELTA);
    }

    #[test]
    fn test_forward_uses_swapped_axes() {
        let (phi, theta) = (0.4, 0.25);
        let (face, chi, psi) = tangential::forward(phi, theta).into_parts();
        let p = forward(phi, theta);
        assert_eq!(p.face(), face);
        assert_eq!(p.x(), forward_distort(chi, psi));
        assert_eq!(p.y(), forward_distort(psi, chi));
    }

    #[test]
    fn test_inverse_face_centres() {
        let east = inverse(CubeFace::East, 0.0, 0.0);
        assert!((east.phi().radians() - HALF_PI).abs() <= DELTA);
        assert_eq!(east.theta().radians(), 0.0);
    }
}
