use quadsphere_core::math::asin_safe;
use quadsphere_core::Angle;

use crate::face::CubeFace;

/// A point on the sphere: longitude φ and latitude θ.
///
/// φ is the azimuth, θ the elevation (spherical, not geodetic). At the poles
/// φ carries no information.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalCoord {
    phi: Angle,
    theta: Angle,
}

impl SphericalCoord {
    #[inline]
    pub fn new(phi: Angle, theta: Angle) -> Self {
        Self { phi, theta }
    }

    #[inline]
    pub fn from_radians(phi: f64, theta: f64) -> Self {
        Self::new(Angle::from_radians(phi), Angle::from_radians(theta))
    }

    #[inline]
    pub fn from_degrees(phi: f64, theta: f64) -> Self {
        Self::new(Angle::from_degrees(phi), Angle::from_degrees(theta))
    }

    #[inline]
    pub fn phi(&self) -> Angle {
        self.phi
    }

    #[inline]
    pub fn theta(&self) -> Angle {
        self.theta
    }
}

/// Unit vector (l, m, n) pointing from the sphere's centre.
///
/// l points at φ=0 on the equator, m at φ=90°, n at the north pole.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionCosines {
    l: f64,
    m: f64,
    n: f64,
}

impl DirectionCosines {
    #[inline]
    pub fn new(l: f64, m: f64, n: f64) -> Self {
        Self { l, m, n }
    }

    #[inline]
    pub fn from_radians(phi: f64, theta: f64) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Self {
            l: cos_theta * cos_phi,
            m: cos_theta * sin_phi,
            n: sin_theta,
        }
    }

    #[inline]
    pub fn from_spherical(coord: SphericalCoord) -> Self {
        Self::from_radians(coord.phi().radians(), coord.theta().radians())
    }

    /// Converts back to (φ, θ) with φ = atan2(m, l) and θ = asin(n).
    #[inline]
    pub fn to_spherical(&self) -> SphericalCoord {
        SphericalCoord::from_radians(self.m.atan2(self.l), asin_safe(self.n))
    }

    #[inline]
    pub fn components(&self) -> (f64, f64, f64) {
        (self.l, self.m, self.n)
    }

    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    #[inline]
    pub fn m(&self) -> f64 {
        self.m
    }

    #[inline]
    pub fn n(&self) -> f64 {
        self.n
    }
}

/// A point on one of the six cube faces.
///
/// Both planar coordinates span [-1, 1], with (0, 0) at the face centre. For
/// the tangential projection these are the gnomonic (χ, ψ); for CSC they are
/// the distortion-corrected (x, y).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceCoord {
    face: CubeFace,
    x: f64,
    y: f64,
}

impl FaceCoord {
    #[inline]
    pub fn new(face: CubeFace, x: f64, y: f64) -> Self {
        Self { face, x, y }
    }

    #[inline]
    pub fn face(&self) -> CubeFace {
        self.face
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Destructures into `(face, x, y)`.
    #[inline]
    pub fn into_parts(self) -> (CubeFace, f64, f64) {
        (self.face, self.x, self.y)
    }

    /// True when both coordinates lie in [-1, 1].
    #[inline]
    pub fn is_on_face(&self) -> bool {
        (-1.0..=1.0).contains(&self.x) && (-1.0..=1.0).contains(&self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadsphere_core::constants::HALF_PI;

    #[test]
    fn test_spherical_coord() {
        let c = SphericalCoord::from_degrees(45.0, 30.0);
        assert!((c.phi().degrees() - 45.0).abs() < 1e-12);
        assert!((c.theta().degrees() - 30.0).abs() < 1e-12);

        let r = SphericalCoord::from_radians(0.25, -0.5);
        assert_eq!(r.phi().radians(), 0.25);
        assert_eq!(r.theta().radians(), -0.5);
    }

    #[test]
    fn test_direction_cosines_unit_length() {
        for (phi, theta) in [(0.3, 0.2), (-2.5, 1.1), (3.0, -1.4), (0.0, HALF_PI)] {
            let (l, m, n) = DirectionCosines::from_radians(phi, theta).components();
            let norm = l * l + m * m + n * n;
            assert!((norm - 1.0).abs() < 1e-15, "norm {} at ({}, {})", norm, phi, theta);
        }
    }

    #[test]
    fn test_direction_cosines_axes() {
        let front = DirectionCosines::from_radians(0.0, 0.0);
        assert_eq!(front.components(), (1.0, 0.0, 0.0));

        let north = DirectionCosines::from_radians(0.0, HALF_PI);
        assert_eq!(north.n(), 1.0);
        assert!(north.l().abs() < 1e-16);
        assert_eq!(north.m(), 0.0);
    }

    #[test]
    fn test_direction_cosines_roundtrip() {
        let original = SphericalCoord::from_radians(-1.2, 0.7);
        let back = DirectionCosines::from_spherical(original).to_spherical();
        assert!((back.phi().radians() - -1.2).abs() < 1e-15);
        assert!((back.theta().radians() - 0.7).abs() < 1e-15);
    }

    #[test]
    fn test_face_coord() {
        let c = FaceCoord::new(CubeFace::East, 0.5, -0.25);
        assert_eq!(c.face(), CubeFace::East);
        assert_eq!(c.x(), 0.5);
        assert_eq!(c.y(), -0.25);
        assert_eq!(c.into_parts(), (CubeFace::East, 0.5, -0.25));
        assert!(c.is_on_face());
        assert!(!FaceCoord::new(CubeFace::Top, 1.0001, 0.0).is_on_face());
        assert!(!FaceCoord::new(CubeFace::Top, 0.0, f64::NAN).is_on_face());
    }
}
