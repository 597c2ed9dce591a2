//! Tangential spherical cube (TSC) projection.
//!
//! Points on the sphere are projected from the sphere's centre onto the six
//! faces of the circumscribing cube, so each face is a gnomonic projection of
//! one sixth of the sphere. The CSC projection is a curvilinear distortion of
//! this mapping, which is why it lives in its own module.
//!
//! Face coordinates (χ, ψ) both lie in [-1, 1]. Points on cube edges and
//! corners are shared by two or three faces; the forward projection picks one
//! of them deterministically (see [`select_face`]) and the inverse is exact
//! for any of them, so round trips are guaranteed only in face interiors.

use crate::coordinate::{DirectionCosines, FaceCoord, SphericalCoord};
use crate::face::CubeFace;

/// A direction expressed in the axes of the face it was assigned to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FaceAxes {
    pub face: CubeFace,
    pub xi: f64,
    pub eta: f64,
    pub zeta: f64,
}

/// Picks the face whose outward normal is closest to `dir`.
///
/// Candidates are scanned in [`CubeFace::ALL`] order and only a strictly
/// larger normal component replaces the current best, so ties on edges and
/// corners go to the earliest face: TOP, FRONT, EAST, BACK, WEST, BOTTOM.
pub fn select_face(dir: DirectionCosines) -> CubeFace {
    let mut best_face = CubeFace::Top;
    let mut best = CubeFace::Top.normal_component(dir);

    for face in &CubeFace::ALL[1..] {
        let value = face.normal_component(dir);
        if value > best {
            best_face = *face;
            best = value;
        }
    }

    best_face
}

pub(crate) fn face_axes(phi: f64, theta: f64) -> FaceAxes {
    let dir = DirectionCosines::from_radians(phi, theta);
    let face = select_face(dir);
    let (xi, eta, zeta) = face.to_face_axes(dir);
    FaceAxes {
        face,
        xi,
        eta,
        zeta,
    }
}

/// Projects (φ, θ) in radians onto a cube face, giving gnomonic (χ, ψ).
///
/// φ may be any real (it is only used through sin/cos); θ should lie in
/// [-π/2, π/2]. The selected face's ζ is never zero for valid input, so the
/// divisions are not guarded here; [`Projection::project`] checks it.
///
/// [`Projection::project`]: crate::Projection::project
///
/// ```
/// use quadsphere::{tangential, CubeFace};
/// use std::f64::consts::FRAC_PI_2;
///
/// let p = tangential::forward(0.0, FRAC_PI_2);
/// assert_eq!(p.face(), CubeFace::Top);
/// assert!(p.x().abs() < 1e-15 && p.y().abs() < 1e-15);
/// ```
pub fn forward(phi: f64, theta: f64) -> FaceCoord {
    let axes = face_axes(phi, theta);
    FaceCoord::new(axes.face, axes.xi / axes.zeta, axes.eta / axes.zeta)
}

/// Maps gnomonic (χ, ψ) on `face` back to (φ, θ) in radians.
///
/// Returns φ in [-π, π] and θ in [-π/2, π/2]. At the TOP and BOTTOM face
/// centres φ is meaningless; the algebra happens to yield π for TOP and 0 for
/// BOTTOM, which callers should not rely on.
pub fn inverse(face: CubeFace, chi: f64, psi: f64) -> SphericalCoord {
    let zeta = 1.0 / (1.0 + chi * chi + psi * psi).sqrt();
    let xi = chi * zeta;
    let eta = psi * zeta;

    face.from_face_axes(xi, eta, zeta).to_spherical()
}
