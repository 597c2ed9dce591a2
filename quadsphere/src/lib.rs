//! Quadrilateralized spherical cube projections.
//!
//! Maps points on the unit sphere to one of six cube faces and back, in two
//! flavours:
//!
//! - **Tangential** (`TSC`): a gnomonic projection from the sphere's centre
//!   onto the circumscribing cube. Exact, but not equal-area.
//! - **CSC** (COBE sky cube): the tangential projection followed by a
//!   polynomial distortion of each face that makes it approximately
//!   equal-area.
//!
//! Angles are in radians: φ is the longitude (any real, periodic) and θ the
//! latitude in [-π/2, π/2]. Face coordinates are in [-1, 1] with the origin at
//! the face centre. Faces are numbered 0 (top) through 5 (bottom); see
//! [`CubeFace`].
//!
//! ```
//! use quadsphere::{forward_csc, inverse_csc, CubeFace};
//!
//! let p = forward_csc(0.3, 0.2);
//! assert_eq!(p.face(), CubeFace::Front);
//!
//! let back = inverse_csc(p.face(), p.x(), p.y());
//! assert!((back.phi().radians() - 0.3).abs() < 1e-3);
//! assert!((back.theta().radians() - 0.2).abs() < 1e-3);
//! ```
//!
//! The free functions are the raw, total mappings. [`Projection::project`]
//! and [`Projection::deproject`] add input validation and report failures as
//! [`ProjectionError`].
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the coordinate and face types.
//! - `parallel`: evaluates [`closure::sweep`] rows on the rayon thread pool.
//! - `cli`: builds the `quadsphere` command-line tool.

pub mod closure;
pub mod coordinate;
pub mod csc;
pub mod error;
pub mod face;
pub mod projection;
pub mod tangential;

pub use closure::{ClosureConfig, ClosureStats};
pub use coordinate::{DirectionCosines, FaceCoord, SphericalCoord};
pub use csc::{forward_distort, inverse_distort};
pub use error::{ProjectionError, ProjectionResult};
pub use face::CubeFace;
pub use projection::Projection;

/// Tangential forward projection; see [`tangential::forward`].
#[inline]
pub fn forward_tangential(phi: f64, theta: f64) -> FaceCoord {
    tangential::forward(phi, theta)
}

/// Tangential inverse projection; see [`tangential::inverse`].
#[inline]
pub fn inverse_tangential(face: CubeFace, chi: f64, psi: f64) -> SphericalCoord {
    tangential::inverse(face, chi, psi)
}

/// CSC forward projection; see [`csc::forward`].
#[inline]
pub fn forward_csc(phi: f64, theta: f64) -> FaceCoord {
    csc::forward(phi, theta)
}

/// CSC inverse projection; see [`csc::inverse`].
#[inline]
pub fn inverse_csc(face: CubeFace, x: f64, y: f64) -> SphericalCoord {
    csc::inverse(face, x, y)
}
