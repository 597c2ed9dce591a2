use std::fmt;
use std::str::FromStr;

use log::trace;
use quadsphere_core::angle::{validate_finite, validate_latitude};

use crate::coordinate::{FaceCoord, SphericalCoord};
use crate::csc;
use crate::error::{ProjectionError, ProjectionResult};
use crate::face::CubeFace;
use crate::tangential;

/// The two cube projections.
///
/// [`forward`](Projection::forward) and [`inverse`](Projection::inverse) are
/// the raw mappings: total, never failing, and garbage-in garbage-out.
/// [`project`](Projection::project) and [`deproject`](Projection::deproject)
/// validate their input first and report problems as [`ProjectionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Projection {
    /// Gnomonic projection onto the cube faces (FITS code `TSC`).
    Tangential,
    /// COBE quadrilateralized spherical cube (FITS code `CSC`).
    #[default]
    Csc,
}

impl Projection {
    pub const ALL: [Projection; 2] = [Projection::Tangential, Projection::Csc];

    pub fn code(self) -> &'static str {
        match self {
            Self::Tangential => "TSC",
            Self::Csc => "CSC",
        }
    }

    pub fn forward(self, phi: f64, theta: f64) -> FaceCoord {
        match self {
            Self::Tangential => tangential::forward(phi, theta),
            Self::Csc => csc::forward(phi, theta),
        }
    }

    pub fn inverse(self, face: CubeFace, x: f64, y: f64) -> SphericalCoord {
        match self {
            Self::Tangential => tangential::inverse(face, x, y),
            Self::Csc => csc::inverse(face, x, y),
        }
    }

    /// Validated forward projection.
    ///
    /// φ must be finite (any value, it is periodic); θ must be finite and in
    /// [-π/2, π/2].
    pub fn project(self, coord: SphericalCoord) -> ProjectionResult<FaceCoord> {
        let phi = validate_finite(coord.phi(), "project")?;
        let theta = validate_latitude(coord.theta())?;

        let axes = tangential::face_axes(phi.radians(), theta.radians());
        // A validated θ keeps ζ >= 1/√3 on the selected face, so this only
        // fires if the face selection rule is changed.
        if axes.zeta <= 0.0 {
            trace!(
                "{} projection: zeta={} on face {} for phi={} theta={}",
                self.code(),
                axes.zeta,
                axes.face,
                phi.radians(),
                theta.radians()
            );
            return Err(ProjectionError::singularity(format!(
                "{} projection: point on back of cube face {}",
                self.code(),
                axes.face
            )));
        }

        Ok(self.forward(phi.radians(), theta.radians()))
    }

    /// Validated inverse projection.
    ///
    /// Both face coordinates must be finite and lie in [-1, 1]. The returned
    /// φ is wrapped to [-π, π), so the TOP centre and the BACK face's
    /// antimeridian come back as -π rather than π.
    pub fn deproject(self, coord: FaceCoord) -> ProjectionResult<SphericalCoord> {
        if !coord.is_on_face() {
            trace!(
                "{} deprojection rejected x={} y={} on face {}",
                self.code(),
                coord.x(),
                coord.y(),
                coord.face()
            );
            return Err(ProjectionError::out_of_bounds(format!(
                "{} deprojection: ({}, {}) outside [-1, 1] on face {}",
                self.code(),
                coord.x(),
                coord.y(),
                coord.face()
            )));
        }

        let s = self.inverse(coord.face(), coord.x(), coord.y());
        Ok(SphericalCoord::new(s.phi().wrapped(), s.theta()))
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Projection {
    type Err = ProjectionError;

    /// Accepts the FITS codes `TSC`/`CSC` or `tangential`, case-insensitive.
    fn from_str(s: &str) -> ProjectionResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TSC" | "TANGENTIAL" => Ok(Self::Tangential),
            "CSC" => Ok(Self::Csc),
            _ => Err(ProjectionError::unsupported_projection(s.trim())),
        }
    }
}
