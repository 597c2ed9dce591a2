//! The six faces of the projection cube.
//!
//! Picture a unit sphere inscribed in a cube of side 2, centred at the origin,
//! with each coordinate axis piercing the centres of two opposite faces. The
//! faces are numbered so that the integer identifiers match the COBE sky cube
//! convention:
//!
//! | Id | Face | Centre (φ, θ) |
//! |----|------|---------------|
//! | 0 | [`Top`](CubeFace::Top) | θ = +90° (north pole) |
//! | 1 | [`Front`](CubeFace::Front) | φ = 0°, θ = 0° |
//! | 2 | [`East`](CubeFace::East) | φ = 90°, θ = 0° |
//! | 3 | [`Back`](CubeFace::Back) | φ = 180°, θ = 0° |
//! | 4 | [`West`](CubeFace::West) | φ = -90°, θ = 0° |
//! | 5 | [`Bottom`](CubeFace::Bottom) | θ = -90° (south pole) |
//!
//! Each face owns a fixed re-axing of the direction cosines (l, m, n) into
//! face-local (ξ, η, ζ), where ζ runs along the face normal and ξ, η span the
//! face plane. [`CubeFace::to_face_axes`] and [`CubeFace::from_face_axes`] are
//! exact inverses of one another.

use std::fmt;
use std::str::FromStr;

use quadsphere_core::constants::{HALF_PI, PI};

use crate::coordinate::{DirectionCosines, SphericalCoord};
use crate::error::{ProjectionError, ProjectionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CubeFace {
    Top = 0,
    Front = 1,
    East = 2,
    Back = 3,
    West = 4,
    Bottom = 5,
}

impl CubeFace {
    /// All faces, in face-selection order.
    ///
    /// This is also the tie-break order: when a direction is equally close to
    /// several face normals, the earliest face in this list wins.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Top,
        CubeFace::Front,
        CubeFace::East,
        CubeFace::Back,
        CubeFace::West,
        CubeFace::Bottom,
    ];

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            CubeFace::Top => "top",
            CubeFace::Front => "front",
            CubeFace::East => "east",
            CubeFace::Back => "back",
            CubeFace::West => "west",
            CubeFace::Bottom => "bottom",
        }
    }

    /// The point on the sphere that projects to the centre of this face.
    pub fn center(self) -> SphericalCoord {
        let (phi, theta) = match self {
            CubeFace::Top => (0.0, HALF_PI),
            CubeFace::Front => (0.0, 0.0),
            CubeFace::East => (HALF_PI, 0.0),
            CubeFace::Back => (PI, 0.0),
            CubeFace::West => (-HALF_PI, 0.0),
            CubeFace::Bottom => (0.0, -HALF_PI),
        };
        SphericalCoord::from_radians(phi, theta)
    }

    /// Component of `dir` along this face's outward normal.
    ///
    /// Face selection picks the face with the largest value.
    #[inline]
    pub fn normal_component(self, dir: DirectionCosines) -> f64 {
        let (l, m, n) = dir.components();
        match self {
            CubeFace::Top => n,
            CubeFace::Front => l,
            CubeFace::East => m,
            CubeFace::Back => -l,
            CubeFace::West => -m,
            CubeFace::Bottom => -n,
        }
    }

    /// Re-axes direction cosines into face-local `(ξ, η, ζ)`.
    #[inline]
    pub fn to_face_axes(self, dir: DirectionCosines) -> (f64, f64, f64) {
        let (l, m, n) = dir.components();
        match self {
            CubeFace::Top => (m, -l, n),
            CubeFace::Front => (m, n, l),
            CubeFace::East => (-l, n, m),
            CubeFace::Back => (-m, n, -l),
            CubeFace::West => (l, n, -m),
            CubeFace::Bottom => (m, l, -n),
        }
    }

    /// Recovers direction cosines from face-local `(ξ, η, ζ)`.
    #[inline]
    pub fn from_face_axes(self, xi: f64, eta: f64, zeta: f64) -> DirectionCosines {
        let (l, m, n) = match self {
            CubeFace::Top => (-eta, xi, zeta),
            CubeFace::Front => (zeta, xi, eta),
            CubeFace::East => (-xi, zeta, eta),
            CubeFace::Back => (-zeta, -xi, eta),
            CubeFace::West => (xi, -zeta, eta),
            CubeFace::Bottom => (eta, xi, -zeta),
        };
        DirectionCosines::new(l, m, n)
    }
}

impl TryFrom<u8> for CubeFace {
    type Error = ProjectionError;

    fn try_from(value: u8) -> ProjectionResult<Self> {
        Self::from_index(value).ok_or_else(|| ProjectionError::invalid_face(value))
    }
}

impl TryFrom<i64> for CubeFace {
    type Error = ProjectionError;

    fn try_from(value: i64) -> ProjectionResult<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_index)
            .ok_or_else(|| ProjectionError::invalid_face(value))
    }
}

impl From<CubeFace> for u8 {
    fn from(face: CubeFace) -> u8 {
        face.index()
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CubeFace {
    type Err = ProjectionError;

    /// Accepts a face name (case-insensitive) or a numeric id 0–5.
    fn from_str(s: &str) -> ProjectionResult<Self> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<i64>() {
            return Self::try_from(id);
        }
        Self::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProjectionError::unknown_face_name(trimmed))
    }
}
