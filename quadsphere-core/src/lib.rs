//! Shared building blocks for the quadrilateralized spherical cube projections.
//!
//! `quadsphere-core` holds the pieces that are not specific to any one cube
//! projection: a typed [`Angle`], longitude wrapping, latitude
//! validation, numeric constants, the [`CoreError`] type, and float
//! comparison helpers for tests.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`], longitude wrapping, validation |
//! | [`constants`] | π fractions |
//! | [`errors`] | [`CoreError`], [`CoreResult`], [`MathErrorKind`] |
//! | [`math`] | `libm`-backed float helpers |
//! | [`test_helpers`] | ULP and tolerance assertions, [`assert_ulp_lt!`] |
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Angle`] (as radians).

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod test_helpers;

pub use angle::Angle;
pub use errors::{CoreError, CoreResult, MathErrorKind};
