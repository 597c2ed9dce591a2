//! Angle type, longitude wrapping and validation.
//!
//! [`Angle`] stores radians and converts to degrees on demand. The
//! [`normalize`] helper wraps longitudes; the [`validate`] helpers reject
//! values a projection cannot accept.

mod core;
pub mod normalize;
pub mod validate;

pub use self::core::Angle;
pub use normalize::wrap_pm_pi;
pub use validate::{validate_finite, validate_latitude};
