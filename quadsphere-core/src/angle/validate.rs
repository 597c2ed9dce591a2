use super::core::Angle;
use crate::constants::HALF_PI;
use crate::{CoreError, CoreResult, MathErrorKind};

/// Rejects NaN and infinite angles.
pub fn validate_finite(angle: Angle, operation: &str) -> CoreResult<Angle> {
    if angle.radians().is_finite() {
        return Ok(angle);
    }

    Err(CoreError::math_error(
        operation,
        MathErrorKind::NotFinite,
        "angle not finite",
    ))
}

/// Validates a spherical latitude θ against [-90°, +90°].
pub fn validate_latitude(angle: Angle) -> CoreResult<Angle> {
    let angle = validate_finite(angle, "validate_latitude")?;

    if (-HALF_PI..=HALF_PI).contains(&angle.radians()) {
        return Ok(angle);
    }

    Err(CoreError::math_error(
        "validate_latitude",
        MathErrorKind::OutOfRange,
        &format!("Lat {:.2}° out of range [-90°, +90°]", angle.degrees()),
    ))
}
