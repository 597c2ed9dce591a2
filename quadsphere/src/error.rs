use thiserror::Error;

pub type ProjectionResult<T> = Result<T, ProjectionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("Invalid cube face {value}: expected 0 (top) through 5 (bottom)")]
    InvalidFace { value: i64 },

    #[error("Unknown cube face name: {name}")]
    UnknownFaceName { name: String },

    #[error("Unsupported projection: {code}")]
    UnsupportedProjection { code: String },

    #[error("Projection singularity: {message}")]
    Singularity { message: String },

    #[error("Face coordinate out of bounds: {message}")]
    OutOfBounds { message: String },

    #[error("Invalid closure parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Invalid spherical coordinate: {source}")]
    CoordinateError {
        #[from]
        source: quadsphere_core::CoreError,
    },
}

impl ProjectionError {
    pub fn invalid_face(value: impl Into<i64>) -> Self {
        Self::InvalidFace {
            value: value.into(),
        }
    }

    pub fn unknown_face_name(name: impl Into<String>) -> Self {
        Self::UnknownFaceName { name: name.into() }
    }

    pub fn unsupported_projection(code: impl Into<String>) -> Self {
        Self::UnsupportedProjection { code: code.into() }
    }

    pub fn singularity(message: impl Into<String>) -> Self {
        Self::Singularity {
            message: message.into(),
        }
    }

    pub fn out_of_bounds(message: impl Into<String>) -> Self {
        Self::OutOfBounds {
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}
