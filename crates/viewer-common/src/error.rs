//! Error types for the slice viewer.

use thiserror::Error;

/// Result type alias using ViewerError.
pub type ViewerResult<T> = Result<T, ViewerError>;

/// Primary error type for layer composition and slice broadcasting.
#[derive(Debug, Error)]
pub enum ViewerError {
    // === Input Data Errors ===
    #[error("Malformed scalar field: {0}")]
    MalformedField(String),

    // === UI Mode Errors ===
    #[error("Unsupported mask format: {0}")]
    UnsupportedMaskFormat(String),

    #[error("Unsupported mask type: {0}")]
    UnsupportedMaskType(String),

    #[error("Unknown interaction mode: {0}")]
    UnknownMode(String),

    // === Slice Collection Errors ===
    #[error("Duplicate slice identity: {0}")]
    DuplicateSliceIdentity(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },
}

impl ViewerError {
    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewerError::MalformedField(_) => "MalformedField",
            ViewerError::UnsupportedMaskFormat(_) => "UnsupportedMaskFormat",
            ViewerError::UnsupportedMaskType(_) => "UnsupportedMaskType",
            ViewerError::UnknownMode(_) => "UnknownMode",
            ViewerError::DuplicateSliceIdentity(_) => "DuplicateSliceIdentity",
            ViewerError::InvalidParameter { .. } => "InvalidParameterValue",
        }
    }

    /// Get the HTTP status code for this error.
    ///
    /// Every variant describes a request the caller built wrong, so all of
    /// them are client errors.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ViewerError::MalformedField(_)
            | ViewerError::UnsupportedMaskFormat(_)
            | ViewerError::UnsupportedMaskType(_)
            | ViewerError::UnknownMode(_)
            | ViewerError::DuplicateSliceIdentity(_)
            | ViewerError::InvalidParameter { .. } => 400,
        }
    }

    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        ViewerError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::MalformedField(err.to_string())
    }
}
