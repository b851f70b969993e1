//! Error kinds shared by the codecs and the synthesizers.

use thiserror::Error;

/// Errors raised by synthesis and by the CSV / *RUC codecs.
///
/// Analysis never fails on a well-formed grid, so it has no variant here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RucError {
    /// Out-of-range or non-physical synthesis input, rejected before any computation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed CSV or *RUC text.
    #[error("format error: {0}")]
    Format(String),

    /// Well-formed *RUC text describing a model this crate does not support (strict mode only).
    #[error("validation error: {0}")]
    Validation(String),
}

impl RucError {
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, RucError::InvalidParameter(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, RucError::Format(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RucError::Validation(_))
    }
}
