//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`prwatch_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: prwatch_ghapi_interface::ApiError,
    },
}

impl From<prwatch_ghapi_interface::ApiError> for DomainError {
    fn from(e: prwatch_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
