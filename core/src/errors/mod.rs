//! Domain-specific error types and error handling.

mod types;

pub use types::TokenError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Cache unavailable: {message}")]
    CacheUnavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Whether a caller may reasonably retry the failed operation.
    ///
    /// Only infrastructure failures qualify; token validation failures
    /// are final.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::CacheUnavailable { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
