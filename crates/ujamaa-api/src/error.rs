use thiserror::Error;

use ujamaa_shared::AuthError;
use ujamaa_store::StoreError;

/// Errors surfaced by platform operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The acting user does not exist or failed authentication.
    #[error("Unauthorized")]
    Unauthorized,

    /// The acting user exists but may not perform this operation.
    #[error("Access denied")]
    Forbidden,

    /// A referenced entity does not exist.
    #[error("Not found")]
    NotFound,

    /// The operation would violate a uniqueness constraint.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A supplied value is out of range or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Credential handling failure.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
