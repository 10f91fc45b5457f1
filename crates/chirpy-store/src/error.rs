use std::path::PathBuf;

use chirpy_types::{ChirpId, TypeError, UserId};

/// Errors from dataset store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No chirp with this id.
    #[error("chirp not found: {0}")]
    ChirpNotFound(ChirpId),

    /// No user with this id.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// No user registered under this email.
    #[error("no user registered with that email")]
    EmailNotFound,

    /// Another user already holds this email.
    #[error("email already registered")]
    EmailTaken,

    /// Caller-supplied data violates a constraint (e.g. chirp too long).
    #[error("validation failed: {0}")]
    Validation(#[from] TypeError),

    /// The dataset could not be encoded or decoded.
    #[error("serialization error in {}: {reason}", path.display())]
    Serialization { path: PathBuf, reason: String },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this is a disk or encoding failure rather than a caller error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Serialization { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
