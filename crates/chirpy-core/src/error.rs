use chirpy_crypto::{PasswordError, TokenError};
use chirpy_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChirpyError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token has been revoked")]
    Revoked,

    #[error("store error: {0}")]
    Store(StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ChirpyError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ChirpNotFound(_) | StoreError::UserNotFound(_) | StoreError::EmailNotFound => {
                Self::NotFound(e.to_string())
            }
            StoreError::EmailTaken => Self::Conflict(e.to_string()),
            StoreError::Validation(inner) => Self::Validation(inner.to_string()),
            StoreError::Serialization { .. } | StoreError::Io(_) => Self::Store(e),
        }
    }
}

impl From<TokenError> for ChirpyError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Invalid(reason) => Self::InvalidToken(reason),
            TokenError::Revoked => Self::Revoked,
            TokenError::Signing(_) | TokenError::EmptySecret => Self::Internal(e.to_string()),
        }
    }
}

impl From<PasswordError> for ChirpyError {
    fn from(e: PasswordError) -> Self {
        Self::Internal(e.to_string())
    }
}

pub type ChirpyResult<T> = Result<T, ChirpyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chirpy_types::{ChirpId, TypeError};

    #[test]
    fn store_errors_map_to_taxonomy() {
        assert!(matches!(
            ChirpyError::from(StoreError::ChirpNotFound(ChirpId::new(1))),
            ChirpyError::NotFound(_)
        ));
        assert!(matches!(
            ChirpyError::from(StoreError::EmailTaken),
            ChirpyError::Conflict(_)
        ));
        assert!(matches!(
            ChirpyError::from(StoreError::Validation(TypeError::BodyTooLong { length: 141, max: 140 })),
            ChirpyError::Validation(_)
        ));
        assert!(matches!(
            ChirpyError::from(StoreError::Io(std::io::Error::other("disk"))),
            ChirpyError::Store(_)
        ));
    }

    #[test]
    fn token_errors_map_to_taxonomy() {
        assert!(matches!(
            ChirpyError::from(TokenError::Invalid("x".into())),
            ChirpyError::InvalidToken(_)
        ));
        assert!(matches!(ChirpyError::from(TokenError::Revoked), ChirpyError::Revoked));
        assert!(matches!(
            ChirpyError::from(TokenError::Signing("x".into())),
            ChirpyError::Internal(_)
        ));
    }
}
