use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("chirp is too long: {length} characters (max {max})")]
    BodyTooLong { length: usize, max: usize },

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}
