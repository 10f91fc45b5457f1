use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chirpy_core::ChirpyError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Chirpy(#[from] ChirpyError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("store error: {0}")]
    Store(#[from] chirpy_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Chirpy(e) => match e {
                ChirpyError::Validation(_) => StatusCode::BAD_REQUEST,
                ChirpyError::NotFound(_) => StatusCode::NOT_FOUND,
                ChirpyError::Conflict(_) => StatusCode::CONFLICT,
                ChirpyError::Unauthorized(_)
                | ChirpyError::InvalidToken(_)
                | ChirpyError::Revoked => StatusCode::UNAUTHORIZED,
                ChirpyError::Store(_) | ChirpyError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::AuthFailed(_) => StatusCode::UNAUTHORIZED,
            Self::Store(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "responding with {}", status);
        } else {
            tracing::debug!(error = %self, "responding with {}", status);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
