use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use chirpy_core::Chirpy;
use chirpy_types::UserId;

use crate::error::{ServerError, ServerResult};

/// Authenticated caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Bearer(String),
    Anonymous,
}

impl Credentials {
    /// Read `Authorization: Bearer <token>` from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| Self::Bearer(token.trim().to_string()))
            .unwrap_or(Self::Anonymous)
    }

    /// The bearer token, or an authentication error when there is none.
    pub fn bearer(&self) -> ServerResult<&str> {
        match self {
            Self::Bearer(token) => Ok(token.as_str()),
            Self::Anonymous => Err(ServerError::AuthFailed("missing bearer token".into())),
        }
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity>;
}

/// Accepts unrevoked access tokens issued by the service's token signer.
pub struct TokenAuth {
    chirpy: Arc<Chirpy>,
}

impl TokenAuth {
    pub fn new(chirpy: Arc<Chirpy>) -> Self {
        Self { chirpy }
    }
}

#[async_trait]
impl AuthProvider for TokenAuth {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Identity> {
        let token = credentials.bearer()?;
        let user_id = self.chirpy.authenticate(token)?;
        Ok(Identity { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chirpy_core::{ChirpyError, Database, PasswordHasher, TokenService};

    fn chirpy() -> Arc<Chirpy> {
        Arc::new(
            Chirpy::new(Database::in_memory(), TokenService::new(b"auth-test").unwrap())
                .with_hasher(PasswordHasher::with_cost(4)),
        )
    }

    #[test]
    fn bearer_header_parsed() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(
            Credentials::from_headers(&headers),
            Credentials::Bearer("abc.def".into())
        );
    }

    #[test]
    fn missing_or_other_scheme_is_anonymous() {
        assert_eq!(Credentials::from_headers(&HeaderMap::new()), Credentials::Anonymous);
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic xyz"));
        assert_eq!(Credentials::from_headers(&headers), Credentials::Anonymous);
        assert!(Credentials::Anonymous.bearer().is_err());
    }

    #[tokio::test]
    async fn token_auth_accepts_access_token() {
        let app = chirpy();
        app.create_user("a@example.com", "pw").unwrap();
        let session = app.login("a@example.com", "pw").unwrap();

        let auth = TokenAuth::new(app);
        let id = auth
            .authenticate(&Credentials::Bearer(session.token))
            .await
            .unwrap();
        assert_eq!(id.user_id, session.user.id);
    }

    #[tokio::test]
    async fn token_auth_rejects_refresh_token() {
        let app = chirpy();
        app.create_user("a@example.com", "pw").unwrap();
        let session = app.login("a@example.com", "pw").unwrap();

        let auth = TokenAuth::new(app);
        let err = auth
            .authenticate(&Credentials::Bearer(session.refresh_token))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::Chirpy(ChirpyError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn token_auth_rejects_anonymous() {
        let auth = TokenAuth::new(chirpy());
        assert!(matches!(
            auth.authenticate(&Credentials::Anonymous).await,
            Err(ServerError::AuthFailed(_))
        ));
    }
}
