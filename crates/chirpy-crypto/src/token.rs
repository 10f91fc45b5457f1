use chirpy_types::UserId;
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::revocation::RevocationList;

/// Trust scope of a bearer token, carried in the issuer claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenScope {
    /// Short-lived token authorizing API calls.
    Access,
    /// Long-lived token that can only be exchanged for access tokens.
    Refresh,
}

impl TokenScope {
    /// Issuer claim value for this scope.
    pub const fn issuer(&self) -> &'static str {
        match self {
            Self::Access => "chirpy-access",
            Self::Refresh => "chirpy-refresh",
        }
    }

    /// Validity period from issuance.
    pub fn lifetime(&self) -> Duration {
        match self {
            Self::Access => Duration::hours(1),
            Self::Refresh => Duration::days(60),
        }
    }

    /// Scope named by an issuer claim, if any.
    pub fn from_issuer(issuer: &str) -> Option<Self> {
        match issuer {
            "chirpy-access" => Some(Self::Access),
            "chirpy-refresh" => Some(Self::Refresh),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Access => write!(f, "access"),
            Self::Refresh => write!(f, "refresh"),
        }
    }
}

/// Registered claim set carried by every token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer; encodes the [`TokenScope`].
    pub iss: String,
    /// Subject; the user id in decimal form.
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    fn new(user: UserId, scope: TokenScope, now: DateTime<Utc>) -> Self {
        Self {
            iss: scope.issuer().to_string(),
            sub: user.to_string(),
            iat: now.timestamp(),
            exp: (now + scope.lifetime()).timestamp(),
        }
    }

    pub fn scope(&self) -> Option<TokenScope> {
        TokenScope::from_issuer(&self.iss)
    }

    /// The subject parsed back into a user id.
    pub fn user_id(&self) -> Result<UserId, TokenError> {
        self.sub
            .parse()
            .map_err(|_| TokenError::Invalid(format!("subject is not a user id: {}", self.sub)))
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// Issues, parses and verifies HS256 bearer tokens under one shared secret,
/// and tracks revoked tokens.
///
/// Lifecycle of a token: issued, then valid until it expires or is revoked.
/// Expiry is checked on every parse with zero leeway.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    revoked: RevocationList,
}

impl TokenService {
    /// Create a service signing with `secret`. The secret must not be empty.
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            revoked: RevocationList::new(),
        })
    }

    /// Issue a token for `user` in `scope`, valid from now.
    pub fn issue(&self, user: UserId, scope: TokenScope) -> Result<String, TokenError> {
        self.issue_at(user, scope, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    ///
    /// `now` is truncated to whole seconds, so repeated calls within one
    /// second for the same user and scope return identical tokens.
    pub fn issue_at(
        &self,
        user: UserId,
        scope: TokenScope,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(user, scope, now);
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// One-hour access token.
    pub fn issue_access(&self, user: UserId) -> Result<String, TokenError> {
        self.issue(user, TokenScope::Access)
    }

    /// Sixty-day refresh token.
    pub fn issue_refresh(&self, user: UserId) -> Result<String, TokenError> {
        self.issue(user, TokenScope::Refresh)
    }

    /// Check signature, structure and expiry, returning the claims.
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }

    /// Parse `token`, require it to belong to `scope`, and reject it if it
    /// has been revoked. Returns the subject.
    pub fn verify(&self, token: &str, scope: TokenScope) -> Result<UserId, TokenError> {
        let claims = self.parse(token)?;
        if claims.iss != scope.issuer() {
            return Err(TokenError::Invalid(format!(
                "expected issuer {}, got {}",
                scope.issuer(),
                claims.iss
            )));
        }
        if self.revoked.is_revoked(token) {
            return Err(TokenError::Revoked);
        }
        claims.user_id()
    }

    /// Revoke `token`. Idempotent and issuer-agnostic.
    pub fn revoke(&self, token: &str) {
        self.revoked.revoke(token);
        tracing::debug!(revoked = self.revoked.len(), "token revoked");
    }

    pub fn revocations(&self) -> &RevocationList {
        &self.revoked
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .field("revoked", &self.revoked)
            .finish()
    }
}

/// Errors from token operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid token: {0}")]
    Invalid(String),
    #[error("token has been revoked")]
    Revoked,
    #[error("token signing failed: {0}")]
    Signing(String),
    #[error("token secret must not be empty")]
    EmptySecret,
}
