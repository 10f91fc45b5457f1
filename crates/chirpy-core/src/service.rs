use chirpy_crypto::{PasswordHasher, TokenScope, TokenService};
use chirpy_store::{Database, StoreError};
use chirpy_types::{Chirp, ChirpId, UserId, UserProfile};
use tracing::{info, warn};

use crate::error::{ChirpyError, ChirpyResult};
use crate::session::LoginSession;

/// The Chirpy service object.
///
/// Constructed once at startup and shared (typically behind an `Arc`) with
/// every request path. All state it touches is owned here: the dataset
/// store, the token service with its revocation list, and the hasher.
pub struct Chirpy {
    db: Database,
    tokens: TokenService,
    hasher: PasswordHasher,
}

impl Chirpy {
    pub fn new(db: Database, tokens: TokenService) -> Self {
        Self {
            db,
            tokens,
            hasher: PasswordHasher::default(),
        }
    }

    /// Replace the password hasher (e.g. a lower cost in tests).
    pub fn with_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.hasher = hasher;
        self
    }

    // ---- Chirps ----

    pub fn create_chirp(&self, body: &str) -> ChirpyResult<Chirp> {
        Ok(self.db.create_chirp(body)?)
    }

    pub fn list_chirps(&self) -> ChirpyResult<Vec<Chirp>> {
        Ok(self.db.list_chirps()?)
    }

    pub fn get_chirp(&self, id: ChirpId) -> ChirpyResult<Chirp> {
        Ok(self.db.get_chirp(id)?)
    }

    // ---- Accounts ----

    /// Register a user. The password must not be empty.
    pub fn create_user(&self, email: &str, password: &str) -> ChirpyResult<UserProfile> {
        let hash = self.hash_password(password)?;
        let user = self.db.create_user(email, &hash)?;
        info!(id = %user.id, "user registered");
        Ok(user.profile())
    }

    /// Replace the email and password of user `id`.
    pub fn update_user(&self, id: UserId, email: &str, password: &str) -> ChirpyResult<UserProfile> {
        let hash = self.hash_password(password)?;
        let user = self.db.update_user(id, email, &hash)?;
        Ok(user.profile())
    }

    fn hash_password(&self, password: &str) -> ChirpyResult<String> {
        if password.is_empty() {
            return Err(ChirpyError::Validation("password must not be empty".into()));
        }
        Ok(self.hasher.hash(password)?)
    }

    // ---- Sessions ----

    /// Check credentials and issue an access/refresh token pair.
    ///
    /// An unknown email and a wrong password both yield `Unauthorized`.
    pub fn login(&self, email: &str, password: &str) -> ChirpyResult<LoginSession> {
        let id = match self.db.find_user_id_by_email(email) {
            Ok(id) => id,
            Err(StoreError::EmailNotFound) => {
                warn!("login attempt for unregistered email");
                return Err(ChirpyError::Unauthorized("email or password is incorrect".into()));
            }
            Err(e) => return Err(e.into()),
        };
        let user = self.db.get_user(id)?;
        if !self.hasher.verify(password, &user.hashed_password)? {
            warn!(id = %id, "login attempt with wrong password");
            return Err(ChirpyError::Unauthorized("email or password is incorrect".into()));
        }

        let token = self.tokens.issue_access(id)?;
        let refresh_token = self.tokens.issue_refresh(id)?;
        info!(id = %id, "user logged in");
        Ok(LoginSession {
            user: user.profile(),
            token,
            refresh_token,
        })
    }

    /// Exchange a valid, unrevoked refresh token for a new access token.
    pub fn refresh(&self, refresh_token: &str) -> ChirpyResult<String> {
        let id = self.tokens.verify(refresh_token, TokenScope::Refresh)?;
        Ok(self.tokens.issue_access(id)?)
    }

    /// Revoke a token. Never fails; revoking twice is harmless.
    pub fn revoke(&self, token: &str) {
        self.tokens.revoke(token);
    }

    /// Resolve an access token to the user it was issued for.
    pub fn authenticate(&self, access_token: &str) -> ChirpyResult<UserId> {
        Ok(self.tokens.verify(access_token, TokenScope::Access)?)
    }

    // ---- Administration ----

    /// Replace the dataset with an empty one and persist it.
    pub fn reset(&self) -> ChirpyResult<()> {
        Ok(self.db.reset()?)
    }

    // ---- Accessors ----

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}

impl std::fmt::Debug for Chirpy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chirpy")
            .field("db", &self.db)
            .field("tokens", &self.tokens)
            .field("hasher", &self.hasher)
            .finish()
    }
}
