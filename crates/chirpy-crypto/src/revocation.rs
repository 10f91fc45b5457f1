use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

/// Set of revoked token strings, each with the time it was first revoked.
///
/// Keyed by the raw token string so a user may hold several refresh tokens
/// that are revoked independently. Lives for the process lifetime only.
///
/// Claims carry whole seconds and no unique id, so two tokens of the same
/// scope issued to one user within the same second are the same string and
/// share one entry here: revoking either revokes both.
#[derive(Default)]
pub struct RevocationList {
    revoked: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl RevocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `token` as revoked at `at`. Revoking an already revoked token
    /// keeps the original timestamp.
    pub fn revoke_at(&self, token: &str, at: DateTime<Utc>) {
        let mut revoked = self.revoked.write().expect("lock poisoned");
        revoked.entry(token.to_string()).or_insert(at);
    }

    /// Record `token` as revoked now.
    pub fn revoke(&self, token: &str) {
        self.revoke_at(token, Utc::now());
    }

    pub fn is_revoked(&self, token: &str) -> bool {
        self.revoked.read().expect("lock poisoned").contains_key(token)
    }

    /// When `token` was revoked, if it was.
    pub fn revoked_at(&self, token: &str) -> Option<DateTime<Utc>> {
        self.revoked.read().expect("lock poisoned").get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.revoked.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for RevocationList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevocationList")
            .field("revoked_count", &self.len())
            .finish()
    }
}
