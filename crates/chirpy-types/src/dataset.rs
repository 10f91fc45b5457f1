use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::chirp::Chirp;
use crate::id::{ChirpId, UserId};
use crate::user::User;

/// The whole persisted state: every chirp and every user.
///
/// Serialized as `{"chirps": {"<id>": ...}, "users": {"<id>": ...}}`. The maps
/// have no meaningful iteration order; use [`Dataset::sorted_chirps`] when an
/// ordered view is needed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub chirps: HashMap<ChirpId, Chirp>,
    #[serde(default)]
    pub users: HashMap<UserId, User>,
}

impl Dataset {
    /// An empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier the next created chirp receives.
    pub fn next_chirp_id(&self) -> ChirpId {
        ChirpId::after(self.chirps.len())
    }

    /// Identifier the next created user receives.
    pub fn next_user_id(&self) -> UserId {
        UserId::after(self.users.len())
    }

    /// All chirps, ascending by id.
    pub fn sorted_chirps(&self) -> Vec<Chirp> {
        let mut chirps: Vec<Chirp> = self.chirps.values().cloned().collect();
        chirps.sort_by_key(|c| c.id);
        chirps
    }

    /// The user registered under `email` (exact, case-sensitive match).
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|u| u.email == email)
    }

    pub fn is_empty(&self) -> bool {
        self.chirps.is_empty() && self.users.is_empty()
    }
}
