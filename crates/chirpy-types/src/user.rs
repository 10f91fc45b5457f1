use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// An account record as persisted in the dataset.
///
/// The password hash is opaque to this crate. It is serialized only into the
/// dataset file; API responses use [`UserProfile`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub hashed_password: String,
}

impl User {
    pub fn new(id: UserId, email: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            hashed_password: hashed_password.into(),
        }
    }

    /// Public view without the password hash.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("hashed_password", &"<redacted>")
            .finish()
    }
}

/// Public view of a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        user.profile()
    }
}
