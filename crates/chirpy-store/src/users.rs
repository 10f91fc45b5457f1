//! User repository.

use chirpy_types::{User, UserId};
use tracing::debug;

use crate::database::Database;
use crate::error::{StoreError, StoreResult};

impl Database {
    /// Register a new user under the next id.
    ///
    /// Emails are compared exactly (case-sensitive).
    pub fn create_user(&self, email: &str, hashed_password: &str) -> StoreResult<User> {
        let user = self.mutate(|data| {
            if data.user_by_email(email).is_some() {
                return Err(StoreError::EmailTaken);
            }
            let user = User::new(data.next_user_id(), email, hashed_password);
            data.users.insert(user.id, user.clone());
            Ok(user)
        })?;
        debug!(id = %user.id, "user created");
        Ok(user)
    }

    /// Replace the email and password hash of user `id` in place.
    ///
    /// Fails with `EmailTaken` if a different user already holds `email`.
    pub fn update_user(&self, id: UserId, email: &str, hashed_password: &str) -> StoreResult<User> {
        let user = self.mutate(|data| {
            if !data.users.contains_key(&id) {
                return Err(StoreError::UserNotFound(id));
            }
            if data.user_by_email(email).is_some_and(|other| other.id != id) {
                return Err(StoreError::EmailTaken);
            }
            let user = User::new(id, email, hashed_password);
            data.users.insert(id, user.clone());
            Ok(user)
        })?;
        debug!(id = %user.id, "user updated");
        Ok(user)
    }

    pub fn find_user_id_by_email(&self, email: &str) -> StoreResult<UserId> {
        self.read()
            .user_by_email(email)
            .map(|u| u.id)
            .ok_or(StoreError::EmailNotFound)
    }

    pub fn get_user(&self, id: UserId) -> StoreResult<User> {
        self.read()
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::UserNotFound(id))
    }
}
