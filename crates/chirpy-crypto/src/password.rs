/// Salted, adaptive-cost password hasher (bcrypt).
#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Hasher using bcrypt's default cost factor.
    pub const DEFAULT: Self = Self {
        cost: bcrypt::DEFAULT_COST,
    };

    /// Hasher with an explicit cost factor (4..=31).
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password. Fails only if the primitive itself fails.
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| PasswordError::Hashing(e.to_string()))
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(plaintext, hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Errors from password operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hashing(String),
    #[error("malformed password hash: {0}")]
    MalformedHash(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: PasswordHasher = PasswordHasher::with_cost(4);

    #[test]
    fn hash_and_verify() {
        let hash = FAST.hash("04234").unwrap();
        assert!(FAST.verify("04234", &hash).unwrap());
    }

    #[test]
    fn wrong_password_is_false_not_error() {
        let hash = FAST.hash("correct horse").unwrap();
        assert_eq!(FAST.verify("battery staple", &hash), Ok(false));
    }

    #[test]
    fn hashes_are_salted() {
        let a = FAST.hash("same").unwrap();
        let b = FAST.hash("same").unwrap();
        assert_ne!(a, b);
        assert!(FAST.verify("same", &a).unwrap());
        assert!(FAST.verify("same", &b).unwrap());
    }

    #[test]
    fn hash_is_not_plaintext() {
        let hash = FAST.hash("hunter2").unwrap();
        assert!(!hash.contains("hunter2"));
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn malformed_hash_is_error() {
        assert!(matches!(
            FAST.verify("anything", "not-a-bcrypt-hash"),
            Err(PasswordError::MalformedHash(_))
        ));
    }

    #[test]
    fn default_uses_library_cost() {
        assert_eq!(PasswordHasher::default().cost(), bcrypt::DEFAULT_COST);
    }
}
