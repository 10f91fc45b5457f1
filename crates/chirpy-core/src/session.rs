use chirpy_types::UserProfile;
use serde::Serialize;

/// Result of a successful login: who logged in and their two tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginSession {
    #[serde(flatten)]
    pub user: UserProfile,
    /// One-hour access token.
    pub token: String,
    /// Sixty-day refresh token.
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpy_types::UserId;

    #[test]
    fn serializes_flat() {
        let session = LoginSession {
            user: UserProfile {
                id: UserId::new(1),
                email: "a@example.com".into(),
            },
            token: "acc".into(),
            refresh_token: "ref".into(),
        };
        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            serde_json::json!({
                "id": 1,
                "email": "a@example.com",
                "token": "acc",
                "refresh_token": "ref",
            })
        );
    }
}
