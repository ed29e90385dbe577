use std::fmt;

use chrono::DateTime;
use chrono::SubsecRound;
use chrono::Utc;
use uuid::Uuid;

/// Registered user.
///
/// `password_hash` is a PHC string; the plaintext password is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new user about to be persisted.
    pub fn new(email: String, password_hash: String) -> Self {
        // TIMESTAMPTZ keeps microseconds.
        let now = Utc::now().trunc_subsecs(6);

        Self {
            id: UserId::new(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// Returns the underlying parse error when `s` is not a UUID.
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(UserId)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email and password as submitted by a client.
///
/// Used for both registration and login; neither field is validated beyond
/// what the service checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Token handed out on successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: i64,
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn test_timestamps_fit_database_precision() {
        let entity = User::new("nicola@example.com".to_string(), "hash".to_string());

        assert_eq!(entity.created_at.nanosecond() % 1_000, 0);
        assert_eq!(entity.created_at, entity.updated_at);
    }
}
