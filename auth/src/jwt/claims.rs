use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// Identifies the authenticated user and the window in which the token is
/// valid. All timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email of the authenticated user
    pub email: String,

    /// Issued at
    pub iat: i64,

    /// Not before
    pub nbf: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user that are valid from now for `expiration_hours`.
    pub fn for_user(
        user_id: impl ToString,
        email: impl Into<String>,
        expiration_hours: i64,
    ) -> Self {
        Self::issued_at(
            user_id,
            email,
            Utc::now(),
            Duration::hours(expiration_hours),
        )
    }

    /// Create claims issued at an explicit instant.
    ///
    /// `nbf` equals `iat`; `exp` is `issued_at + lifetime`.
    pub fn issued_at(
        user_id: impl ToString,
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        let iat = issued_at.timestamp();

        Self {
            sub: user_id.to_string(),
            email: email.into(),
            iat,
            nbf: iat,
            exp: (issued_at + lifetime).timestamp(),
        }
    }

    /// A token stops being valid at the exact second of its expiry.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
