use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Lifetime of an issued access token unless configured otherwise.
pub const DEFAULT_TOKEN_LIFETIME_HOURS: i64 = 20;

/// Authentication coordinator combining password verification and JWT generation.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_lifetime_hours: i64,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,

    /// Expiry of `access_token` (Unix timestamp)
    pub expires_at: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator issuing tokens valid for
    /// [`DEFAULT_TOKEN_LIFETIME_HOURS`].
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_lifetime_hours: DEFAULT_TOKEN_LIFETIME_HOURS,
        }
    }

    /// Override the lifetime of issued tokens.
    pub fn with_token_lifetime_hours(mut self, hours: i64) -> Self {
        self.token_lifetime_hours = hours;
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for the user.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Identifier placed in the `sub` claim
    /// * `email` - Email placed in the `email` claim
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
        email: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let claims = Claims::for_user(user_id, email, self.token_lifetime_hours);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            expires_at: claims.exp,
        })
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, user_id: impl ToString, email: &str) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, email, self.token_lifetime_hours);
        self.jwt_handler.encode(&claims)
    }

    /// Validate a token and return its claims.
    ///
    /// Rejects tokens whose expiry is at or before the current second.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}
