use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::errors::DomainError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

pub const EMPTY_FIELDS: &str = "Field must be filled";
pub const EMAIL_ALREADY_USED: &str = "Register Failed: Email already used";
pub const WRONG_EMAIL: &str = "Login Failed: wrong email";
pub const WRONG_PASSWORD: &str = "Login Failed: wrong password";

/// Registration and login.
///
/// Holds the user repository and the shared [`Authenticator`]; both are
/// injected at startup.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<User, DomainError> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(DomainError::BadRequest(EMPTY_FIELDS.to_string()));
        }

        let existing = self
            .repository
            .find_by_email(&credentials.email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to look up user by email");
                DomainError::InternalServerError(
                    "Register Failed: could not check email".to_string(),
                )
            })?;

        if existing.is_some() {
            tracing::warn!(email = %credentials.email, "Registration rejected: email already used");
            return Err(DomainError::BadRequest(EMAIL_ALREADY_USED.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(&credentials.password)
            .map_err(|e| DomainError::InternalServerError(e.to_string()))?;

        let user = self
            .repository
            .create(User::new(credentials.email, password_hash))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create user");
                DomainError::InternalServerError(
                    "Register Failed: could not save user".to_string(),
                )
            })?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    async fn login(&self, credentials: Credentials) -> Result<AccessToken, DomainError> {
        let user = match self.repository.find_by_email(&credentials.email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(DomainError::BadRequest(WRONG_EMAIL.to_string())),
            Err(e) => {
                tracing::error!(error = %e, "Failed to look up user by email");
                return Err(DomainError::BadRequest(WRONG_EMAIL.to_string()));
            }
        };

        let result = self
            .authenticator
            .authenticate(
                &credentials.password,
                &user.password_hash,
                user.id,
                &user.email,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::warn!(user_id = %user.id, "Login rejected: wrong password");
                    DomainError::BadRequest(WRONG_PASSWORD.to_string())
                }
                AuthenticationError::PasswordError(err) => {
                    tracing::error!(
                        user_id = %user.id,
                        error = %err,
                        "Stored password hash is unreadable"
                    );
                    DomainError::BadRequest(WRONG_PASSWORD.to_string())
                }
                AuthenticationError::JwtError(err) => {
                    DomainError::InternalServerError(format!("Token generation failed: {}", err))
                }
            })?;

        Ok(AccessToken {
            token: result.access_token,
            expires_at: result.expires_at,
        })
    }
}
