use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::errors::RepositoryError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;

/// Port for registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `BadRequest` - Email or password is empty, or the email is already used
    /// * `InternalServerError` - Hashing or storage failed
    async fn register(&self, credentials: Credentials) -> Result<User, DomainError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `BadRequest` - Unknown email or wrong password
    /// * `InternalServerError` - Token signing failed
    async fn login(&self, credentials: Credentials) -> Result<AccessToken, DomainError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Persist new user to storage.
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, RepositoryError>;
}
