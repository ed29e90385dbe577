use crate::domain::errors::RepositoryError;

pub mod user;
pub mod wishlist;

pub use user::PostgresUserRepository;
pub use wishlist::PostgresWishlistRepository;

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::DatabaseError(err.to_string())
    }
}
