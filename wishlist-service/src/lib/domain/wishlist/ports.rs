use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::errors::RepositoryError;
use crate::domain::wishlist::models::CreateWishlistCommand;
use crate::domain::wishlist::models::Wishlist;

/// Port for wishlist operations.
#[async_trait]
pub trait WishlistServicePort: Send + Sync + 'static {
    /// List every wishlist item that is not soft-deleted.
    ///
    /// An empty list is a success.
    ///
    /// # Errors
    /// * `InternalServerError` - Storage failed
    async fn list_wishlists(&self) -> Result<Vec<Wishlist>, DomainError>;

    /// Create a wishlist item.
    ///
    /// # Errors
    /// * `InternalServerError` - Storage failed
    async fn create_wishlist(&self, command: CreateWishlistCommand)
        -> Result<Wishlist, DomainError>;
}

/// Persistence operations for wishlist items.
#[async_trait]
pub trait WishlistRepository: Send + Sync + 'static {
    /// Retrieve all items that are not soft-deleted, oldest first.
    async fn list(&self) -> Result<Vec<Wishlist>, RepositoryError>;

    /// Persist a new item.
    async fn create(&self, wishlist: Wishlist) -> Result<Wishlist, RepositoryError>;
}
