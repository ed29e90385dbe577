use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::wishlist::models::CreateWishlistCommand;
use crate::domain::wishlist::models::Wishlist;
use crate::domain::wishlist::ports::WishlistRepository;
use crate::domain::wishlist::ports::WishlistServicePort;

/// Domain service for wishlist items.
pub struct WishlistService<WR>
where
    WR: WishlistRepository,
{
    repository: Arc<WR>,
}

impl<WR> WishlistService<WR>
where
    WR: WishlistRepository,
{
    pub fn new(repository: Arc<WR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<WR> WishlistServicePort for WishlistService<WR>
where
    WR: WishlistRepository,
{
    async fn list_wishlists(&self) -> Result<Vec<Wishlist>, DomainError> {
        self.repository.list().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list wishlists");
            DomainError::InternalServerError("Failed to get wishlists".to_string())
        })
    }

    async fn create_wishlist(
        &self,
        command: CreateWishlistCommand,
    ) -> Result<Wishlist, DomainError> {
        let wishlist = Wishlist::new(command.title, command.is_achieved);

        let created = self.repository.create(wishlist).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create wishlist");
            DomainError::InternalServerError("Failed to create wishlist".to_string())
        })?;

        tracing::debug!(wishlist_id = %created.id, "Wishlist created");

        Ok(created)
    }
}
