use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::errors::RepositoryError;
use crate::domain::wishlist::models::Wishlist;
use crate::domain::wishlist::models::WishlistId;
use crate::domain::wishlist::ports::WishlistRepository;

pub struct PostgresWishlistRepository {
    pool: PgPool,
}

impl PostgresWishlistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_wishlist(row: &PgRow) -> Result<Wishlist, RepositoryError> {
        Ok(Wishlist {
            id: WishlistId(row.try_get("id")?),
            title: row.try_get("title")?,
            is_achieved: row.try_get("is_achieved")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
        })
    }
}

#[async_trait]
impl WishlistRepository for PostgresWishlistRepository {
    async fn list(&self) -> Result<Vec<Wishlist>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, is_achieved, created_at, updated_at, deleted_at
            FROM wishlists
            WHERE deleted_at IS NULL
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_wishlist).collect()
    }

    async fn create(&self, wishlist: Wishlist) -> Result<Wishlist, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO wishlists (id, title, is_achieved, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(wishlist.id.0)
        .bind(&wishlist.title)
        .bind(wishlist.is_achieved)
        .bind(wishlist.created_at)
        .bind(wishlist.updated_at)
        .bind(wishlist.deleted_at)
        .execute(&self.pool)
        .await?;

        Ok(wishlist)
    }
}
