use std::fmt;

use chrono::DateTime;
use chrono::SubsecRound;
use chrono::Utc;
use uuid::Uuid;

/// A wishlist entry.
///
/// Items with `deleted_at` set are soft-deleted and never listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wishlist {
    pub id: WishlistId,
    pub title: String,
    pub is_achieved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Wishlist {
    pub fn new(title: String, is_achieved: bool) -> Self {
        // TIMESTAMPTZ keeps microseconds.
        let now = Utc::now().trunc_subsecs(6);

        Self {
            id: WishlistId::new(),
            title,
            is_achieved,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WishlistId(pub Uuid);

impl WishlistId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WishlistId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WishlistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a wishlist item.
///
/// The title is taken as given; an empty title is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWishlistCommand {
    pub title: String,
    pub is_achieved: bool,
}

impl CreateWishlistCommand {
    pub fn new(title: impl Into<String>, is_achieved: bool) -> Self {
        Self {
            title: title.into(),
            is_achieved,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn test_timestamps_fit_database_precision() {
        let entity = Wishlist::new("Buy a bike".to_string(), false);

        assert_eq!(entity.created_at.nanosecond() % 1_000, 0);
        assert_eq!(entity.created_at, entity.updated_at);
    }
}
