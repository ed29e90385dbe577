use axum::extract::State;
use axum::http::StatusCode;

use super::create_wishlist::WishlistData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub const LIST_SUCCESS: &str = "Get all wishlists successfully";
pub const LIST_EMPTY: &str = "Wishlists are empty";

pub async fn list_wishlists(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<WishlistData>>, ApiError> {
    state
        .wishlist_service
        .list_wishlists()
        .await
        .map_err(ApiError::from)
        .map(|wishlists| {
            let message = if wishlists.is_empty() {
                LIST_EMPTY
            } else {
                LIST_SUCCESS
            };
            let data: Vec<WishlistData> = wishlists.iter().map(|w| w.into()).collect();
            ApiSuccess::new(StatusCode::OK, message, data)
        })
}
