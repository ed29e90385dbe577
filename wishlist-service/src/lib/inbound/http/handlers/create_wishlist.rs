use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::wishlist::models::CreateWishlistCommand;
use crate::domain::wishlist::models::Wishlist;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_wishlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<CreateWishlistRequest>, JsonRejection>,
) -> Result<ApiSuccess<WishlistData>, ApiError> {
    let Json(body) = payload?;

    tracing::debug!(user_id = %user.user_id, title = %body.title, "Creating wishlist");

    state
        .wishlist_service
        .create_wishlist(CreateWishlistCommand::new(body.title, body.is_achieved))
        .await
        .map_err(ApiError::from)
        .map(|ref wishlist| {
            ApiSuccess::new(
                StatusCode::CREATED,
                "Create new wishlist successfully",
                wishlist.into(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateWishlistRequest {
    title: String,
    #[serde(default)]
    is_achieved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistData {
    pub id: String,
    pub title: String,
    pub is_achieved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Wishlist> for WishlistData {
    fn from(wishlist: &Wishlist) -> Self {
        Self {
            id: wishlist.id.to_string(),
            title: wishlist.title.clone(),
            is_achieved: wishlist.is_achieved,
            created_at: wishlist.created_at,
            updated_at: wishlist.updated_at,
            deleted_at: wishlist.deleted_at,
        }
    }
}
