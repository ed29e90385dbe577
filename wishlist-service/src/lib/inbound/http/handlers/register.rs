use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .auth_service
        .register(body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(StatusCode::CREATED, "Register user successfully", user.into())
        })
}

/// Missing fields deserialize as empty strings so the service can reject them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl From<RegisterRequest> for Credentials {
    fn from(request: RegisterRequest) -> Self {
        Credentials::new(request.email, request.password)
    }
}

/// Public projection of a freshly registered user; the password hash is
/// never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for RegisterResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
