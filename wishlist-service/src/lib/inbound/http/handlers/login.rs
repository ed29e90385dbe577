use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Credentials;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = payload?;

    state
        .auth_service
        .login(Credentials::new(body.email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|access_token| {
            ApiSuccess::new(
                StatusCode::OK,
                "Login successfully",
                LoginResponseData {
                    token: access_token.token,
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
