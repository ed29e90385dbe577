use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::errors::DomainError;

pub mod create_wishlist;
pub mod list_wishlists;
pub mod login;
pub mod register;

/// Successful response: status code plus an envelope carrying `data`.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, message, data)))
    }

    pub fn status(&self) -> StatusCode {
        self.0
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Anything outside the domain taxonomy is an internal error.
impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::BadRequest(msg) => ApiError::BadRequest(msg),
            DomainError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            DomainError::Forbidden(msg) => ApiError::Forbidden(msg),
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::InternalServerError(msg) => ApiError::InternalServerError(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg) => msg,
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

/// Unknown routes and unsupported methods still answer with an envelope.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

/// Uniform JSON envelope for every response.
///
/// `status` is true iff `code` is a 2xx status. `data` is omitted from error
/// envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    pub status: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status: status_code.is_success(),
            code: status_code.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponseBody<()> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status: status_code.is_success(),
            code: status_code.as_u16(),
            message,
            data: None,
        }
    }
}
