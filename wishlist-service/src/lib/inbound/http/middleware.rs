use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use http::header::AUTHORIZATION;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;

/// Identity of the caller, stored in request extensions by [`authenticate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware that validates the bearer token and adds the caller's identity
/// to request extensions. Any failure short-circuits with a 401 envelope.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        let message = match e {
            JwtError::TokenExpired => "Token is expired",
            _ => "Invalid or expired token",
        };
        unauthorized(message)
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::error!(error = %e, "Failed to parse user ID from token");
        unauthorized("Invalid token format")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            unauthorized("Invalid Authorization header format. Expected: Bearer <token>")
        })
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::middleware;
    use axum::routing::get;
    use axum::Extension;
    use axum::Router;
    use chrono::Duration;
    use chrono::Utc;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        format!("{} {}", user.user_id, user.email)
    }

    fn app() -> Router {
        let authenticator = Arc::new(Authenticator::new(SECRET));

        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(middleware::from_fn_with_state(authenticator, authenticate))
    }

    fn request(authorization: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let user_id = UserId::new();
        let token = Authenticator::new(SECRET)
            .issue_token(user_id, "alice@example.com")
            .unwrap();

        let response = app()
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            format!("{} alice@example.com", user_id)
        );
    }

    #[tokio::test]
    async fn test_missing_header() {
        let response = app().oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], false);
        assert_eq!(body["code"], 401);
        assert_eq!(body["message"], "Missing Authorization header");
    }

    #[tokio::test]
    async fn test_wrong_scheme() {
        let response = app()
            .oneshot(request(Some("Basic dXNlcjpwYXNz")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_empty_bearer_token() {
        let response = app().oneshot(request(Some("Bearer "))).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret() {
        let token = Authenticator::new(b"another-secret-key-that-is-32-bytes-long")
            .issue_token(UserId::new(), "alice@example.com")
            .unwrap();

        let response = app()
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_token() {
        let claims = auth::Claims::issued_at(
            UserId::new(),
            "alice@example.com",
            Utc::now() - Duration::hours(21),
            Duration::hours(20),
        );
        let token = auth::JwtHandler::new(SECRET).encode(&claims).unwrap();

        let response = app()
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["message"], "Token is expired");
    }

    #[tokio::test]
    async fn test_subject_not_a_user_id() {
        let token = Authenticator::new(SECRET)
            .issue_token("not-a-uuid", "alice@example.com")
            .unwrap();

        let response = app()
            .oneshot(request(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
