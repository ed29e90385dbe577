use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_wishlist::create_wishlist;
use super::handlers::list_wishlists::list_wishlists;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::route_not_found;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::wishlist::ports::WishlistServicePort;

/// Shared state for every HTTP handler.
///
/// Services are held behind their ports so the router can be driven by any
/// implementation (PostgreSQL-backed in production, fakes in tests).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub wishlist_service: Arc<dyn WishlistServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    wishlist_service: Arc<dyn WishlistServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        auth_service,
        wishlist_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/register", post(register).fallback(route_not_found))
        .route("/login", post(login).fallback(route_not_found));

    let protected_routes = Router::new()
        .route(
            "/wishlists",
            get(list_wishlists)
                .post(create_wishlist)
                .fallback(route_not_found),
        )
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
