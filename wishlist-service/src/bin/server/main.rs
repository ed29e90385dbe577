use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wishlist_service::config::Config;
use wishlist_service::domain::user::service::AuthService;
use wishlist_service::domain::wishlist::service::WishlistService;
use wishlist_service::inbound::http::router::create_router;
use wishlist_service::outbound::repositories::PostgresUserRepository;
use wishlist_service::outbound::repositories::PostgresWishlistRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wishlist_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "wishlist-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.redacted_url(),
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.connection_url())
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(
        Authenticator::new(config.jwt.secret.as_bytes())
            .with_token_lifetime_hours(config.jwt.expiration_hours),
    );
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let wishlist_repository = Arc::new(PostgresWishlistRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::clone(&authenticator),
    ));
    let wishlist_service = Arc::new(WishlistService::new(wishlist_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, wishlist_service, authenticator);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
