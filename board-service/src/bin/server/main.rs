use std::sync::Arc;

use auth::Authenticator;
use board_service::config::Config;
use board_service::domain::offer::ports::OfferServicePort;
use board_service::domain::offer::service::OfferService;
use board_service::domain::principal::ports::PrincipalServicePort;
use board_service::domain::principal::service::PrincipalService;
use board_service::inbound::http::router::create_router;
use board_service::outbound::repositories::PostgresOfferRepository;
use board_service::outbound::repositories::PostgresPrincipalRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "board_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "board-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));

    let principal_repository = Arc::new(PostgresPrincipalRepository::new(pg_pool.clone()));
    let offer_repository = Arc::new(PostgresOfferRepository::new(pg_pool));

    let principal_service: Arc<dyn PrincipalServicePort> =
        Arc::new(PrincipalService::new(principal_repository));
    let offer_service: Arc<dyn OfferServicePort> = Arc::new(OfferService::new(offer_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(
        principal_service,
        offer_service,
        authenticator,
        config.jwt.expiration_hours,
    );
    axum::serve(http_listener, application).await?;

    Ok(())
}
