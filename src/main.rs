use phonebook::api::router::build_router;
use phonebook::api::AppState;
use phonebook::config::Config;
use phonebook::database::Database;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phonebook=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // The pool is lazy: a database that is down at startup does not stop the
    // server, requests fail individually until it comes back.
    let db = Database::connect(&config.database_url)?;
    match db.run_migrations().await {
        Ok(()) => tracing::info!("connected to the database"),
        Err(err) => tracing::error!("error connecting to the database: {}", err),
    }

    let state = AppState { db: Arc::new(db) };
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Server running on port {}", config.server_port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
