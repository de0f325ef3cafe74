//! Booking HTTP Server Binary
//!
//! This is the main entry point for the booking REST API server.
//! It initializes the repository, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory repository (default)
//! cargo run --bin resbook-server
//!
//! # Run with demo data
//! SEED_DEMO_DATA=1 cargo run --bin resbook-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Storage backend ("local", default: local)
//! - `SEED_DEMO_DATA`: Set to 1 to seed sample resources and bookings
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use resbook::db::{seed, RepositoryConfig, RepositoryFactory, RepositoryType};
use resbook::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting booking HTTP server");

    // Repository type: config file wins over environment, both default local.
    let repo_type = match RepositoryConfig::from_default_location() {
        Ok(config) => config
            .repository_type()
            .map_err(|e| anyhow::anyhow!("Invalid repository config: {}", e))?,
        Err(_) => RepositoryType::from_env(),
    };
    let repository = RepositoryFactory::create(repo_type)
        .map_err(|e| anyhow::anyhow!("Failed to create repository: {}", e))?;
    info!("Repository initialized successfully ({:?})", repo_type);

    if env::var("SEED_DEMO_DATA").map(|v| v == "1").unwrap_or(false) {
        let (resources, bookings) = seed::seed_demo_data(repository.as_ref())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed demo data: {}", e))?;
        info!("Seeded {} resources and {} bookings", resources, bookings);
    }

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
