//! Pagewise Server
//!
//! Serves the product catalogue pages and the pager JSON API.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagewise_api::{AppState, create_router};
use pagewise_core::catalog::InMemoryDataService;
use pagewise_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagewise=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    info!(
        pages_to_display = config.pager.pages_to_display,
        default_page_size = config.pager.default_page_size,
        "Configuration loaded"
    );

    // Seed the catalogue
    let data_service =
        InMemoryDataService::seeded(config.catalog.seed_items, config.catalog.rng_seed);

    // Create application state
    let state = AppState::new(Arc::new(data_service), config.pager.clone());

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
