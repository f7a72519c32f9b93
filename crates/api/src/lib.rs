//! HTTP layer with Axum routes and pager rendering.
//!
//! This crate provides:
//! - HTML product pages with a pager and paging summary
//! - An AJAX variant that swaps the product grid in place
//! - A JSON endpoint exposing the computed pager model
//! - Request extractors and error responses

pub mod error;
pub mod extractors;
pub mod render;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use pagewise_core::catalog::DataService;
use pagewise_core::pager::PagerOptions;
use pagewise_shared::PagerConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of paged products.
    pub data_service: Arc<dyn DataService>,
    /// Pager defaults.
    pub pager: Arc<PagerConfig>,
}

impl AppState {
    /// Creates the state from a data service and pager configuration.
    pub fn new(data_service: Arc<dyn DataService>, pager: PagerConfig) -> Self {
        Self {
            data_service,
            pager: Arc::new(pager),
        }
    }

    /// Link set options derived from the pager configuration.
    #[must_use]
    pub fn pager_options(&self) -> PagerOptions {
        PagerOptions {
            first_last_navigation: self.pager.first_last_navigation,
            skip_navigation: self.pager.skip_navigation,
            ..PagerOptions::default()
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::page_routes())
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
