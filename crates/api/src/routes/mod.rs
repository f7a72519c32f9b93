//! Route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod pager;
pub mod products;

/// HTML pages.
pub fn page_routes() -> Router<AppState> {
    Router::new().merge(health::routes()).merge(products::routes())
}

/// JSON API, nested under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(health::routes()).merge(pager::routes())
}
