//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::catalog::Catalog;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
///
/// Routes live under `/api`; the prefix is a hosting convention shared with
/// the storefront frontend.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/", get(handlers::root))
                .route("/products", get(handlers::list_products))
                .route("/products/:id", get(handlers::get_product)),
        )
        .with_state(state)
}

/// Convenience helper wiring a catalog straight into a router
pub fn create_catalog_router(catalog: Arc<Catalog>) -> Router {
    create_router(AppState::new(catalog))
}
