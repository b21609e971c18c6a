//! API server state

use std::sync::Arc;

use crate::catalog::Catalog;

/// API server state
///
/// The catalog is injected at startup; handlers never reach for
/// process-wide globals.
#[derive(Clone)]
pub struct AppState {
    /// Shared, read-only product catalog
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}
