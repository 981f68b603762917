//! Shared application state for axum handlers.

use std::sync::Arc;

use pricelist_domain::catalog::Catalog;

/// Application state shared across all axum handlers.
///
/// The catalog is loaded once at startup and never mutated afterwards, so
/// handlers share it behind an `Arc` with no locking. `Clone` only clones
/// the `Arc`.
#[derive(Debug)]
pub struct AppState {
    /// The immutable price catalog.
    pub catalog: Arc<Catalog>,
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl AppState {
    /// Wrap a loaded catalog for sharing across handlers.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
