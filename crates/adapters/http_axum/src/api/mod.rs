//! JSON REST handlers.

pub mod categories;
pub mod services;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(services::list))
        .route("/categories", get(categories::list))
}
