//! JSON handlers for the service price list.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use pricelist_domain::record::ServiceRecord;

use crate::query::FilterQuery;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<ServiceRecord>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/services` — records passing the filter, source order
/// preserved. Without parameters this is the whole catalog.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ListResponse {
    let filter = query.into_filter();
    let services: Vec<ServiceRecord> = state
        .catalog
        .filtered(&filter)
        .into_iter()
        .cloned()
        .collect();

    ListResponse::Ok(Json(services))
}
