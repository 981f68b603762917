//! JSON handler for the derived category list.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Possible responses from the categories endpoint.
pub enum ListResponse {
    Ok(Json<Vec<String>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/categories` — distinct non-empty categories, sorted
/// ascending. The `all` sentinel is a selector value, not a category, and
/// is never included here.
pub async fn list(State(state): State<AppState>) -> ListResponse {
    ListResponse::Ok(Json(state.catalog.categories()))
}
