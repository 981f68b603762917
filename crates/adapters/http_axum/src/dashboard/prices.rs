//! Dashboard page for the searchable price table.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};

use pricelist_domain::record::ServiceRecord;

use crate::query::FilterQuery;
use crate::state::AppState;

/// Price list page template.
///
/// The filter form submits back to `/` via GET, so the page is its own
/// controller: every request recomputes the filtered view from the full
/// catalog.
#[derive(Template)]
#[template(path = "price_list.html")]
pub struct PriceListTemplate {
    total: usize,
    categories: Vec<String>,
    search_term: String,
    selected_category: String,
    filters_active: bool,
    services: Vec<ServiceRecord>,
}

impl IntoResponse for PriceListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — the price list with search and category filtering.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> PriceListTemplate {
    let filter = query.into_filter();
    let services: Vec<ServiceRecord> = state
        .catalog
        .filtered(&filter)
        .into_iter()
        .cloned()
        .collect();

    PriceListTemplate {
        total: state.catalog.len(),
        categories: state.catalog.categories(),
        search_term: filter.search_term.clone(),
        selected_category: filter.category.as_str().to_string(),
        filters_active: filter.is_active(),
        services,
    }
}
