//! Query-string mapping for filter parameters.
//!
//! Filter state travels as query parameters (`q`, `category`) on both the
//! dashboard and the API; both absent parameters and the `all` sentinel
//! mean "no filtering".

use serde::Deserialize;

use pricelist_domain::filter::{CategorySelection, Filter};

/// Filter parameters accepted by the dashboard and the API.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    /// Free-text search term.
    pub q: Option<String>,
    /// Category name, or the `all` sentinel.
    pub category: Option<String>,
}

impl FilterQuery {
    /// Convert into the domain filter.
    #[must_use]
    pub fn into_filter(self) -> Filter {
        Filter::new(
            self.q.unwrap_or_default(),
            self.category
                .as_deref()
                .map_or(CategorySelection::All, CategorySelection::parse),
        )
    }
}
