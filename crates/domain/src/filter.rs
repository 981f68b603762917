//! Filter state and matching predicates for the price list view.

use std::fmt;

use crate::record::ServiceRecord;

/// Reserved category value meaning "no category filter applied".
pub const ALL_SENTINEL: &str = "all";

/// The category selector: either the `all` sentinel or one of the category
/// values observed in the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    /// No category filtering.
    #[default]
    All,
    /// Only records whose category equals this value exactly.
    Named(String),
}

impl CategorySelection {
    /// Parse a selector value; the `all` sentinel maps to [`Self::All`],
    /// anything else is taken as a category name verbatim.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL_SENTINEL {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    /// The wire spelling of this selection (`all` for [`Self::All`]).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current view filter: a free-text search term plus a category selection.
///
/// The default value (empty term, `all`) is the cleared state and matches
/// every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Free-text search term; empty means no text filtering.
    pub search_term: String,
    /// Category selection.
    pub category: CategorySelection,
}

impl Filter {
    /// Create a filter from a search term and category selection.
    #[must_use]
    pub fn new(search_term: impl Into<String>, category: CategorySelection) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    /// A record passes iff both the search and the category predicate hold.
    #[must_use]
    pub fn matches(&self, record: &ServiceRecord) -> bool {
        self.matches_search(record) && self.matches_category(record)
    }

    /// True when the term is empty, the lowercased term is a substring of
    /// the lowercased `code`, `service`, or `category`, or the raw term is
    /// a substring of the raw `price` string.
    ///
    /// The price column is matched case-sensitively while the three text
    /// columns are not. Inherited behavior, kept as-is.
    fn matches_search(&self, record: &ServiceRecord) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        record.code.to_lowercase().contains(&needle)
            || record.service.to_lowercase().contains(&needle)
            || record.category.to_lowercase().contains(&needle)
            || record.price.contains(&self.search_term)
    }

    /// True when the selection is `all` or equals the record's category
    /// exactly (case-sensitive).
    fn matches_category(&self, record: &ServiceRecord) -> bool {
        match &self.category {
            CategorySelection::All => true,
            CategorySelection::Named(name) => record.category == *name,
        }
    }

    /// Reset to the cleared state (empty term, `all`). Never touches the
    /// underlying dataset.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any filtering is in effect. Drives the "Clear Filters"
    /// affordance in the view.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.category != CategorySelection::All
    }
}
