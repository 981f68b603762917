//! Catalog — the ordered, immutable record sequence and its derived views.

use std::collections::BTreeSet;

use crate::filter::Filter;
use crate::record::ServiceRecord;

/// The loaded price list. Ordered as in the source, never mutated after
/// construction; derived views are recomputed on demand, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    services: Vec<ServiceRecord>,
}

impl Catalog {
    /// Wrap an ordered record sequence.
    #[must_use]
    pub fn new(services: Vec<ServiceRecord>) -> Self {
        Self { services }
    }

    /// All records, in source order.
    #[must_use]
    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    /// Total number of loaded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no records were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Distinct non-empty category values, sorted ascending
    /// lexicographically.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.services
            .iter()
            .map(|record| record.category.as_str())
            .filter(|category| !category.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    /// The subsequence of records passing `filter`, relative order
    /// preserved.
    #[must_use]
    pub fn filtered(&self, filter: &Filter) -> Vec<&ServiceRecord> {
        self.services
            .iter()
            .filter(|record| filter.matches(record))
            .collect()
    }
}
