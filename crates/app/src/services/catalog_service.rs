//! Catalog service — the one-shot load use-case.

use pricelist_domain::catalog::Catalog;
use pricelist_domain::error::PriceListError;

use crate::ports::PriceSource;

/// Loads the price catalog from a [`PriceSource`].
///
/// The load happens exactly once per process; afterwards the catalog is
/// immutable and every view is derived from it.
pub struct CatalogService<S> {
    source: S,
}

impl<S: PriceSource> CatalogService<S> {
    /// Create a new service backed by the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load the full catalog.
    ///
    /// # Errors
    ///
    /// Returns [`PriceListError::Source`] when the resource cannot be read
    /// or decoded.
    pub async fn load_catalog(&self) -> Result<Catalog, PriceListError> {
        Ok(Catalog::new(self.source.load().await?))
    }

    /// Load the catalog, falling back to an empty one when the source
    /// fails.
    ///
    /// The failure is logged for the operator; the caller serves the usual
    /// empty state. No retry, no user-facing error view — an empty catalog
    /// renders identically to "no rows match the filter".
    pub async fn load_catalog_or_empty(&self) -> Catalog {
        match self.load_catalog().await {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::error!(error = %err, "failed to load price list, serving empty catalog");
                Catalog::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricelist_domain::error::SourceError;
    use pricelist_domain::record::ServiceRecord;

    struct FixedSource(Vec<ServiceRecord>);

    impl PriceSource for FixedSource {
        async fn load(&self) -> Result<Vec<ServiceRecord>, PriceListError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl PriceSource for FailingSource {
        async fn load(&self) -> Result<Vec<ServiceRecord>, PriceListError> {
            Err(SourceError::Unreadable {
                path: "prices.csv".to_string(),
                reason: "connection reset".to_string(),
            }
            .into())
        }
    }

    fn records() -> Vec<ServiceRecord> {
        vec![
            ServiceRecord {
                code: "D001".to_string(),
                service: "Cleaning".to_string(),
                ..ServiceRecord::default()
            },
            ServiceRecord {
                code: "D002".to_string(),
                service: "Filling".to_string(),
                ..ServiceRecord::default()
            },
        ]
    }

    #[tokio::test]
    async fn should_load_catalog_in_source_order() {
        let svc = CatalogService::new(FixedSource(records()));
        let catalog = svc.load_catalog().await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.services()[0].code, "D001");
        assert_eq!(catalog.services()[1].code, "D002");
    }

    #[tokio::test]
    async fn should_propagate_source_failure() {
        let svc = CatalogService::new(FailingSource);
        let result = svc.load_catalog().await;
        assert!(matches!(result, Err(PriceListError::Source(_))));
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_catalog_on_failure() {
        let svc = CatalogService::new(FailingSource);
        let catalog = svc.load_catalog_or_empty().await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn should_keep_loaded_catalog_on_success_path() {
        let svc = CatalogService::new(FixedSource(records()));
        let catalog = svc.load_catalog_or_empty().await;
        assert_eq!(catalog.len(), 2);
    }
}
