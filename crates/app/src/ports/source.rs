//! Price source port — where the dataset comes from.

use std::future::Future;

use pricelist_domain::error::PriceListError;
use pricelist_domain::record::ServiceRecord;

/// Provides the complete price dataset, wherever it lives.
///
/// Loading is all-or-nothing: either the whole ordered sequence is produced
/// or the load fails. There is no partial-success mode.
pub trait PriceSource {
    /// Fetch and parse the complete, ordered record sequence.
    fn load(&self) -> impl Future<Output = Result<Vec<ServiceRecord>, PriceListError>> + Send;
}

impl<T: PriceSource + Send + Sync> PriceSource for std::sync::Arc<T> {
    fn load(&self) -> impl Future<Output = Result<Vec<ServiceRecord>, PriceListError>> + Send {
        (**self).load()
    }
}
