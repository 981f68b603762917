//! Filesystem-backed price source.

use std::path::{Path, PathBuf};

use pricelist_app::ports::PriceSource;
use pricelist_domain::error::{PriceListError, SourceError};
use pricelist_domain::record::ServiceRecord;

use crate::parser;

/// Reads the price list from a static CSV file on disk.
///
/// The file is read fresh on every `load` call, but the composition root
/// only ever calls it once per process.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    /// Create a source for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured resource path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PriceSource for CsvFileSource {
    async fn load(&self) -> Result<Vec<ServiceRecord>, PriceListError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            SourceError::Unreadable {
                path: self.path.display().to_string(),
                reason: err.to_string(),
            }
        })?;
        Ok(parser::parse_price_list(&text))
    }
}
