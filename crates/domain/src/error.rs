//! Common error types used across the workspace.
//!
//! The system has a single failure mode: the price resource cannot be read
//! or decoded. Each layer converts into these types via `#[from]`; no
//! stringly-typed errors cross crate boundaries.

/// Top-level error for price list operations.
#[derive(Debug, thiserror::Error)]
pub enum PriceListError {
    /// The price resource could not be loaded.
    #[error("price data source error")]
    Source(#[from] SourceError),
}

/// Failure loading the price resource.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The resource could not be read or decoded as UTF-8 text.
    #[error("failed to read price resource at {path}: {reason}")]
    Unreadable {
        /// Location of the resource, for the operator log.
        path: String,
        /// Underlying cause, stringified.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_unreadable_source() {
        let err = SourceError::Unreadable {
            path: "data/prices.csv".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read price resource at data/prices.csv: No such file or directory"
        );
    }

    #[test]
    fn should_expose_source_chain() {
        let err = PriceListError::from(SourceError::Unreadable {
            path: "prices.csv".to_string(),
            reason: "denied".to_string(),
        });
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("prices.csv"));
    }
}
