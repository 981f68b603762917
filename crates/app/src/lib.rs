//! # pricelist-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`PriceSource`** port that data adapters implement
//!   (driven/outbound port)
//! - Provide **`CatalogService`**: the one-shot load use-case, including the
//!   recovery policy for a failed load (log and serve an empty catalog)
//!
//! ## Dependency rule
//! Depends on `pricelist-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
