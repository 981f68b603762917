//! # pricelist-domain
//!
//! Pure domain model for the dental services price list.
//!
//! ## Responsibilities
//! - Define **`ServiceRecord`** (one priced procedure line, six string fields)
//! - Define **`Catalog`** (the ordered, immutable record sequence plus its
//!   derived views: distinct categories and filtered subsequences)
//! - Define **`Filter`** (search term + category selection) and the matching
//!   predicates, including their inherited quirks
//! - Define the error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod catalog;
pub mod error;
pub mod filter;
pub mod record;
