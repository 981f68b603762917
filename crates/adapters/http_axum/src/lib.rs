//! # pricelist-adapter-http-axum
//!
//! HTTP adapter using axum — serves the JSON API under `/api` and the
//! server-side rendered price list dashboard at `/`.

pub mod api;
pub mod dashboard;
pub mod query;
pub mod router;
pub mod state;
