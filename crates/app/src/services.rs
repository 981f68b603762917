//! Application services — use-case entry points.

pub mod catalog_service;
