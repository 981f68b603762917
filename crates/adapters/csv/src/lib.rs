//! # pricelist-adapter-csv
//!
//! CSV data adapter: a parser for the price list text format plus a
//! filesystem-backed [`PriceSource`](pricelist_app::ports::PriceSource)
//! implementation.

pub mod parser;
pub mod source;

pub use source::CsvFileSource;
