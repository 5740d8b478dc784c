//! Storage layer
//!
//! Reading the product table and persisting the enriched one.

/// Delimited file source and sink
pub mod csv_file;

pub use csv_file::{OUTPUT_HEADERS, read_records, write_records};
