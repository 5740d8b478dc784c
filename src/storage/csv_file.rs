//! CSV input and output
//!
//! The whole file is read and written through `tokio::fs`; parsing and
//! encoding happen in memory with the `csv` crate.

use crate::core::models::{ProductMeta, Record};
use crate::core::normalizer::normalize_row;
use crate::utils::error::{MetagenError, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;
use tracing::{debug, info};

/// Header row of the enriched output file
pub const OUTPUT_HEADERS: [&str; 5] = ["ID", "Title", "Body HTML", "Type", "Meta Description"];

/// Parse CSV text with a header row into normalized records
pub fn parse_records(data: &[u8]) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(data);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(normalize_row(headers.iter().zip(row.iter())));
    }
    Ok(records)
}

/// Read and normalize every row of the CSV file at `path`
pub async fn read_records(path: &Path) -> Result<Vec<Record>> {
    debug!("Reading product rows from {:?}", path);
    let data = tokio::fs::read(path).await.map_err(|e| {
        MetagenError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read {}: {}", path.display(), e),
        ))
    })?;

    let records = parse_records(&data)?;
    info!(rows = records.len(), path = %path.display(), "Loaded product rows");
    Ok(records)
}

/// Encode enriched rows as CSV, header first
pub fn encode_records(rows: &[ProductMeta]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(OUTPUT_HEADERS)?;
    for row in rows {
        writer.write_record([
            row.id.as_str(),
            row.product_title.as_str(),
            row.product_description.as_str(),
            row.product_type.as_str(),
            row.meta_description.as_str(),
        ])?;
    }

    writer.into_inner().map_err(|e| {
        let err = e.error();
        MetagenError::Io(std::io::Error::new(err.kind(), err.to_string()))
    })
}

/// Write enriched rows to `path`, replacing any existing file
pub async fn write_records(path: &Path, rows: &[ProductMeta]) -> Result<()> {
    let data = encode_records(rows)?;
    tokio::fs::write(path, data).await.map_err(|e| {
        MetagenError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to write {}: {}", path.display(), e),
        ))
    })?;
    info!(rows = rows.len(), path = %path.display(), "Wrote enriched rows");
    Ok(())
}
