//! Test fixtures
//!
//! Writes product catalogs to a temporary directory and builds matching
//! configurations. The directory is removed when the fixture is dropped.

use seo_metagen::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Input/output CSV pair in a temporary directory
pub struct CatalogFixture {
    dir: TempDir,
}

impl CatalogFixture {
    /// Create a fixture whose input file contains `csv`
    pub fn with_csv(csv: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("products.csv"), csv).expect("write input csv");
        Self { dir }
    }

    /// A catalog of `rows` products with Shopify-style headers
    pub fn with_products(rows: usize) -> Self {
        let mut csv = String::from("Handle,Title,Body (HTML),Type\n");
        for i in 1..=rows {
            csv.push_str(&format!(
                "product-{i},Product {i},\"<p>Body of product {i}, with a comma.</p>\",Category {i}\n"
            ));
        }
        Self::with_csv(&csv)
    }

    /// A fixture with no input file at all
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join("products.csv")
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("products_with_meta.csv")
    }

    /// Configuration pointing at this fixture and at `base_url`
    pub fn config(&self, base_url: &str) -> Config {
        let mut config = Config::default();
        config.provider.api_key = "sk-test".to_string();
        config.provider.base_url = base_url.to_string();
        config.provider.timeout_secs = 5;
        config.pipeline.input_path = self.input_path();
        config.pipeline.output_path = self.output_path();
        config.pipeline.batch_delay_ms = 10;
        config
    }

    /// Output file contents
    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("read output csv")
    }

    /// Output file parsed into rows, header excluded
    pub fn output_rows(&self) -> Vec<Vec<String>> {
        let mut reader = csv::Reader::from_path(self.output_path()).expect("open output csv");
        reader
            .records()
            .map(|r| r.expect("valid csv row").iter().map(str::to_string).collect())
            .collect()
    }
}
