//! # seo-metagen
//!
//! Batch generation of SEO meta descriptions for product catalogs.
//!
//! A CSV of products is read, every row is sent to an OpenAI-compatible chat
//! completions endpoint with a structured-output schema, and the enriched
//! table is written back out. Rows are processed in fixed-size concurrent
//! batches with a fixed pause between batches to stay under the service's
//! rate limit. A row whose generation fails gets a fallback description
//! instead of failing the run.
//!
//! ```rust,no_run
//! use seo_metagen::{Config, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.provider.api_key = std::env::var("OPENAI_API_KEY")?;
//!     config.validate()?;
//!
//!     let summary = Pipeline::new(config)?.run().await?;
//!     println!("{} rows, {} fallbacks", summary.rows, summary.fallbacks);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use crate::config::{Cli, Config};
pub use crate::core::generator::{DescriptionGenerator, Generated};
pub use crate::core::models::{FALLBACK_META_DESCRIPTION, ProductFields, ProductMeta, Record};
pub use crate::core::pipeline::{Pipeline, RunSummary};
pub use crate::core::providers::{OpenAiProvider, StructuredCompletion};
pub use crate::utils::error::{MetagenError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
