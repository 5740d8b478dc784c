//! Pipeline driver
//!
//! Reads the product table, generates a meta description for every row in
//! throttled batches, and writes the enriched table. Row-level generation
//! failures never stop the run; read and write failures do.

use crate::config::Config;
use crate::core::batch::BatchRunner;
use crate::core::generator::DescriptionGenerator;
use crate::core::models::ProductFields;
use crate::core::providers::{OpenAiProvider, StructuredCompletion};
use crate::storage;
use crate::utils::error::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Counts reported at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows read and written
    pub rows: usize,
    /// Batches executed
    pub batches: usize,
    /// Rows with a model-generated description
    pub generated: usize,
    /// Rows that fell back to the sentinel description
    pub fallbacks: usize,
    /// Where the enriched table was written
    pub output_path: PathBuf,
}

/// Batch pipeline from input CSV to enriched output CSV
pub struct Pipeline {
    config: Config,
    generator: DescriptionGenerator,
}

impl Pipeline {
    /// Create a pipeline backed by the configured OpenAI-compatible service
    pub fn new(config: Config) -> Result<Self> {
        let provider = OpenAiProvider::new(&config.provider)?;
        debug!(
            endpoint = provider.endpoint(),
            model = %config.provider.model,
            "Using chat completions endpoint"
        );
        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    /// Create a pipeline with a custom provider
    pub fn with_provider(config: Config, provider: Arc<dyn StructuredCompletion>) -> Self {
        Self {
            config,
            generator: DescriptionGenerator::new(provider),
        }
    }

    /// Run the whole pipeline once
    pub async fn run(&self) -> Result<RunSummary> {
        let settings = &self.config.pipeline;
        let runner = BatchRunner::new(settings.batch_size, self.config.batch_delay())?;

        let mut records = storage::read_records(&settings.input_path).await?;
        if let Some(max_rows) = settings.max_rows {
            if records.len() > max_rows {
                info!(max_rows, available = records.len(), "Limiting rows");
                records.truncate(max_rows);
            }
        }

        let fields: Vec<ProductFields> = records.iter().map(ProductFields::from).collect();
        info!(
            rows = fields.len(),
            batches = runner.batch_count(fields.len()),
            batch_size = runner.batch_size(),
            "Starting meta description generation"
        );

        let generator = &self.generator;
        let outcome = runner
            .run(fields, move |fields| async move { generator.generate(&fields).await })
            .await;

        let fallbacks = outcome.results.iter().filter(|g| g.is_fallback()).count();
        let batches = outcome.batches();
        let rows: Vec<_> = outcome.results.into_iter().map(|g| g.into_meta()).collect();

        storage::write_records(&settings.output_path, &rows).await?;

        let summary = RunSummary {
            rows: rows.len(),
            batches,
            generated: rows.len() - fallbacks,
            fallbacks,
            output_path: settings.output_path.clone(),
        };
        info!(
            rows = summary.rows,
            batches = summary.batches,
            generated = summary.generated,
            fallbacks = summary.fallbacks,
            "Pipeline finished"
        );
        Ok(summary)
    }
}
