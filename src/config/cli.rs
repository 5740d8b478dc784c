//! Command-line interface
//!
//! Every flag can also come from the environment (or a `.env` file). Values
//! given here override the YAML configuration file.

use super::{Config, LogFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "seo-metagen",
    version,
    about = "Generate SEO meta descriptions for a product catalog CSV"
)]
pub struct Cli {
    /// Optional YAML configuration file
    #[arg(long, short = 'c', env = "METAGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Input CSV with a header row
    #[arg(long, short = 'i', env = "METAGEN_INPUT")]
    pub input: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, short = 'o', env = "METAGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Rows generated concurrently per batch
    #[arg(long, env = "METAGEN_BATCH_SIZE")]
    pub batch_size: Option<usize>,

    /// Pause between batches, in milliseconds
    #[arg(long, env = "METAGEN_BATCH_DELAY_MS")]
    pub batch_delay_ms: Option<u64>,

    /// Only process the first N rows
    #[arg(long, env = "METAGEN_MAX_ROWS")]
    pub max_rows: Option<usize>,

    /// API key for the generation service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat model identifier
    #[arg(long, env = "METAGEN_MODEL")]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "METAGEN_BASE_URL")]
    pub base_url: Option<String>,

    /// Sampling temperature
    #[arg(long, env = "METAGEN_TEMPERATURE")]
    pub temperature: Option<f32>,

    /// Per-request timeout in seconds
    #[arg(long, env = "METAGEN_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log filter directive
    #[arg(long, env = "METAGEN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, env = "METAGEN_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Overlay the flags that were given onto `config`
    pub fn apply(self, config: &mut Config) {
        let pipeline = &mut config.pipeline;
        if let Some(input) = self.input {
            pipeline.input_path = input;
        }
        if let Some(output) = self.output {
            pipeline.output_path = output;
        }
        if let Some(batch_size) = self.batch_size {
            pipeline.batch_size = batch_size;
        }
        if let Some(delay) = self.batch_delay_ms {
            pipeline.batch_delay_ms = delay;
        }
        if self.max_rows.is_some() {
            pipeline.max_rows = self.max_rows;
        }

        let provider = &mut config.provider;
        if let Some(api_key) = self.api_key {
            provider.api_key = api_key;
        }
        if let Some(model) = self.model {
            provider.model = model;
        }
        if let Some(base_url) = self.base_url {
            provider.base_url = base_url;
        }
        if let Some(temperature) = self.temperature {
            provider.temperature = temperature;
        }
        if let Some(timeout) = self.timeout_secs {
            provider.timeout_secs = timeout;
        }

        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}
