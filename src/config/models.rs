//! Configuration data models

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default OpenAI-compatible API base URL
pub fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

/// Default chat model
pub fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

/// Default sampling temperature
pub fn default_temperature() -> f32 {
    0.7
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default input file
pub fn default_input_path() -> PathBuf {
    PathBuf::from("products.csv")
}

/// Default output file
pub fn default_output_path() -> PathBuf {
    PathBuf::from("products_with_meta.csv")
}

/// Default number of rows per batch
pub fn default_batch_size() -> usize {
    5
}

/// Default pause between batches in milliseconds
pub fn default_batch_delay_ms() -> u64 {
    1000
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Generation service settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API key, never written back out
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ProviderSettings {
    /// Timeout applied to every request
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ProviderSettings")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Delimited input file with a header row
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    /// Destination for the enriched table
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Maximum rows generated concurrently
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Fixed pause between consecutive batches
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
    /// Only process the first N rows
    #[serde(default)]
    pub max_rows: Option<usize>,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
            max_rows: None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `seo_metagen=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}
