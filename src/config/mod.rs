//! Configuration management
//!
//! Defaults, an optional YAML file, then environment variables and flags,
//! in increasing order of precedence.

pub mod cli;
pub mod models;
pub mod validation;

pub use cli::Cli;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{MetagenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Load a `.env` file from the working directory or its parents.
///
/// A missing file is not an error; an unreadable or malformed one is.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    dotenv_outcome(dotenvy::dotenv())
}

fn dotenv_outcome<T>(result: dotenvy::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(loaded) => Ok(Some(loaded)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(MetagenError::config(format!(
            "Failed to load .env file: {}",
            e
        ))),
    }
}

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation service settings
    #[serde(default)]
    pub provider: ProviderSettings,
    /// Batch pipeline settings
    #[serde(default)]
    pub pipeline: PipelineSettings,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MetagenError::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| MetagenError::config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration file parsed");
        Ok(config)
    }

    /// Assemble configuration from the parsed command line.
    ///
    /// The result is validated.
    pub async fn load(cli: Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };
        cli.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.provider
            .validate()
            .map_err(|e| MetagenError::config(format!("Provider config error: {}", e)))?;

        self.pipeline
            .validate()
            .map_err(|e| MetagenError::config(format!("Pipeline config error: {}", e)))?;

        Ok(())
    }

    /// Pause between batches
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.pipeline.batch_delay_ms)
    }

}
