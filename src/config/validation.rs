//! Configuration validation

use super::models::*;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ProviderSettings {
    fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("API key is required (set OPENAI_API_KEY)".to_string());
        }

        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "Base URL must use http:// or https:// scheme, got: {}",
                self.base_url
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got: {}",
                self.temperature
            ));
        }

        if self.timeout_secs == 0 {
            return Err("Timeout must be at least 1 second".to_string());
        }

        Ok(())
    }
}

impl Validate for PipelineSettings {
    fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("Batch size must be greater than 0".to_string());
        }

        if self.input_path.as_os_str().is_empty() {
            return Err("Input path cannot be empty".to_string());
        }

        if self.output_path.as_os_str().is_empty() {
            return Err("Output path cannot be empty".to_string());
        }

        Ok(())
    }
}
