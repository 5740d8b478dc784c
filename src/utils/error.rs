//! Error handling for the metadata generator
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, MetagenError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum MetagenError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited file errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Network errors
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Non-success response from the generation service
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// The model declined to answer
    #[error("Model refused the request: {0}")]
    Refusal(String),
}

impl MetagenError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a parsing error
    pub fn parsing(message: impl Into<String>) -> Self {
        Self::Parsing(message.into())
    }

    /// Create an API error from a status code and response body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Map a transport error, keeping timeouts distinct
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            Self::Network(err.to_string())
        } else {
            Self::HttpClient(err)
        }
    }
}
