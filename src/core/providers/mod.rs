//! Text generation providers
//!
//! The pipeline needs exactly one capability from a provider: turn a prompt
//! and a JSON schema into a JSON value that follows the schema, or fail.

pub mod openai;

pub use openai::OpenAiProvider;

use crate::core::models::openai::JsonSchemaFormat;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Structured completion over a single user prompt.
///
/// Implementations make one attempt per call and never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StructuredCompletion: Send + Sync {
    /// Send `prompt` and return the model's answer parsed as JSON
    async fn complete_structured(&self, prompt: &str, schema: &JsonSchemaFormat) -> Result<Value>;
}
