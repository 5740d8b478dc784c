//! OpenAI-compatible chat completions provider

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

use super::StructuredCompletion;
use crate::config::ProviderSettings;
use crate::core::models::openai::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, JsonSchemaFormat, ResponseFormat,
};
use crate::utils::error::{MetagenError, Result};

/// Chat completions client for OpenAI and API-compatible services
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    http_client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
}

impl OpenAiProvider {
    /// Create a new provider from settings
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        if settings.api_key.trim().is_empty() {
            return Err(MetagenError::config("missing OpenAI API key"));
        }

        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", settings.api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth)
                .map_err(|e| MetagenError::config(format!("invalid OpenAI API key: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| MetagenError::config(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = format!("{}/chat/completions", settings.base_url.trim_end_matches('/'));

        Ok(Self {
            http_client,
            endpoint,
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }

    /// Chat completions endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request(&self, prompt: &str, schema: &JsonSchemaFormat) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: Some(self.temperature),
            response_format: Some(ResponseFormat::json_schema(schema.clone())),
        }
    }
}

/// Pull the JSON document out of the first choice
fn extract_structured(response: ChatCompletionResponse) -> Result<Value> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| MetagenError::parsing("response contained no choices"))?;

    if let Some(refusal) = choice.message.refusal {
        return Err(MetagenError::Refusal(refusal));
    }

    // A length cutoff leaves the JSON document incomplete
    if choice.finish_reason.as_deref() == Some("length") {
        return Err(MetagenError::parsing(
            "response was cut off at the token limit",
        ));
    }

    let content = choice
        .message
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| MetagenError::parsing("response message had no content"))?;

    serde_json::from_str(&content)
        .map_err(|e| MetagenError::parsing(format!("content is not valid JSON: {}", e)))
}

#[async_trait]
impl StructuredCompletion for OpenAiProvider {
    async fn complete_structured(&self, prompt: &str, schema: &JsonSchemaFormat) -> Result<Value> {
        let request = self.build_request(prompt, schema);

        debug!("Calling chat completions: {}", self.endpoint);

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(MetagenError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(MetagenError::api(status.as_u16(), error_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| MetagenError::parsing(e.to_string()))?;

        if let Some(usage) = &parsed.usage {
            debug!(
                response_id = %parsed.id,
                model = %parsed.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Chat completion received"
            );
        }

        extract_structured(parsed)
    }
}
