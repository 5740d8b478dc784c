//! Mock chat completions server
//!
//! Thin wrapper over `wiremock` that answers `POST /v1/chat/completions` the
//! way an OpenAI-compatible service does.

use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Chat completion response whose message content is `content` as a JSON string
pub fn completion_body(content: &Value) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content.to_string()
            },
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 120, "completion_tokens": 60, "total_tokens": 180}
    })
}

/// Product id embedded in a prompt sent by the generator
pub fn prompt_product_id(request: &Request) -> Option<String> {
    let body: Value = serde_json::from_slice(&request.body).ok()?;
    let prompt = body["messages"][0]["content"].as_str()?;
    prompt
        .lines()
        .find_map(|line| line.strip_prefix("Product ID: "))
        .map(str::to_string)
}

/// Mock OpenAI-compatible server
pub struct MockCompletionServer {
    server: MockServer,
}

impl MockCompletionServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to configure the provider with
    pub fn base_url(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    /// Answer every request with the same structured content
    pub async fn mount_fixed(&self, content: Value) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header("authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(&content)))
            .mount(&self.server)
            .await;
    }

    /// Answer with a per-product meta description, failing the listed ids
    /// with HTTP 500
    pub async fn mount_echo(&self, fail_ids: &[&str]) {
        let fail_ids: Vec<String> = fail_ids.iter().map(|s| s.to_string()).collect();
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(move |request: &Request| {
                let id = prompt_product_id(request).unwrap_or_default();
                if fail_ids.contains(&id) {
                    return ResponseTemplate::new(500)
                        .set_body_json(json!({"error": {"message": "internal error"}}));
                }
                ResponseTemplate::new(200).set_body_json(completion_body(&json!({
                    "id": id,
                    "product_title": format!("Title {}", id),
                    "product_description": "Generated",
                    "product_type": "Generated",
                    "meta_description": format!("Meta for {}", id)
                })))
            })
            .mount(&self.server)
            .await;
    }

    /// Answer every request with `status` and a plain error body
    pub async fn mount_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(json!({"error": {"message": "mock failure"}})),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer with a raw chat completion body
    pub async fn mount_raw(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer successfully, but only after `delay`
    pub async fn mount_slow(&self, content: Value, delay: Duration) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body(&content))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request received so far
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }
}
