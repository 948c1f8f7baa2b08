//! OpenAI-compatible HTTP client implementing both capabilities.
//!
//! Works against any endpoint that speaks the `/embeddings` and
//! `/chat/completions` wire format, not just the upstream service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use reqdelta_core::Embedding;

use crate::embedder::EmbeddingProvider;
use crate::error::{ProviderError, Result};
use crate::generator::TextGenerator;

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Chat model for gap analysis and recommendations
    pub model: String,
    pub embedding_model: String,
    pub temperature: f32,
    /// Per-request timeout; an in-flight call never outlives this
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-4".to_string(),
            embedding_model: "text-embedding-ada-002".to_string(),
            temperature: 0.3,
            timeout: Duration::from_secs(60),
        }
    }
}

/// HTTP client for OpenAI-compatible embedding and chat endpoints.
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(ref key) = self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs);
            return Err(ProviderError::RateLimited { retry_after });
        }
        if status.is_server_error() {
            return Err(ProviderError::Unavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(ProviderError::InvalidResponse(format!("HTTP {status}")));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Deserialize)]
struct EmbeddingItem {
    index: usize,
    embedding: Vec<f32>,
}

#[async_trait]
impl EmbeddingProvider for OpenAiClient {
    async fn embed_many(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = texts.len(), model = %self.config.embedding_model, "fetching embeddings");
        let body = EmbeddingsRequest {
            model: &self.config.embedding_model,
            input: texts,
        };
        let mut response: EmbeddingsResponse = self.post_json("embeddings", &body).await?;

        if response.data.len() != texts.len() {
            return Err(ProviderError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                response.data.len()
            )));
        }

        // The API tags each item with its input index; sort to restore order
        response.data.sort_by_key(|item| item.index);
        Ok(response
            .data
            .into_iter()
            .map(|item| Embedding::new(item.embedding))
            .collect())
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String> {
        let mut messages = Vec::new();
        if let Some(system) = system {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.to_string(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        });

        debug!(model = %self.config.model, "requesting completion");
        let body = ChatRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
        };
        let response: ChatResponse = self.post_json("chat/completions", &body).await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::InvalidResponse("no choices in response".to_string()))
    }
}
