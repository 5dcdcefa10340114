//! Cohere chat API client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::CompletionClient;
use crate::error::{Error, Result};

/// Default Cohere API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.cohere.com";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    text: String,
}

/// Client for Cohere's `/v1/chat` endpoint.
#[derive(Debug, Clone)]
pub struct CohereClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl CohereClient {
    /// Create a client for the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (for local stand-ins).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CompletionClient for CohereClient {
    async fn chat(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            message: prompt,
        };

        let response = self
            .http
            .post(format!("{}/v1/chat", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Completion {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Completion {
                reason: format!("HTTP {status}: {body}"),
            });
        }

        let reply: ChatResponse = response.json().await.map_err(|e| Error::Completion {
            reason: e.to_string(),
        })?;

        Ok(reply.text)
    }
}
