// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for OpenAI-compatible Chat Completions endpoints.
//!
//! Works against OpenAI or any compatible API (Groq, local gateways) when a
//! `base_url` is supplied. One request per call: no retry, no added timeout;
//! error bodies are preserved verbatim in the error message so callers can
//! pattern-match provider-specific failure markers.

use async_trait::async_trait;
use concierge_core::{AssistantReply, ChatProvider, ChatRequest, ConciergeError};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// Default base URL of the official OpenAI API.
const API_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for an OpenAI-compatible Chat Completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `api_key` - bearer token for the endpoint
    /// * `base_url` - endpoint base (e.g. "https://api.groq.com/openai/v1");
    ///   `None` uses the official OpenAI API
    pub fn new(api_key: &str, base_url: Option<&str>) -> Result<Self, ConciergeError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| ConciergeError::Config(format!("invalid API key header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ConciergeError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or(API_BASE_URL).trim_end_matches('/').to_string(),
        })
    }

    /// Sends a chat completion request and returns the parsed response.
    ///
    /// Non-2xx responses become [`ConciergeError::Provider`] carrying the
    /// decoded error body (type, code, and message) in the error text.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ConciergeError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ConciergeError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ConciergeError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        debug!(status = %status, "chat completion response received");

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => {
                    let kind = api_err.error.type_.as_deref().unwrap_or("unknown");
                    let code = api_err.error.code.as_deref().unwrap_or("none");
                    format!(
                        "API error ({kind}, code {code}): {}",
                        api_err.error.message
                    )
                }
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(ConciergeError::Provider {
                message,
                source: None,
            });
        }

        serde_json::from_str(&body).map_err(|e| ConciergeError::Provider {
            message: format!("failed to parse API response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAiClient {
    async fn chat(&self, request: ChatRequest) -> Result<AssistantReply, ConciergeError> {
        // tool_choice without tools is rejected by the API; omit both together.
        let tool_choice = if request.tools.is_empty() {
            None
        } else {
            Some(request.tool_choice)
        };
        let wire = ChatCompletionRequest {
            model: request.model,
            messages: request.messages,
            tools: request.tools,
            tool_choice,
        };

        let response = self.chat_completion(&wire).await?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ConciergeError::Provider {
                message: "response contained no choices".to_string(),
                source: None,
            })?;

        Ok(AssistantReply {
            content: choice.message.content,
            tool_calls: choice.message.tool_calls.unwrap_or_default(),
        })
    }
}
