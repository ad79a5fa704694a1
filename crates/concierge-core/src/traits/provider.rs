// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for LLM chat backends (OpenAI-compatible APIs, mocks).

use async_trait::async_trait;

use crate::error::ConciergeError;
use crate::types::{AssistantReply, ChatRequest};

/// A chat completion backend.
///
/// The orchestrator depends on this seam only; the production implementation
/// lives in `concierge-openai`, and tests substitute a scripted mock.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends a completion request and returns the first choice's message.
    async fn chat(&self, request: ChatRequest) -> Result<AssistantReply, ConciergeError>;
}
