// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock LLM provider for deterministic testing.
//!
//! `MockProvider` implements `ChatProvider` with pre-configured replies,
//! enabling fast, CI-runnable tests without external API calls. Every
//! request it receives is recorded so tests can assert on the transcript
//! and tool-choice mode the orchestrator sent.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use concierge_core::{
    AssistantReply, ChatProvider, ChatRequest, ConciergeError, FunctionCall, ToolCallRequest,
};

/// A scripted reply: either an assistant turn or a provider error.
type ScriptedReply = Result<AssistantReply, String>;

/// A mock LLM provider that returns pre-configured replies in FIFO order.
///
/// When the queue is empty, a default text reply is returned.
pub struct MockProvider {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockProvider {
    /// Creates a mock provider with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a plain text reply.
    pub async fn push_text(&self, text: impl Into<String>) {
        self.replies.lock().await.push_back(Ok(AssistantReply {
            content: Some(text.into()),
            tool_calls: vec![],
        }));
    }

    /// Queues a reply carrying tool calls (content absent).
    pub async fn push_tool_calls(&self, calls: Vec<(&str, &str, &str)>) {
        let tool_calls = calls
            .into_iter()
            .map(|(id, name, arguments)| ToolCallRequest {
                id: id.to_string(),
                call_type: "function".to_string(),
                function: FunctionCall {
                    name: name.to_string(),
                    arguments: arguments.to_string(),
                },
            })
            .collect();
        self.replies.lock().await.push_back(Ok(AssistantReply {
            content: None,
            tool_calls,
        }));
    }

    /// Queues a provider error with the given message.
    pub async fn push_error(&self, message: impl Into<String>) {
        self.replies.lock().await.push_back(Err(message.into()));
    }

    /// Returns the requests received so far, in order.
    pub async fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    async fn chat(&self, request: ChatRequest) -> Result<AssistantReply, ConciergeError> {
        self.requests.lock().await.push(request);
        match self.replies.lock().await.pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(ConciergeError::Provider {
                message,
                source: None,
            }),
            None => Ok(AssistantReply {
                content: Some("mock reply".to_string()),
                tool_calls: vec![],
            }),
        }
    }
}
