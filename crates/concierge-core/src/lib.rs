// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Concierge booking assistant.
//!
//! Provides the shared error type, the chat transcript / provider request
//! types, and the [`ChatProvider`] trait implemented by LLM backends.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ConciergeError;
pub use traits::ChatProvider;
pub use types::{
    AssistantReply, ChatMessage, ChatRequest, ChatRole, FunctionCall, FunctionDefinition,
    ToolCallRequest, ToolChoice, ToolDefinition, TurnReply, UiHints,
};
