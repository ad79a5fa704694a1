// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Concierge booking assistant.

use thiserror::Error;

/// The primary error type used across all Concierge crates.
///
/// Domain-level failures (hotel not found, room unavailable, reservation not
/// found) are NOT errors: they travel as structured payloads through the
/// tool-result channel so the model can narrate them. This enum covers the
/// infrastructure failures around that channel.
#[derive(Debug, Error)]
pub enum ConciergeError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// LLM provider errors (HTTP failure, API error body, malformed response).
    ///
    /// `message` carries the raw provider error text: the orchestrator
    /// pattern-matches it to recover from provider-specific failures.
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Tool layer errors (malformed argument blob, unknown tool name).
    #[error("tool error: {message}")]
    Tool { message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
