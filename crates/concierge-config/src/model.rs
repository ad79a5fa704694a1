// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Concierge booking assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Default system prompt used when neither `system_prompt` nor
/// `system_prompt_file` is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are an AI hotel concierge. You help guests search for hotels, view hotel \
details, book rooms, cancel reservations, and discover activities in the \
destination city. Use the available tools to answer; never invent hotels, \
prices, or reservation ids. Dates are YYYY-MM-DD. Before booking, make sure \
you have the hotel, room type, guest name, and both dates. Keep replies \
short, warm, and concrete.";

/// Top-level Concierge configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConciergeConfig {
    /// Agent identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// OpenAI-compatible API settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Agent identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inline system prompt string. Overridden by `system_prompt_file` if both set.
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Path to a markdown file containing the system prompt.
    /// Takes precedence over `system_prompt` if both are set.
    #[serde(default)]
    pub system_prompt_file: Option<String>,
}

impl AgentConfig {
    /// Resolves the effective system prompt: file, then inline, then default.
    ///
    /// An unreadable `system_prompt_file` falls back to the next source with
    /// a warning rather than failing startup.
    pub fn resolve_system_prompt(&self) -> String {
        if let Some(path) = &self.system_prompt_file {
            match std::fs::read_to_string(path) {
                Ok(text) => return text,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "system_prompt_file unreadable, falling back");
                }
            }
        }
        self.system_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            system_prompt: None,
            system_prompt_file: None,
        }
    }
}

fn default_agent_name() -> String {
    "concierge".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// OpenAI-compatible API configuration.
///
/// Works with OpenAI or any compatible endpoint (Groq, local gateways) when
/// `base_url` is set.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// API key. `None` requires the `OPENAI_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the API. `None` uses the official OpenAI endpoint.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Model identifier for chat completion requests.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("concierge").join("concierge.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("concierge.db"))
        .to_string_lossy()
        .into_owned()
}
