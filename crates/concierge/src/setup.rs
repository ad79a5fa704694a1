// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared assembly: config -> catalog + storage + provider -> [`Concierge`].

use std::sync::Arc;

use concierge_agent::Concierge;
use concierge_catalog::Catalog;
use concierge_config::ConciergeConfig;
use concierge_core::ConciergeError;
use concierge_openai::OpenAiClient;
use concierge_storage::Database;

/// Resolves the API key: config first, then the `OPENAI_API_KEY` env var.
pub fn resolve_api_key(config: &ConciergeConfig) -> Result<String, ConciergeError> {
    config
        .openai
        .api_key
        .clone()
        .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        .ok_or_else(|| {
            ConciergeError::Config(
                "OpenAI API key required. Set openai.api_key in concierge.toml or the \
                 OPENAI_API_KEY environment variable."
                    .to_string(),
            )
        })
}

/// Opens storage and assembles the full assistant from configuration.
pub async fn build_concierge(config: &ConciergeConfig) -> Result<Concierge, ConciergeError> {
    let api_key = resolve_api_key(config)?;

    if let Some(parent) = std::path::Path::new(&config.storage.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConciergeError::Config(format!("cannot create data dir: {e}")))?;
        }
    }
    let db = Database::open(&config.storage.database_path).await?;

    let provider = Arc::new(OpenAiClient::new(
        &api_key,
        config.openai.base_url.as_deref(),
    )?);

    Ok(Concierge::new(
        db,
        provider,
        Arc::new(Catalog::sample()),
        config.openai.model.clone(),
        config.agent.resolve_system_prompt(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_a_config_error() {
        let config = ConciergeConfig::default();
        // Only meaningful when the environment does not provide a key.
        if std::env::var("OPENAI_API_KEY").is_err() {
            let err = resolve_api_key(&config).unwrap_err();
            assert!(err.to_string().contains("OpenAI API key required"));
        }
    }

    #[test]
    fn config_key_wins_over_environment() {
        let mut config = ConciergeConfig::default();
        config.openai.api_key = Some("sk-from-config".into());
        assert_eq!(resolve_api_key(&config).unwrap(), "sk-from-config");
    }
}
