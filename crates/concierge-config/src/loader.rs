// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./concierge.toml` > `~/.config/concierge/concierge.toml`
//! > `/etc/concierge/concierge.toml` with environment variable overrides via
//! `CONCIERGE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ConciergeConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/concierge/concierge.toml` (system-wide)
/// 3. `~/.config/concierge/concierge.toml` (user XDG config)
/// 4. `./concierge.toml` (local directory)
/// 5. `CONCIERGE_*` environment variables
pub fn load_config() -> Result<ConciergeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ConciergeConfig::default()))
        .merge(Toml::file("/etc/concierge/concierge.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("concierge/concierge.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("concierge.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<ConciergeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ConciergeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ConciergeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ConciergeConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `CONCIERGE_OPENAI_BASE_URL` must map to
/// `openai.base_url`, not `openai.base.url`.
fn env_provider() -> Env {
    Env::prefixed("CONCIERGE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: CONCIERGE_OPENAI_API_KEY -> "openai_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
