// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Concierge configuration system.

use concierge_config::load_config_from_str;

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_concierge_config() {
    let toml = r#"
[agent]
name = "test-concierge"
log_level = "debug"
system_prompt = "You book rooms."

[openai]
api_key = "sk-test-123"
base_url = "https://api.groq.com/openai/v1"
model = "llama-3.3-70b-versatile"

[storage]
database_path = "/tmp/test.db"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-concierge");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.agent.system_prompt.as_deref(), Some("You book rooms."));
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-test-123"));
    assert_eq!(
        config.openai.base_url.as_deref(),
        Some("https://api.groq.com/openai/v1")
    );
    assert_eq!(config.openai.model, "llama-3.3-70b-versatile");
    assert_eq!(config.storage.database_path, "/tmp/test.db");
}

/// Empty TOML yields compiled defaults.
#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").expect("empty config should be valid");
    assert_eq!(config.agent.name, "concierge");
    assert_eq!(config.openai.model, "gpt-4o");
    assert!(config.openai.api_key.is_none());
}

/// Unknown field in [agent] section is rejected.
#[test]
fn unknown_field_in_agent_produces_error() {
    let toml = r#"
[agent]
naem = "test"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("naem"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown field in [openai] section is rejected.
#[test]
fn unknown_field_in_openai_produces_error() {
    let toml = r#"
[openai]
api_keey = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_keey"),
        "got: {err_str}"
    );
}

/// Environment variable CONCIERGE_AGENT_NAME overrides agent.name in TOML.
#[test]
fn env_override_beats_toml_value() {
    // We test this via the Figment builder directly to control env vars in test
    use concierge_config::ConciergeConfig;
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let toml_content = r#"
[agent]
name = "from-toml"
"#;

    // Simulate CONCIERGE_AGENT_NAME by merging after the TOML layer
    let config: ConciergeConfig = Figment::new()
        .merge(Serialized::defaults(ConciergeConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("agent.name", "from-env"))
        .extract()
        .expect("should merge env override");

    assert_eq!(config.agent.name, "from-env");
}

/// CONCIERGE_OPENAI_BASE_URL maps to openai.base_url (NOT openai.base.url --
/// underscore-containing keys must survive the section mapping).
#[test]
fn env_mapping_keeps_underscored_keys_intact() {
    use concierge_config::ConciergeConfig;
    use figment::{Figment, providers::Serialized};

    let config: ConciergeConfig = Figment::new()
        .merge(Serialized::defaults(ConciergeConfig::default()))
        .merge(("openai.base_url", "http://localhost:11434/v1"))
        .extract()
        .expect("should set base_url via dot notation");

    assert_eq!(
        config.openai.base_url.as_deref(),
        Some("http://localhost:11434/v1")
    );
}

/// Partial sections keep defaults for unset fields.
#[test]
fn partial_section_keeps_defaults() {
    let toml = r#"
[openai]
api_key = "sk-partial"
"#;

    let config = load_config_from_str(toml).unwrap();
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-partial"));
    assert_eq!(config.openai.model, "gpt-4o");
    assert!(config.openai.base_url.is_none());
}
