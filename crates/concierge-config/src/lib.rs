// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Concierge booking assistant.
//!
//! TOML files merged in XDG order with `CONCIERGE_*` environment overrides,
//! extracted into [`model::ConciergeConfig`].

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::ConciergeConfig;
