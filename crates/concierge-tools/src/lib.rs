// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool layer for the Concierge booking assistant.
//!
//! The five model-facing tools (search, details, booking, cancellation,
//! recommendations) plus the tool-layer-only modification operation, all
//! executed through a closed [`ToolCall`] enum with typed arguments.

pub mod call;
pub mod recommend;
pub mod schema;
pub mod toolbox;

pub use call::{
    BookArgs, CancelArgs, DetailsArgs, RecommendArgs, SearchArgs, ToolCall, ToolKind,
};
pub use recommend::recommend_activities;
pub use schema::tool_definitions;
pub use toolbox::Toolbox;
