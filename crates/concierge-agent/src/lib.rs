// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent loop and session persistence for the Concierge booking assistant.
//!
//! [`Concierge::run_turn`] is the turn entry point: it loads the session
//! transcript, runs the two-round tool-calling loop against the provider,
//! and persists the transcript back.

pub mod orchestrator;
pub mod session;
pub mod turn;

pub use orchestrator::Orchestrator;
pub use turn::Concierge;
