// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible Chat Completions provider for the Concierge booking
//! assistant.
//!
//! [`OpenAiClient`] implements [`concierge_core::ChatProvider`] against any
//! OpenAI-compatible endpoint (OpenAI, Groq, local gateways).

pub mod client;
pub mod types;

pub use client::OpenAiClient;
