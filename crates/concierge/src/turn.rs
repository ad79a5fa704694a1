// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `concierge turn` command implementation.
//!
//! One-shot entry point for external front ends: processes a single user
//! message for a session and prints exactly one JSON object to stdout.
//! Errors never escape as non-JSON output; logs go to stderr.

use concierge_config::ConciergeConfig;
use concierge_core::TurnReply;
use tracing::error;

use crate::setup::build_concierge;

/// User-safe fallback when a turn fails outright.
const FALLBACK_TEXT: &str = "Sorry, something went wrong. Please try again.";

/// Runs one turn and prints the JSON reply to stdout.
///
/// Always exits with a valid JSON object on stdout, even on failure.
pub async fn run_turn(config: ConciergeConfig, session_id: &str, message: &str) {
    let reply = match execute(config, session_id, message).await {
        Ok(reply) => reply,
        Err(e) => {
            error!(session_id, error = %e, "turn failed");
            TurnReply {
                text: FALLBACK_TEXT.to_string(),
                ui_action: None,
            }
        }
    };

    match serde_json::to_string(&reply) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!(error = %e, "failed to serialize reply");
            println!("{{\"text\": \"{FALLBACK_TEXT}\"}}");
        }
    }
}

async fn execute(
    config: ConciergeConfig,
    session_id: &str,
    message: &str,
) -> Result<TurnReply, concierge_core::ConciergeError> {
    let concierge = build_concierge(&config).await?;
    concierge.run_turn(session_id, message).await
}
