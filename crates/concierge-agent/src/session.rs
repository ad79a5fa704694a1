// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session adapter: bridges the orchestrator's in-memory transcript to the
//! sessions table.
//!
//! The transcript is stored wholesale as one JSON blob per session id. A
//! context blob that does not deserialize as a message list is treated as
//! no history at all, so a corrupted row can never fail a turn.

use concierge_core::{ChatMessage, ConciergeError};
use concierge_storage::{Database, STATE_RUNNING, queries};
use tracing::warn;

/// Loads the stored transcript for a session.
///
/// Returns `None` when the session has no row yet or its context is not a
/// recognizable message sequence.
pub async fn load_history(
    db: &Database,
    session_id: &str,
) -> Result<Option<Vec<ChatMessage>>, ConciergeError> {
    let Some(record) = queries::sessions::get_session(db, session_id).await? else {
        return Ok(None);
    };

    match serde_json::from_str::<Vec<ChatMessage>>(&record.context) {
        Ok(messages) => Ok(Some(messages)),
        Err(e) => {
            warn!(
                session_id,
                error = %e,
                "stored context is not a message list, starting fresh"
            );
            Ok(None)
        }
    }
}

/// Persists the full transcript for a session, marking it `RUNNING`.
pub async fn save_history(
    db: &Database,
    session_id: &str,
    messages: &[ChatMessage],
) -> Result<(), ConciergeError> {
    let context =
        serde_json::to_string(messages).map_err(|e| ConciergeError::Internal(e.to_string()))?;
    queries::sessions::upsert_session(db, session_id, &context, STATE_RUNNING).await
}
