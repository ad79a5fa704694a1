// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session row operations.
//!
//! Sessions are written wholesale: every turn overwrites the full context
//! blob and state tag for the session id. Concurrent turns for the same id
//! are last-write-wins; callers must guarantee at most one in-flight turn
//! per session.

use concierge_core::ConciergeError;
use rusqlite::params;

use crate::database::Database;
use crate::models::SessionRecord;

/// Insert or fully overwrite the session row.
pub async fn upsert_session(
    db: &Database,
    session_id: &str,
    context: &str,
    state: &str,
) -> Result<(), ConciergeError> {
    let session_id = session_id.to_string();
    let context = context.to_string();
    let state = state.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO sessions (session_id, context, state)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(session_id) DO UPDATE SET
                     context = excluded.context,
                     state = excluded.state",
                params![session_id, context, state],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a session row by id.
pub async fn get_session(
    db: &Database,
    session_id: &str,
) -> Result<Option<SessionRecord>, ConciergeError> {
    let session_id = session_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT session_id, context, state FROM sessions WHERE session_id = ?1",
            )?;
            let result = stmt.query_row(params![session_id], |row| {
                Ok(SessionRecord {
                    session_id: row.get(0)?,
                    context: row.get(1)?,
                    state: row.get(2)?,
                })
            });
            match result {
                Ok(session) => Ok(Some(session)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}
