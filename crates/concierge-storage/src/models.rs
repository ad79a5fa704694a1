// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.

use rusqlite::ToSql;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Session state tag written after every completed turn.
pub const STATE_RUNNING: &str = "RUNNING";
/// Session state tag assumed for sessions that have no row yet. Never
/// explicitly re-applied once a session exists.
pub const STATE_IDLE: &str = "IDLE";

/// One persisted chat session: the full transcript as a JSON blob plus a
/// coarse state tag. Upserted wholesale on every turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub session_id: String,
    pub context: String,
    pub state: String,
}

/// Lifecycle status of a reservation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl ToSql for ReservationStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for ReservationStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// One reservation row. Never deleted; cancellation flips `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    pub reservation_id: String,
    pub hotel_id: String,
    pub room_type: String,
    pub customer_name: String,
    pub check_in: String,
    pub check_out: String,
    pub status: ReservationStatus,
    pub created_at: String,
}

/// A confirmed booking's date range, exported for the availability calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedRange {
    pub check_in: String,
    pub check_out: String,
}
