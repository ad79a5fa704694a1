// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reservation row operations, including the half-open overlap check used
//! for availability.

use concierge_core::ConciergeError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{BookedRange, Reservation, ReservationStatus};

fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    Ok(Reservation {
        reservation_id: row.get(0)?,
        hotel_id: row.get(1)?,
        room_type: row.get(2)?,
        customer_name: row.get(3)?,
        check_in: row.get(4)?,
        check_out: row.get(5)?,
        status: row.get(6)?,
        created_at: row.get(7)?,
    })
}

/// Insert a new reservation row.
pub async fn insert_reservation(
    db: &Database,
    reservation: &Reservation,
) -> Result<(), ConciergeError> {
    let reservation = reservation.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO reservations
                     (reservation_id, hotel_id, room_type, customer_name,
                      check_in, check_out, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    reservation.reservation_id,
                    reservation.hotel_id,
                    reservation.room_type,
                    reservation.customer_name,
                    reservation.check_in,
                    reservation.check_out,
                    reservation.status,
                    reservation.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a reservation by id.
pub async fn get_reservation(
    db: &Database,
    reservation_id: &str,
) -> Result<Option<Reservation>, ConciergeError> {
    let reservation_id = reservation_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT reservation_id, hotel_id, room_type, customer_name,
                        check_in, check_out, status, created_at
                 FROM reservations WHERE reservation_id = ?1",
            )?;
            let result = stmt.query_row(params![reservation_id], row_to_reservation);
            match result {
                Ok(reservation) => Ok(Some(reservation)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Set the status of a reservation. Returns the number of rows updated.
pub async fn set_reservation_status(
    db: &Database,
    reservation_id: &str,
    status: ReservationStatus,
) -> Result<usize, ConciergeError> {
    let reservation_id = reservation_id.to_string();
    db.connection()
        .call(move |conn| {
            let updated = conn.execute(
                "UPDATE reservations SET status = ?1 WHERE reservation_id = ?2",
                params![status, reservation_id],
            )?;
            Ok(updated)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Count confirmed reservations for (hotel, room type) whose date range
/// overlaps `[check_in, check_out)`.
///
/// Overlap rule is half-open: `existing.check_in < new.check_out AND
/// existing.check_out > new.check_in`, compared as strings. A checkout on
/// the same day as a new check-in does not conflict. Cancelled rows never
/// count.
pub async fn count_overlapping(
    db: &Database,
    hotel_id: &str,
    room_type: &str,
    check_in: &str,
    check_out: &str,
) -> Result<i64, ConciergeError> {
    let hotel_id = hotel_id.to_string();
    let room_type = room_type.to_string();
    let check_in = check_in.to_string();
    let check_out = check_out.to_string();
    db.connection()
        .call(move |conn| {
            let count = conn.query_row(
                "SELECT count(*) FROM reservations
                 WHERE hotel_id = ?1
                   AND room_type = ?2
                   AND status = 'confirmed'
                   AND (check_in < ?3 AND check_out > ?4)",
                params![hotel_id, room_type, check_out, check_in],
                |row| row.get::<_, i64>(0),
            )?;
            Ok(count)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Confirmed booking ranges for a hotel, for the availability calendar.
pub async fn confirmed_ranges(
    db: &Database,
    hotel_id: &str,
) -> Result<Vec<BookedRange>, ConciergeError> {
    let hotel_id = hotel_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT check_in, check_out FROM reservations
                 WHERE hotel_id = ?1 AND status = 'confirmed'
                 ORDER BY check_in ASC",
            )?;
            let rows = stmt.query_map(params![hotel_id], |row| {
                Ok(BookedRange {
                    check_in: row.get(0)?,
                    check_out: row.get(1)?,
                })
            })?;
            let mut ranges = Vec::new();
            for row in rows {
                ranges.push(row?);
            }
            Ok(ranges)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
