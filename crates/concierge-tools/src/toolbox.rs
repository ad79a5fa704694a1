// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool implementations over the catalog and the reservation store.
//!
//! Every tool returns a `serde_json::Value` payload for the tool-result
//! channel. Domain failures (hotel not found, room unavailable, reservation
//! not found) are `{"error": ...}` payloads, not `Err`: the model narrates
//! them. `Err` is reserved for infrastructure failures (storage), which
//! abort the turn.

use std::sync::Arc;

use chrono::Utc;
use concierge_catalog::Catalog;
use concierge_core::ConciergeError;
use concierge_storage::{Database, Reservation, ReservationStatus, queries};
use rand::Rng;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::call::{BookArgs, CancelArgs, DetailsArgs, SearchArgs, ToolCall};
use crate::recommend::recommend_activities;

/// Executes tool calls against the injected catalog and store.
#[derive(Clone)]
pub struct Toolbox {
    catalog: Arc<Catalog>,
    db: Database,
}

impl Toolbox {
    /// Creates a toolbox over the given catalog and database.
    pub fn new(catalog: Arc<Catalog>, db: Database) -> Self {
        Self { catalog, db }
    }

    /// The catalog this toolbox searches.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Executes one parsed tool call and returns its result payload.
    pub async fn dispatch(&self, call: &ToolCall) -> Result<Value, ConciergeError> {
        debug!(tool = %call.kind(), "dispatching tool call");
        match call {
            ToolCall::SearchHotels(args) => self.search_hotels(args),
            ToolCall::ShowHotelDetails(args) => Ok(self.show_hotel_details(args)),
            ToolCall::BookRoom(args) => self.book_room(args).await,
            ToolCall::CancelReservation(args) => self.cancel_reservation(args).await,
            ToolCall::RecommendActivities(args) => {
                Ok(json!(recommend_activities(&args.city)))
            }
        }
    }

    fn search_hotels(&self, args: &SearchArgs) -> Result<Value, ConciergeError> {
        let results = self.catalog.search(&args.to_query());
        debug!(city = %args.city, results = results.len(), "hotel search");
        serde_json::to_value(&results).map_err(|e| ConciergeError::Internal(e.to_string()))
    }

    fn show_hotel_details(&self, args: &DetailsArgs) -> Value {
        match self.catalog.get(&args.hotel_id) {
            Some(hotel) => json!(hotel),
            None => json!({"error": "Hotel not found"}),
        }
    }

    /// Returns true if no confirmed reservation for the same hotel and room
    /// type overlaps the half-open range `[check_in, check_out)`.
    pub async fn check_availability(
        &self,
        hotel_id: &str,
        room_type: &str,
        check_in: &str,
        check_out: &str,
    ) -> Result<bool, ConciergeError> {
        let overlapping =
            queries::reservations::count_overlapping(&self.db, hotel_id, room_type, check_in, check_out)
                .await?;
        Ok(overlapping == 0)
    }

    async fn book_room(&self, args: &BookArgs) -> Result<Value, ConciergeError> {
        let available = self
            .check_availability(&args.hotel_id, &args.room_type, &args.check_in, &args.check_out)
            .await?;
        if !available {
            return Ok(json!({"error": "Room is defined as unavailable for these dates."}));
        }

        // 4-digit random suffix, no uniqueness check; a collision surfaces
        // as a primary-key insert failure.
        let reservation_id = format!("RES-{}", rand::thread_rng().gen_range(1000..=9999));
        let reservation = Reservation {
            reservation_id: reservation_id.clone(),
            hotel_id: args.hotel_id.clone(),
            room_type: args.room_type.clone(),
            customer_name: args.customer_name.clone(),
            check_in: args.check_in.clone(),
            check_out: args.check_out.clone(),
            status: ReservationStatus::Confirmed,
            created_at: Utc::now().to_rfc3339(),
        };
        queries::reservations::insert_reservation(&self.db, &reservation).await?;

        info!(
            reservation_id = %reservation_id,
            hotel_id = %args.hotel_id,
            room_type = %args.room_type,
            "reservation created"
        );
        Ok(json!({
            "reservation_id": reservation_id,
            "status": "confirmed",
            "message": "Booking successful!"
        }))
    }

    async fn cancel_reservation(&self, args: &CancelArgs) -> Result<Value, ConciergeError> {
        match queries::reservations::get_reservation(&self.db, &args.reservation_id).await? {
            Some(_) => {
                queries::reservations::set_reservation_status(
                    &self.db,
                    &args.reservation_id,
                    ReservationStatus::Cancelled,
                )
                .await?;
                info!(reservation_id = %args.reservation_id, "reservation cancelled");
                Ok(json!({"status": "success", "message": "Reservation cancelled"}))
            }
            None => Ok(json!({"error": "Reservation not found"})),
        }
    }

    /// Acknowledges a date change without persisting it.
    ///
    /// Tool-layer operation only; not offered to the model. The stored
    /// check_in/check_out are left untouched.
    pub async fn modify_reservation(
        &self,
        reservation_id: &str,
        new_check_in: &str,
        new_check_out: &str,
    ) -> Result<Value, ConciergeError> {
        debug!(reservation_id, new_check_in, new_check_out, "modify requested");
        match queries::reservations::get_reservation(&self.db, reservation_id).await? {
            Some(_) => Ok(json!({"status": "success", "message": "Dates updated"})),
            None => Ok(json!({"error": "Reservation not found"})),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::ToolCall;
    use tempfile::tempdir;

    async fn setup_toolbox() -> (Toolbox, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (Toolbox::new(Arc::new(Catalog::sample()), db), dir)
    }

    async fn book(toolbox: &Toolbox, check_in: &str, check_out: &str) -> Value {
        let call = ToolCall::parse(
            "book_room",
            &json!({
                "hotel_id": "h1",
                "room_type": "Standard",
                "customer_name": "Grace Hopper",
                "check_in": check_in,
                "check_out": check_out,
            })
            .to_string(),
        )
        .unwrap();
        toolbox.dispatch(&call).await.unwrap()
    }

    #[tokio::test]
    async fn search_tool_returns_matching_hotels() {
        let (toolbox, _dir) = setup_toolbox().await;
        let call = ToolCall::parse(
            "search_hotels",
            r#"{"city": "Marrakech", "budget": 50}"#,
        )
        .unwrap();
        let result = toolbox.dispatch(&call).await.unwrap();
        let hotels = result.as_array().unwrap();
        assert_eq!(hotels.len(), 1);
        assert_eq!(hotels[0]["id"], "h3");
    }

    #[tokio::test]
    async fn details_tool_returns_hotel_or_error_payload() {
        let (toolbox, _dir) = setup_toolbox().await;

        let call = ToolCall::parse("show_hotel_details", r#"{"hotel_id": "h6"}"#).unwrap();
        let result = toolbox.dispatch(&call).await.unwrap();
        assert_eq!(result["name"], "Park Hyatt Tokyo");

        let call = ToolCall::parse("show_hotel_details", r#"{"hotel_id": "h99"}"#).unwrap();
        let result = toolbox.dispatch(&call).await.unwrap();
        assert_eq!(result["error"], "Hotel not found");
    }

    #[tokio::test]
    async fn booking_respects_half_open_overlap() {
        let (toolbox, _dir) = setup_toolbox().await;

        let first = book(&toolbox, "2025-06-01", "2025-06-03").await;
        assert_eq!(first["status"], "confirmed");
        assert!(
            first["reservation_id"].as_str().unwrap().starts_with("RES-"),
            "got: {first}"
        );

        // Overlapping range is rejected without side effects.
        let second = book(&toolbox, "2025-06-02", "2025-06-04").await;
        assert_eq!(
            second["error"],
            "Room is defined as unavailable for these dates."
        );

        // Touching boundary (checkout day == new check-in day) succeeds.
        let third = book(&toolbox, "2025-06-03", "2025-06-05").await;
        assert_eq!(third["status"], "confirmed");
    }

    #[tokio::test]
    async fn disjoint_bookings_both_succeed() {
        let (toolbox, _dir) = setup_toolbox().await;
        let a = book(&toolbox, "2025-06-01", "2025-06-03").await;
        let b = book(&toolbox, "2025-07-01", "2025-07-04").await;
        assert_eq!(a["status"], "confirmed");
        assert_eq!(b["status"], "confirmed");
    }

    #[tokio::test]
    async fn cancelling_frees_the_dates_and_is_idempotent() {
        let (toolbox, _dir) = setup_toolbox().await;

        let booked = book(&toolbox, "2025-06-01", "2025-06-03").await;
        let reservation_id = booked["reservation_id"].as_str().unwrap().to_string();

        let cancel_args = json!({"reservation_id": reservation_id}).to_string();
        let call = ToolCall::parse("cancel_reservation", &cancel_args).unwrap();
        let result = toolbox.dispatch(&call).await.unwrap();
        assert_eq!(result["status"], "success");

        // Same hotel, room, and exact dates are bookable again.
        let rebooked = book(&toolbox, "2025-06-01", "2025-06-03").await;
        assert_eq!(rebooked["status"], "confirmed");

        // Re-cancelling the first reservation still reports success.
        let call = ToolCall::parse("cancel_reservation", &cancel_args).unwrap();
        let result = toolbox.dispatch(&call).await.unwrap();
        assert_eq!(result["status"], "success");
    }

    #[tokio::test]
    async fn cancel_unknown_reservation_is_an_error_payload() {
        let (toolbox, _dir) = setup_toolbox().await;
        let call =
            ToolCall::parse("cancel_reservation", r#"{"reservation_id": "RES-0000"}"#).unwrap();
        let result = toolbox.dispatch(&call).await.unwrap();
        assert_eq!(result["error"], "Reservation not found");
    }

    #[tokio::test]
    async fn modify_acknowledges_without_persisting() {
        let (toolbox, _dir) = setup_toolbox().await;

        let booked = book(&toolbox, "2025-06-01", "2025-06-03").await;
        let reservation_id = booked["reservation_id"].as_str().unwrap().to_string();

        let result = toolbox
            .modify_reservation(&reservation_id, "2025-08-01", "2025-08-05")
            .await
            .unwrap();
        assert_eq!(result["status"], "success");
        assert_eq!(result["message"], "Dates updated");

        // The stored dates are unchanged: the original range still blocks.
        let conflicting = book(&toolbox, "2025-06-01", "2025-06-03").await;
        assert!(conflicting["error"].is_string());
        // And the "new" range stays free.
        let fresh = book(&toolbox, "2025-08-01", "2025-08-05").await;
        assert_eq!(fresh["status"], "confirmed");
    }

    #[tokio::test]
    async fn modify_unknown_reservation_is_an_error_payload() {
        let (toolbox, _dir) = setup_toolbox().await;
        let result = toolbox
            .modify_reservation("RES-9999", "2025-08-01", "2025-08-05")
            .await
            .unwrap();
        assert_eq!(result["error"], "Reservation not found");
    }

    #[tokio::test]
    async fn recommend_tool_returns_activity_list() {
        let (toolbox, _dir) = setup_toolbox().await;
        let call = ToolCall::parse("recommend_activities", r#"{"city": "paris"}"#).unwrap();
        let result = toolbox.dispatch(&call).await.unwrap();
        let activities = result.as_array().unwrap();
        assert_eq!(activities.len(), 4);
        assert_eq!(activities[0], "Visit the Louvre Museum");
    }
}
