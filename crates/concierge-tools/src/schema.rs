// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON Schemas for the model-facing tools.
//!
//! `modify_reservation` is intentionally absent: it exists only as a
//! tool-layer operation and is never offered to the model.

use concierge_core::ToolDefinition;
use serde_json::json;

/// Returns the five tool definitions attached to every provider request.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::function(
            "search_hotels",
            "Search for hotels based on criteria.",
            json!({
                "type": "object",
                "properties": {
                    "city": {"type": "string", "description": "City to search (required)"},
                    "check_in": {"type": "string", "description": "Check-in date YYYY-MM-DD. Omit if not provided."},
                    "check_out": {"type": "string", "description": "Check-out date YYYY-MM-DD. Omit if not provided."},
                    "guests": {"type": "integer", "description": "Number of guests. Omit if not provided."},
                    "budget": {"type": "integer", "description": "Max budget per night. Omit if not provided."},
                    "preferences": {"type": "array", "items": {"type": "string"}, "description": "Amenity preferences. Omit if not provided."}
                },
                "required": ["city"]
            }),
        ),
        ToolDefinition::function(
            "show_hotel_details",
            "Get detailed information about a specific hotel.",
            json!({
                "type": "object",
                "properties": {
                    "hotel_id": {"type": "string"}
                },
                "required": ["hotel_id"]
            }),
        ),
        ToolDefinition::function(
            "book_room",
            "Book a room at a hotel.",
            json!({
                "type": "object",
                "properties": {
                    "hotel_id": {"type": "string"},
                    "room_type": {"type": "string"},
                    "customer_name": {"type": "string"},
                    "check_in": {"type": "string"},
                    "check_out": {"type": "string"},
                    "email": {"type": "string"},
                    "phone": {"type": "string"}
                },
                "required": ["hotel_id", "room_type", "customer_name", "check_in", "check_out"]
            }),
        ),
        ToolDefinition::function(
            "cancel_reservation",
            "Cancel an existing reservation.",
            json!({
                "type": "object",
                "properties": {
                    "reservation_id": {"type": "string"}
                },
                "required": ["reservation_id"]
            }),
        ),
        ToolDefinition::function(
            "recommend_activities",
            "Get recommendations for activities in a city.",
            json!({
                "type": "object",
                "properties": {
                    "city": {"type": "string"}
                },
                "required": ["city"]
            }),
        ),
    ]
}
