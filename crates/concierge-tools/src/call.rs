// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed tool calls.
//!
//! Tool dispatch is a closed enum: every model-facing tool has a kind and a
//! typed argument struct, and the dispatch match is exhaustive. An
//! unrecognized tool name or a malformed argument blob becomes a
//! [`ConciergeError::Tool`], which the orchestrator reports back to the
//! model as a structured error payload instead of dropping the call.

use concierge_catalog::SearchQuery;
use concierge_core::ConciergeError;
use serde::Deserialize;
use strum::{Display, EnumString};

/// The closed set of model-facing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ToolKind {
    SearchHotels,
    ShowHotelDetails,
    BookRoom,
    CancelReservation,
    RecommendActivities,
}

/// Arguments for `search_hotels`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchArgs {
    pub city: String,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub guests: Option<i64>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub preferences: Option<Vec<String>>,
}

impl SearchArgs {
    /// Converts the raw arguments into a catalog query, dropping empty or
    /// non-positive optional values the model tends to fill in (budget=0,
    /// guests=0, empty date strings, empty preference lists).
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            city: self.city.clone(),
            check_in: self.check_in.clone().filter(|s| !s.is_empty()),
            check_out: self.check_out.clone().filter(|s| !s.is_empty()),
            guests: self.guests.filter(|&g| g > 0).map(|g| g as u32),
            budget: self.budget.filter(|&b| b > 0).map(|b| b as u32),
            preferences: self.preferences.clone().filter(|p| !p.is_empty()),
        }
    }
}

/// Arguments for `show_hotel_details`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsArgs {
    pub hotel_id: String,
}

/// Arguments for `book_room`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookArgs {
    pub hotel_id: String,
    pub room_type: String,
    pub customer_name: String,
    pub check_in: String,
    pub check_out: String,
    /// Accepted for compatibility; not persisted in the reservation schema.
    #[serde(default)]
    pub email: Option<String>,
    /// Accepted for compatibility; not persisted in the reservation schema.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Arguments for `cancel_reservation`.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelArgs {
    pub reservation_id: String,
}

/// Arguments for `recommend_activities`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendArgs {
    pub city: String,
}

/// A parsed, typed tool call ready for dispatch.
#[derive(Debug, Clone)]
pub enum ToolCall {
    SearchHotels(SearchArgs),
    ShowHotelDetails(DetailsArgs),
    BookRoom(BookArgs),
    CancelReservation(CancelArgs),
    RecommendActivities(RecommendArgs),
}

impl ToolCall {
    /// Parses a tool name and its JSON-encoded argument blob.
    pub fn parse(name: &str, arguments: &str) -> Result<Self, ConciergeError> {
        let kind: ToolKind = name.parse().map_err(|_| ConciergeError::Tool {
            message: format!("unknown tool: {name}"),
        })?;

        fn args<'a, T: Deserialize<'a>>(
            kind: ToolKind,
            arguments: &'a str,
        ) -> Result<T, ConciergeError> {
            serde_json::from_str(arguments).map_err(|e| ConciergeError::Tool {
                message: format!("invalid arguments for {kind}: {e}"),
            })
        }

        Ok(match kind {
            ToolKind::SearchHotels => Self::SearchHotels(args(kind, arguments)?),
            ToolKind::ShowHotelDetails => Self::ShowHotelDetails(args(kind, arguments)?),
            ToolKind::BookRoom => Self::BookRoom(args(kind, arguments)?),
            ToolKind::CancelReservation => Self::CancelReservation(args(kind, arguments)?),
            ToolKind::RecommendActivities => Self::RecommendActivities(args(kind, arguments)?),
        })
    }

    /// The kind of this call.
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::SearchHotels(_) => ToolKind::SearchHotels,
            Self::ShowHotelDetails(_) => ToolKind::ShowHotelDetails,
            Self::BookRoom(_) => ToolKind::BookRoom,
            Self::CancelReservation(_) => ToolKind::CancelReservation,
            Self::RecommendActivities(_) => ToolKind::RecommendActivities,
        }
    }
}
