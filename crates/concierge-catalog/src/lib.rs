// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory hotel catalog for the Concierge booking assistant.
//!
//! The catalog is immutable and constructed once at startup; search and
//! detail lookup borrow from it. No global state: callers hold the catalog
//! (typically behind an `Arc`) and pass it where needed.

mod sample;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// One hotel record. Immutable after catalog construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique id (e.g. "h1").
    pub id: String,
    pub name: String,
    pub city: String,
    pub rating: f64,
    /// Base nightly price; the budget filter compares against this, not the
    /// per-room-type prices.
    pub price: u32,
    /// Room-type name -> nightly price.
    pub room_types: BTreeMap<String, u32>,
    pub amenities: BTreeSet<String>,
    pub description: String,
    pub image_url: String,
}

/// Search criteria for [`Catalog::search`].
///
/// `check_in`, `check_out`, `guests`, and `preferences` are accepted but do
/// not affect filtering: availability is only checked at booking time, and
/// preferences are advisory only.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub city: String,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
    /// Maximum base price per night. Zero disables the filter.
    pub budget: Option<u32>,
    pub preferences: Option<Vec<String>>,
}

impl SearchQuery {
    /// Creates a query for a city with no optional filters.
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Self::default()
        }
    }
}

/// The immutable hotel catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    hotels: Vec<Hotel>,
}

impl Catalog {
    /// Creates a catalog from an explicit hotel list.
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }

    /// Creates the built-in sample catalog (ten hotels across five cities).
    pub fn sample() -> Self {
        Self::new(sample::sample_hotels())
    }

    /// All hotels, in catalog order. Serializable as a JSON array for
    /// external display.
    pub fn all(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Looks up a hotel by id.
    pub fn get(&self, hotel_id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == hotel_id)
    }

    /// Returns the hotels matching the query, in catalog order.
    ///
    /// City match is case-insensitive and exact. A positive budget excludes
    /// hotels whose base price exceeds it. All other criteria are accepted
    /// without effect.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Hotel> {
        self.hotels
            .iter()
            .filter(|hotel| hotel.city.eq_ignore_ascii_case(&query.city))
            .filter(|hotel| match query.budget {
                Some(budget) if budget > 0 => hotel.price <= budget,
                _ => true,
            })
            .collect()
    }

    /// Serializes the full catalog as a JSON array string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.hotels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_has_ten_hotels() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.all().len(), 10);
        let ids: Vec<&str> = catalog.all().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(
            ids,
            ["h1", "h2", "h3", "h4", "h5", "h6", "h7", "h8", "h9", "h10"]
        );
    }

    #[test]
    fn search_matches_city_case_insensitively() {
        let catalog = Catalog::sample();

        let lower = catalog.search(&SearchQuery::city("marrakech"));
        let upper = catalog.search(&SearchQuery::city("MARRAKECH"));
        assert_eq!(lower.len(), 3);
        assert_eq!(lower, upper);
        assert!(lower.iter().all(|h| h.city == "Marrakech"));
    }

    #[test]
    fn search_returns_only_matching_city() {
        let catalog = Catalog::sample();
        for hotel in catalog.all() {
            let results = catalog.search(&SearchQuery::city(&hotel.city));
            assert!(results.iter().any(|h| h.id == hotel.id));
            assert!(results.iter().all(|h| h.city == hotel.city));
        }
    }

    #[test]
    fn search_with_unknown_city_is_empty() {
        let catalog = Catalog::sample();
        assert!(catalog.search(&SearchQuery::city("Atlantis")).is_empty());
    }

    #[test]
    fn budget_excludes_hotels_above_base_price() {
        let catalog = Catalog::sample();
        for budget in [25u32, 85, 100, 250, 1000] {
            let query = SearchQuery {
                budget: Some(budget),
                ..SearchQuery::city("Marrakech")
            };
            let results = catalog.search(&query);
            for hotel in catalog.search(&SearchQuery::city("Marrakech")) {
                let included = results.iter().any(|h| h.id == hotel.id);
                assert_eq!(included, hotel.price <= budget, "budget={budget} id={}", hotel.id);
            }
        }
    }

    #[test]
    fn marrakech_budget_50_returns_only_the_hostel() {
        let catalog = Catalog::sample();
        let query = SearchQuery {
            budget: Some(50),
            ..SearchQuery::city("Marrakech")
        };
        let results = catalog.search(&query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "h3");
        assert_eq!(results[0].name, "Medina Hostel");
    }

    #[test]
    fn zero_budget_does_not_filter() {
        let catalog = Catalog::sample();
        let query = SearchQuery {
            budget: Some(0),
            ..SearchQuery::city("Paris")
        };
        assert_eq!(catalog.search(&query).len(), 2);
    }

    #[test]
    fn preferences_do_not_filter_results() {
        let catalog = Catalog::sample();
        let query = SearchQuery {
            preferences: Some(vec!["submarine hangar".into()]),
            ..SearchQuery::city("Tokyo")
        };
        assert_eq!(
            catalog.search(&query),
            catalog.search(&SearchQuery::city("Tokyo"))
        );
    }

    #[test]
    fn get_returns_record_or_none() {
        let catalog = Catalog::sample();
        let hotel = catalog.get("h4").expect("h4 exists");
        assert_eq!(hotel.name, "Le Meurice");
        assert_eq!(hotel.city, "Paris");
        assert!(catalog.get("h999").is_none());
    }

    #[test]
    fn catalog_exports_as_json_array() {
        let catalog = Catalog::sample();
        let json = catalog.to_json().unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 10);
        assert_eq!(parsed[0]["id"], "h1");
        assert_eq!(parsed[0]["room_types"]["Standard"], 85);
        assert!(parsed[0]["amenities"].as_array().unwrap().iter().any(|a| a == "pool"));
    }
}
