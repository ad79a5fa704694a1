// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Activity recommendations: a fixed list per known city, with a generic
//! fallback. Pure function, no store access.

/// Returns four suggested activities for the city.
///
/// Matching is a case-insensitive substring test against the known cities,
/// so "paris", "Paris, France" and "PARIS" all hit the Paris list.
pub fn recommend_activities(city: &str) -> Vec<String> {
    let city_lower = city.to_lowercase();

    let activities: [&str; 4] = if city_lower.contains("marrakech") {
        [
            "Visit Jardin Majorelle",
            "Explore the Souks",
            "Dinner at Jemaa el-Fnaa",
            "Relax in a Hammam",
        ]
    } else if city_lower.contains("paris") {
        [
            "Visit the Louvre Museum",
            "Climb the Eiffel Tower",
            "Walk along the Seine",
            "Explore Montmartre",
        ]
    } else if city_lower.contains("tokyo") {
        [
            "Visit Senso-ji Temple",
            "Cross the Shibuya Crossing",
            "Explore Akihabara Electronics Town",
            "Sushi at Tsukiji Outer Market",
        ]
    } else if city_lower.contains("new york") {
        [
            "Walk through Central Park",
            "See a Broadway Show",
            "Visit the Statue of Liberty",
            "Explore Times Square",
        ]
    } else if city_lower.contains("london") {
        [
            "Visit the British Museum",
            "See the Tower of London",
            "Walk along the South Bank",
            "Explore Covent Garden",
        ]
    } else {
        [
            "City tour",
            "Local museum",
            "Central park",
            "Shopping district",
        ]
    };

    activities.iter().map(|a| a.to_string()).collect()
}
