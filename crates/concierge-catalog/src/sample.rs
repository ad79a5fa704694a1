// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The built-in sample catalog: ten hotels across five cities.

use std::collections::{BTreeMap, BTreeSet};

use crate::Hotel;

fn hotel(
    id: &str,
    name: &str,
    city: &str,
    rating: f64,
    price: u32,
    room_types: &[(&str, u32)],
    amenities: &[&str],
    description: &str,
    image_url: &str,
) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        rating,
        price,
        room_types: room_types
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<BTreeMap<_, _>>(),
        amenities: amenities
            .iter()
            .map(|a| a.to_string())
            .collect::<BTreeSet<_>>(),
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

/// Returns the sample hotel list in catalog order (h1..h10).
pub(crate) fn sample_hotels() -> Vec<Hotel> {
    vec![
        // Marrakech
        hotel(
            "h1",
            "Riad Jasmine",
            "Marrakech",
            4.8,
            85,
            &[("Standard", 85), ("Suite", 150), ("Royal Riad", 300)],
            &["pool", "breakfast", "wifi", "quiet", "spa"],
            "A peaceful oasis in the medina with a beautiful courtyard pool.",
            "https://images.unsplash.com/photo-1560625699-703993169cdb?w=600&q=80",
        ),
        hotel(
            "h2",
            "Hotel Sofitel",
            "Marrakech",
            4.5,
            250,
            &[("Standard", 250), ("Deluxe", 350), ("Royal Suite", 800)],
            &["pool", "spa", "luxury", "bar", "gym", "concierge"],
            "Luxury hotel with modern amenities and a large swimming pool.",
            "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa?w=600&q=80",
        ),
        hotel(
            "h3",
            "Medina Hostel",
            "Marrakech",
            4.0,
            25,
            &[("Dorm Bed", 25), ("Private Room", 45)],
            &["wifi", "rooftop", "social events"],
            "Budget-friendly hostel near the main square.",
            "https://images.unsplash.com/photo-1520277739536-ea77c3e80353?w=600&q=80",
        ),
        // Paris
        hotel(
            "h4",
            "Le Meurice",
            "Paris",
            4.9,
            800,
            &[("Superior Room", 800), ("Deluxe Suite", 1500), ("Penthouse", 5000)],
            &["luxury", "spa", "michelin dining", "view", "bar"],
            "Historic palace hotel with views of the Tuileries Garden.",
            "https://images.unsplash.com/photo-1565031491318-aef52749e30d?w=600&q=80",
        ),
        hotel(
            "h5",
            "Mama Shelter Paris East",
            "Paris",
            4.2,
            120,
            &[("Medium Mama", 120), ("Large Mama", 160), ("XXL Mama", 250)],
            &["rooftop", "bar", "modern", "wifi", "design"],
            "Hip and trendy hotel with a lively rooftop bar.",
            "https://images.unsplash.com/photo-1550586678-f7b23d9b43e7?w=600&q=80",
        ),
        // Tokyo
        hotel(
            "h6",
            "Park Hyatt Tokyo",
            "Tokyo",
            4.8,
            600,
            &[("Park Room", 600), ("Park Suite", 1200), ("Governor Suite", 2500)],
            &["luxury", "pool", "view", "jazz bar", "gym", "spa"],
            "Iconic luxury hotel with stunning views of the city skyline.",
            "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?w=600&q=80",
        ),
        hotel(
            "h7",
            "Shibuya Stream Excel",
            "Tokyo",
            4.4,
            180,
            &[("Single", 180), ("Double", 220), ("Corner Twin", 300)],
            &["modern", "wifi", "convenient", "river view"],
            "Directly connected to Shibuya Station with modern design.",
            "https://images.unsplash.com/photo-1503899036084-c55cdd92da26?w=600&q=80",
        ),
        // New York
        hotel(
            "h8",
            "The Plaza",
            "New York",
            4.7,
            950,
            &[("Plaza Room", 950), ("Signature Suite", 2000), ("Royal Suite", 10000)],
            &["luxury", "afternoon tea", "central park view", "spa", "butler"],
            "Legendary hotel at the edge of Central Park.",
            "https://images.unsplash.com/photo-1562133567-b6a0a9c7cd3d?w=600&q=80",
        ),
        hotel(
            "h9",
            "Ace Hotel New York",
            "New York",
            4.3,
            250,
            &[("Small", 250), ("Medium", 350), ("Loft Suite", 600)],
            &["trendy", "bar", "coffee shop", "wifi", "live music"],
            "Cool, retro-chic hotel in Midtown Manhattan.",
            "https://images.unsplash.com/photo-1596394516093-501ba68a0ba6?w=600&q=80",
        ),
        // London
        hotel(
            "h10",
            "The Savoy",
            "London",
            4.8,
            700,
            &[("Superior Queen", 700), ("River View Deluxe", 1100), ("Personality Suite", 2500)],
            &["luxury", "history", "river view", "bar", "pool"],
            "Famous historic luxury hotel on the Strand.",
            "https://images.unsplash.com/photo-1565329921943-7e5350447b08?w=600&q=80",
        ),
    ]
}
