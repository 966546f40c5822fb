use super::domain::{Listing, ListingDetail, ListingId};

fn detail(
    id: &str,
    title: &str,
    price: u32,
    bedrooms: u8,
    bathrooms: f32,
    square_feet: u32,
    smart_home: bool,
    address: &str,
    rating: f32,
    review_count: u32,
    description: &str,
) -> ListingDetail {
    let smart_features = if smart_home {
        vec![
            "Smart Lock".to_string(),
            "Smart Thermostat".to_string(),
            "Smart Lighting".to_string(),
            "Voice Assistant".to_string(),
            "Security Cameras".to_string(),
        ]
    } else {
        Vec::new()
    };

    ListingDetail {
        listing: Listing {
            id: ListingId(id.to_string()),
            price,
            bedrooms,
            bathrooms,
            square_feet,
            smart_home,
            address: address.to_string(),
            rating,
        },
        title: title.to_string(),
        description: description.to_string(),
        image_urls: vec![format!("https://images.renthub.example/{id}/cover.jpg")],
        amenities: vec![
            "Covered Parking".to_string(),
            "In-unit Laundry".to_string(),
            "Central Air".to_string(),
            "Pet Friendly".to_string(),
        ],
        smart_features,
        review_count,
    }
}

/// Built-in demo catalog used when no external listing source is supplied.
pub(crate) fn seed_listings() -> Vec<ListingDetail> {
    vec![
        detail(
            "1",
            "Modern Smart Home in Downtown",
            2500,
            3,
            2.0,
            1800,
            true,
            "123 Main St, San Francisco, CA",
            4.8,
            24,
            "Open floor plan, high ceilings, and smart home technology throughout: \
             smart lock, thermostat, and lighting system.",
        ),
        detail(
            "2",
            "Sunny Craftsman Duplex",
            1800,
            2,
            1.0,
            1200,
            false,
            "456 Oak Ave, Los Angeles, CA",
            4.5,
            17,
            "Bright two-bedroom unit with a shared yard and a short walk to transit.",
        ),
        detail(
            "3",
            "Spacious Family Home with Views",
            3200,
            4,
            3.0,
            2400,
            true,
            "789 Pine Rd, Seattle, WA",
            4.9,
            31,
            "Four bedrooms over two stories, fully wired smart home, mountain views \
             from the main suite.",
        ),
        detail(
            "4",
            "Renovated Ranch near Downtown",
            2200,
            3,
            2.0,
            1600,
            false,
            "321 Maple Dr, Austin, TX",
            4.3,
            12,
            "Recently renovated single-story home with a large fenced backyard.",
        ),
        detail(
            "5",
            "Luxury Penthouse Residence",
            4000,
            5,
            4.0,
            3000,
            true,
            "555 Cedar Ln, New York, NY",
            4.7,
            42,
            "Full-floor residence with private elevator access and building concierge.",
        ),
        detail(
            "6",
            "Cozy Studio near the Park",
            1500,
            1,
            1.0,
            900,
            false,
            "888 Birch Blvd, Denver, CO",
            4.2,
            9,
            "Efficient one-bedroom layout a block from the city park and bike trails.",
        ),
    ]
}
