use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// One property record available for rent. Immutable once constructed; the
/// filter engine only ever reads these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    /// Monthly rent in whole currency units.
    pub price: u32,
    pub bedrooms: u8,
    /// Fractional counts are common (e.g. 2.5 baths).
    pub bathrooms: f32,
    pub square_feet: u32,
    pub smart_home: bool,
    pub address: String,
    /// Aggregate review rating in `[0, 5]`.
    pub rating: f32,
}

/// Full record backing the property detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    pub listing: Listing,
    pub title: String,
    pub description: String,
    pub image_urls: Vec<String>,
    pub amenities: Vec<String>,
    pub smart_features: Vec<String>,
    pub review_count: u32,
}

/// Inclusive monthly-rent bounds. `unbounded()` places no constraint; bounds
/// with `min > max` simply match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub const fn unbounded() -> Self {
        Self {
            min: 0,
            max: u32::MAX,
        }
    }

    pub const fn between(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn contains(self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// The set of active search constraints over listings. Zero, empty, and
/// full-range values disable the corresponding predicate, so a default spec
/// matches every listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub min_bedrooms: u8,
    pub min_bathrooms: f32,
    pub price: PriceRange,
    pub smart_home_only: bool,
    /// Case-insensitive substring match against the listing address.
    pub address_query: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            min_bedrooms: 0,
            min_bathrooms: 0.0,
            price: PriceRange::unbounded(),
            smart_home_only: false,
            address_query: String::new(),
        }
    }
}
