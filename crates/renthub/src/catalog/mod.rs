//! Listing catalog: the property records shown on the browse screen, the
//! conjunctive filter engine behind the search bar, and the featured shelf.

pub mod domain;
mod filter;
pub mod import;
pub mod router;
mod seed;

pub use domain::{FilterSpec, Listing, ListingDetail, ListingId, PriceRange};
pub use filter::{featured, search, FEATURED_RATING_FLOOR};
pub use import::CatalogImportError;
pub use router::catalog_router;

use std::io::Read;

/// Ordered collection of listings backing search, featured, and detail views.
#[derive(Debug, Default)]
pub struct ListingCatalog {
    entries: Vec<ListingDetail>,
}

impl ListingCatalog {
    pub fn new(entries: Vec<ListingDetail>) -> Self {
        Self { entries }
    }

    /// Built-in demo catalog used when no external source is supplied.
    pub fn seed() -> Self {
        Self::new(seed::seed_listings())
    }

    /// Hydrate the catalog from a CSV listing export.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        import::read_catalog(reader).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &ListingId) -> Option<&ListingDetail> {
        self.entries.iter().find(|entry| &entry.listing.id == id)
    }

    /// Snapshot of every listing in catalog order.
    pub fn listings(&self) -> Vec<Listing> {
        self.entries
            .iter()
            .map(|entry| entry.listing.clone())
            .collect()
    }

    /// Apply the filter spec over the whole catalog. Recomputed per call.
    pub fn search(&self, spec: &FilterSpec) -> Vec<Listing> {
        self.entries
            .iter()
            .map(|entry| &entry.listing)
            .filter(|listing| spec.matches(listing))
            .cloned()
            .collect()
    }

    pub fn featured(&self) -> Vec<Listing> {
        filter::featured(&self.listings())
    }
}
