use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{FilterSpec, Listing, ListingId, PriceRange};
use super::ListingCatalog;

/// Router builder exposing the browse screen's read endpoints.
pub fn catalog_router(catalog: Arc<ListingCatalog>) -> Router {
    Router::new()
        .route("/api/v1/listings", get(search_handler))
        .route("/api/v1/listings/featured", get(featured_handler))
        .route("/api/v1/listings/:listing_id", get(detail_handler))
        .with_state(catalog)
}

/// Flat query-parameter form of a [`FilterSpec`].
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingSearchParams {
    #[serde(default)]
    pub(crate) min_bedrooms: u8,
    #[serde(default)]
    pub(crate) min_bathrooms: f32,
    #[serde(default)]
    pub(crate) min_price: Option<u32>,
    #[serde(default)]
    pub(crate) max_price: Option<u32>,
    #[serde(default)]
    pub(crate) smart_home_only: bool,
    #[serde(default)]
    pub(crate) q: String,
}

impl ListingSearchParams {
    pub(crate) fn into_spec(self) -> FilterSpec {
        FilterSpec {
            min_bedrooms: self.min_bedrooms,
            min_bathrooms: self.min_bathrooms,
            price: PriceRange::between(
                self.min_price.unwrap_or(0),
                self.max_price.unwrap_or(u32::MAX),
            ),
            smart_home_only: self.smart_home_only,
            address_query: self.q,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListingSearchResponse {
    pub(crate) matched: usize,
    pub(crate) listings: Vec<Listing>,
}

pub(crate) async fn search_handler(
    State(catalog): State<Arc<ListingCatalog>>,
    Query(params): Query<ListingSearchParams>,
) -> Response {
    let spec = params.into_spec();
    let listings = catalog.search(&spec);
    let body = ListingSearchResponse {
        matched: listings.len(),
        listings,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub(crate) async fn featured_handler(State(catalog): State<Arc<ListingCatalog>>) -> Response {
    let listings = catalog.featured();
    let body = ListingSearchResponse {
        matched: listings.len(),
        listings,
    };
    (StatusCode::OK, axum::Json(body)).into_response()
}

pub(crate) async fn detail_handler(
    State(catalog): State<Arc<ListingCatalog>>,
    Path(listing_id): Path<String>,
) -> Response {
    let id = ListingId(listing_id);
    match catalog.get(&id) {
        Some(detail) => (StatusCode::OK, axum::Json(detail.clone())).into_response(),
        None => {
            let payload = json!({
                "error": format!("no listing with id {}", id.0),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_params_produce_the_default_spec() {
        let spec = ListingSearchParams::default().into_spec();
        assert_eq!(spec, FilterSpec::default());
    }

    #[test]
    fn price_params_become_inclusive_bounds() {
        let params = ListingSearchParams {
            min_price: Some(1000),
            max_price: Some(2000),
            ..ListingSearchParams::default()
        };
        let spec = params.into_spec();
        assert_eq!(spec.price, PriceRange::between(1000, 2000));
    }
}
