use super::domain::{FilterSpec, Listing};

/// Minimum rating for the featured shelf.
pub const FEATURED_RATING_FLOOR: f32 = 4.5;

impl FilterSpec {
    /// A listing is retained only when every active predicate holds.
    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.address_query.is_empty()
            && !listing
                .address
                .to_lowercase()
                .contains(&self.address_query.to_lowercase())
        {
            return false;
        }

        if self.min_bedrooms > 0 && listing.bedrooms < self.min_bedrooms {
            return false;
        }

        if self.min_bathrooms > 0.0 && listing.bathrooms < self.min_bathrooms {
            return false;
        }

        if !self.price.contains(listing.price) {
            return false;
        }

        if self.smart_home_only && !listing.smart_home {
            return false;
        }

        true
    }
}

/// Stable conjunctive filter: the result is a subsequence of `listings` in
/// the original order, recomputed in full on every call.
pub fn search(listings: &[Listing], spec: &FilterSpec) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| spec.matches(listing))
        .cloned()
        .collect()
}

/// Listings promoted to the featured shelf, original order preserved.
pub fn featured(listings: &[Listing]) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| listing.rating >= FEATURED_RATING_FLOOR)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::{ListingId, PriceRange};

    fn listing(id: &str, price: u32, bedrooms: u8, bathrooms: f32, smart: bool, address: &str) -> Listing {
        Listing {
            id: ListingId(id.to_string()),
            price,
            bedrooms,
            bathrooms,
            square_feet: 1000,
            smart_home: smart,
            address: address.to_string(),
            rating: 4.0,
        }
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing("1", 1800, 2, 1.0, false, "456 Oak Ave, Los Angeles, CA"),
            listing("2", 3200, 4, 3.0, true, "789 Pine Rd, Seattle, WA"),
            listing("3", 1500, 1, 1.0, false, "888 Birch Blvd, Denver, CO"),
        ]
    }

    #[test]
    fn default_spec_is_the_identity_filter() {
        let listings = sample();
        let result = search(&listings, &FilterSpec::default());
        assert_eq!(result, listings);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let spec = FilterSpec {
            min_bedrooms: 3,
            smart_home_only: true,
            ..FilterSpec::default()
        };
        assert!(search(&[], &spec).is_empty());
    }

    #[test]
    fn result_is_an_ordered_subsequence() {
        let listings = sample();
        let spec = FilterSpec {
            price: PriceRange::between(1500, 3200),
            ..FilterSpec::default()
        };
        let result = search(&listings, &spec);

        let mut cursor = listings.iter();
        for kept in &result {
            assert!(
                cursor.any(|original| original == kept),
                "filter reordered or fabricated {:?}",
                kept.id
            );
        }
    }

    #[test]
    fn address_query_is_case_insensitive_substring() {
        let listings = sample();
        let spec = FilterSpec {
            address_query: "pine rd".to_string(),
            ..FilterSpec::default()
        };
        let result = search(&listings, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ListingId("2".to_string()));
    }

    #[test]
    fn predicates_conjoin_bedrooms_and_smart_home() {
        // Concrete scenario: three-bedroom minimum plus smart-home gate keeps
        // only the Pine Rd listing.
        let listings = vec![
            listing("oak", 1800, 2, 1.0, false, "Oak Ave LA"),
            listing("pine", 3200, 4, 3.0, true, "Pine Rd Seattle"),
        ];
        let spec = FilterSpec {
            min_bedrooms: 3,
            smart_home_only: true,
            ..FilterSpec::default()
        };
        let result = search(&listings, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, ListingId("pine".to_string()));
    }

    #[test]
    fn relaxing_one_predicate_never_shrinks_the_result() {
        let listings = sample();
        let strict = FilterSpec {
            min_bedrooms: 2,
            smart_home_only: true,
            ..FilterSpec::default()
        };
        let relaxed = FilterSpec {
            smart_home_only: false,
            ..strict.clone()
        };

        let strict_matches = search(&listings, &strict);
        let relaxed_matches = search(&listings, &relaxed);
        assert!(relaxed_matches.len() >= strict_matches.len());
        for kept in &strict_matches {
            assert!(relaxed_matches.contains(kept));
        }
    }

    #[test]
    fn smart_home_gate_holds_for_every_match() {
        let listings = sample();
        let spec = FilterSpec {
            smart_home_only: true,
            ..FilterSpec::default()
        };
        assert!(search(&listings, &spec).iter().all(|l| l.smart_home));
    }

    #[test]
    fn inverted_price_bounds_match_nothing() {
        let listings = sample();
        let spec = FilterSpec {
            price: PriceRange::between(5000, 1000),
            ..FilterSpec::default()
        };
        assert!(search(&listings, &spec).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let listings = sample();
        let spec = FilterSpec {
            price: PriceRange::between(1800, 1800),
            ..FilterSpec::default()
        };
        let result = search(&listings, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].price, 1800);
    }

    #[test]
    fn fractional_bathroom_minimum_uses_at_least_semantics() {
        let mut listings = sample();
        listings[0].bathrooms = 2.5;
        let spec = FilterSpec {
            min_bathrooms: 2.5,
            ..FilterSpec::default()
        };
        let result = search(&listings, &spec);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn featured_keeps_high_ratings_in_order() {
        let mut listings = sample();
        listings[0].rating = 4.5;
        listings[2].rating = 4.9;
        let shelf = featured(&listings);
        assert_eq!(shelf.len(), 2);
        assert_eq!(shelf[0].id, ListingId("1".to_string()));
        assert_eq!(shelf[1].id, ListingId("3".to_string()));
    }
}
