use super::domain::{Listing, ListingDetail, ListingId};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Errors raised while ingesting an external listing export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("listing '{id}' has an empty address")]
    MissingAddress { id: String },
    #[error("listing '{id}' rating {rating} is outside 0..=5")]
    RatingOutOfRange { id: String, rating: f32 },
}

/// Parse a `Listing ID,Price,Bedrooms,Bathrooms,Sqft,Smart Home,Address,Rating`
/// export into detail records. Rows keep their file order so downstream
/// filtering stays stable.
pub(crate) fn read_catalog<R: Read>(reader: R) -> Result<Vec<ListingDetail>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<ListingRow>() {
        let row = record?;
        entries.push(row.into_detail()?);
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "Listing ID")]
    id: String,
    #[serde(rename = "Price")]
    price: u32,
    #[serde(rename = "Bedrooms")]
    bedrooms: u8,
    #[serde(rename = "Bathrooms")]
    bathrooms: f32,
    #[serde(rename = "Sqft")]
    square_feet: u32,
    #[serde(rename = "Smart Home", deserialize_with = "flag_from_text")]
    smart_home: bool,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "Rating")]
    rating: f32,
}

impl ListingRow {
    fn into_detail(self) -> Result<ListingDetail, CatalogImportError> {
        if self.address.is_empty() {
            return Err(CatalogImportError::MissingAddress { id: self.id });
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CatalogImportError::RatingOutOfRange {
                id: self.id,
                rating: self.rating,
            });
        }

        let title = self
            .address
            .split(',')
            .next()
            .unwrap_or(&self.address)
            .to_string();

        Ok(ListingDetail {
            listing: Listing {
                id: ListingId(self.id),
                price: self.price,
                bedrooms: self.bedrooms,
                bathrooms: self.bathrooms,
                square_feet: self.square_feet,
                smart_home: self.smart_home,
                address: self.address,
                rating: self.rating,
            },
            title,
            description: String::new(),
            image_urls: Vec::new(),
            amenities: Vec::new(),
            smart_features: Vec::new(),
            review_count: 0,
        })
    }
}

fn flag_from_text<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "unrecognized smart-home flag '{other}'"
        ))),
    }
}
