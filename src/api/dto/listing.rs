//! DTOs for the listing endpoint.

use serde::Serialize;

use crate::domain::entities::Listing;

/// Response body of `GET /properties`.
#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub properties: Vec<ListingItem>,
}

/// One listing as rendered to API clients.
///
/// `price` keeps the stored decimal scale (`"1234.50"`); `created_at` is RFC 3339.
#[derive(Debug, Serialize)]
pub struct ListingItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub location: String,
    pub created_at: String,
}

impl From<Listing> for ListingItem {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            description: listing.description,
            price: listing.price.to_string(),
            location: listing.location,
            created_at: listing.created_at.to_rfc3339(),
        }
    }
}

impl From<Vec<Listing>> for ListingsResponse {
    fn from(listings: Vec<Listing>) -> Self {
        Self {
            properties: listings.into_iter().map(ListingItem::from).collect(),
        }
    }
}
