//! Listing entity representing one row of the `properties` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A property listing as stored in the backing database.
///
/// Read-only for this service. Serializable so the whole collection can be
/// stored in the cache; `price` serializes as a decimal string and keeps its scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Names of the persisted fields, in column order.
    pub const FIELDS: [&'static str; 6] = [
        "id",
        "title",
        "description",
        "price",
        "location",
        "created_at",
    ];

    /// Creates a new Listing instance.
    pub fn new(
        id: i64,
        title: String,
        description: String,
        price: Decimal,
        location: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            price,
            location,
            created_at,
        }
    }
}
