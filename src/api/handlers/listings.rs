//! Handler for the listing collection.

use axum::{Json, extract::State};

use crate::api::dto::listing::ListingsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns every property listing.
///
/// # Endpoint
///
/// `GET /properties`
///
/// # Caching
///
/// Mounted behind [`crate::api::middleware::page_cache`] (15 minutes by default),
/// and reads through [`crate::application::services::ListingService`], which keeps
/// its own cached copy of the collection (1 hour by default).
///
/// # Response
///
/// ```json
/// {
///   "properties": [
///     {
///       "id": 1,
///       "title": "Seaside cottage",
///       "description": "Two bedrooms, ocean view",
///       "price": "1234.50",
///       "location": "Mombasa",
///       "created_at": "2024-03-09T14:30:05+00:00"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error if the database or the cache store fails.
pub async fn listings_handler(
    State(state): State<AppState>,
) -> Result<Json<ListingsResponse>, AppError> {
    let listings = state.listing_service.get_all_listings().await?;

    Ok(Json(ListingsResponse::from(listings)))
}
