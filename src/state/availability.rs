//! Availability fetcher: one building code in, nested room data out.
//!
//! The code is forwarded as given; an unknown code surfaces as an ordinary
//! fetch failure from the backend. Responses may name buildings other than
//! the requested one and are returned unfiltered.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

use crate::net::api::BuildingApi;
use crate::net::types::BuildingAvailability;

use super::error::FetchError;

/// Fetch open rooms near `building_code`.
///
/// # Errors
///
/// Any transport, status, or decode failure becomes
/// [`FetchError::AvailabilityUnavailable`] with no partial data.
pub async fn fetch<A: BuildingApi + ?Sized>(api: &A, building_code: &str) -> Result<BuildingAvailability, FetchError> {
    match api.result(building_code).await {
        Ok(data) => {
            let rooms: usize = data.values().map(indexmap::IndexMap::len).sum();
            tracing::info!(%building_code, buildings = data.len(), rooms, "availability fetched");
            Ok(data)
        }
        Err(e) => {
            tracing::error!(%building_code, error = %e, "failed to fetch result data");
            Err(FetchError::AvailabilityUnavailable { building_code: building_code.to_owned(), reason: e.to_string() })
        }
    }
}
