//! Regenerates the server's `buildings.json` from the university Open Data API.

use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const LOCATIONS_URL: &str = "https://openapi.data.uwaterloo.ca/v3/Locations";

/// One entry of the Open Data `Locations` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationEntry {
    building_code: Option<String>,
    building_name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// One entry of the written building file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildingLocation {
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: Option<f64>,
}

/// Keep located entries, keyed by building code, in response order.
pub fn parse_locations(json: &str) -> Result<IndexMap<String, BuildingLocation>, serde_json::Error> {
    let entries: Vec<LocationEntry> = serde_json::from_str(json)?;
    let total = entries.len();
    let buildings: IndexMap<_, _> = entries
        .into_iter()
        .filter_map(|entry| {
            let code = entry.building_code?;
            let latitude = entry.latitude?;
            Some((code, BuildingLocation { name: entry.building_name, latitude, longitude: entry.longitude }))
        })
        .collect();
    tracing::info!(total, located = buildings.len(), "parsed locations");
    Ok(buildings)
}

/// Fetch the raw `Locations` body.
pub async fn fetch_locations(api_key: &str, timeout: Duration) -> Result<String, reqwest::Error> {
    let http = reqwest::Client::builder().timeout(timeout).build()?;
    http.get(LOCATIONS_URL)
        .header("x-api-key", api_key)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

#[cfg(test)]
#[path = "locations_test.rs"]
mod tests;
