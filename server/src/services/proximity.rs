//! Orders open-classroom buildings by distance from the user's building.

use watclassroom::BuildingAvailability;

use super::buildings::BuildingDirectory;

/// Mean Earth radius (IUGG), metres.
const EARTH_RADIUS_M: f64 = 6_371_008.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Great-circle distance in metres (haversine).
#[must_use]
pub fn distance_meters(from: Coordinates, to: Coordinates) -> f64 {
    let (lat1, lat2) = (from.latitude.to_radians(), to.latitude.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}

/// Reorder `availability` nearest-first from `origin`.
///
/// Buildings missing from `directory` or without coordinates are dropped.
/// Equal distances keep their incoming order.
#[must_use]
pub fn sort_by_distance(
    origin: Coordinates,
    availability: BuildingAvailability,
    directory: &BuildingDirectory,
) -> BuildingAvailability {
    let mut ranked: Vec<_> = availability
        .into_iter()
        .filter_map(|(code, rooms)| {
            let Some(location) = directory.get(&code).and_then(super::buildings::BuildingRecord::coordinates) else {
                tracing::warn!(building_code = %code, "skipping building not found in buildings data");
                return None;
            };
            Some((distance_meters(origin, location), code, rooms))
        })
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    tracing::info!(count = ranked.len(), "sorted buildings by proximity");

    ranked.into_iter().map(|(_, code, rooms)| (code, rooms)).collect()
}

#[cfg(test)]
#[path = "proximity_test.rs"]
mod tests;
