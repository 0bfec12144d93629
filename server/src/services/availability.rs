//! `/result` pipeline: fetch open classrooms, keep what is open soon, order by
//! distance from the requested building.

use chrono::{NaiveDateTime, TimeDelta};
use watclassroom::BuildingAvailability;

use super::buildings::{BuildingDirectory, BuildingRecord};
use super::portal::{OpenClassroomSource, PortalError};
use super::{proximity, schedule};

#[derive(Debug, thiserror::Error)]
pub enum ResultError {
    #[error("building code '{0}' not found in buildings data")]
    UnknownBuilding(String),

    #[error(transparent)]
    Upstream(#[from] PortalError),
}

/// Open rooms near `building_code`, nearest building first.
///
/// The origin must be in `directory` with coordinates; it is checked before
/// the portal is contacted.
pub async fn nearby_availability(
    source: &dyn OpenClassroomSource,
    directory: &BuildingDirectory,
    building_code: &str,
    now: NaiveDateTime,
    lookahead: TimeDelta,
) -> Result<BuildingAvailability, ResultError> {
    let Some(origin) = directory.get(building_code).and_then(BuildingRecord::coordinates) else {
        tracing::error!(building_code, "building code not found in buildings data");
        return Err(ResultError::UnknownBuilding(building_code.to_owned()));
    };

    let open = source.open_classrooms().await?;
    let upcoming = schedule::filter_by_time(open, now, lookahead);
    Ok(proximity::sort_by_distance(origin, upcoming, directory))
}

#[cfg(test)]
#[path = "availability_test.rs"]
mod tests;
