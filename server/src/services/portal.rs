//! University open-classroom portal client.
//!
//! One `GET` returns a GeoJSON-ish feature collection. Each feature that
//! supports open classrooms carries its room schedule in
//! `openClassroomSlots`, which the portal sometimes ships as a JSON-encoded
//! string instead of an object. Parsing lives in `parse_open_classrooms` so it
//! can be tested without a network.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use watclassroom::{BuildingAvailability, RoomAvailability, TimeInterval};

pub const DEFAULT_OPEN_CLASSROOMS_URL: &str = "https://portalapi2.uwaterloo.ca/v2/map/OpenClassrooms";
const CONNECT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortalError {
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("portal request failed: {0}")]
    Request(String),

    #[error("portal returned status {status}")]
    Status { status: u16 },

    #[error("portal response decode failed: {0}")]
    Decode(String),
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Anything that can produce the campus-wide open-classroom table.
#[async_trait]
pub trait OpenClassroomSource: Send + Sync {
    async fn open_classrooms(&self) -> Result<BuildingAvailability, PortalError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct PortalClient {
    http: reqwest::Client,
    url: String,
}

impl PortalClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, PortalError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| PortalError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }
}

#[async_trait]
impl OpenClassroomSource for PortalClient {
    async fn open_classrooms(&self) -> Result<BuildingAvailability, PortalError> {
        tracing::info!(url = %self.url, "fetching open classrooms");
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| PortalError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            tracing::error!(status, "open classroom portal returned non-200");
            return Err(PortalError::Status { status });
        }

        let text = response.text().await.map_err(|e| PortalError::Request(e.to_string()))?;
        parse_open_classrooms(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct PortalResponse {
    data: PortalData,
}

#[derive(Deserialize)]
struct PortalData {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: FeatureProperties,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeatureProperties {
    building_code: Option<String>,
    support_open_classroom: Option<bool>,
    open_classroom_slots: Option<Value>,
}

#[derive(Deserialize)]
struct SlotsDocument {
    #[serde(default)]
    data: Vec<RoomEntry>,
}

#[derive(Deserialize)]
struct RoomEntry {
    #[serde(rename = "roomNumber")]
    room_number: Option<Value>,
    #[serde(rename = "Schedule", default)]
    schedule: Vec<ScheduleEntry>,
}

#[derive(Deserialize)]
struct ScheduleEntry {
    #[serde(rename = "Slots", default)]
    slots: Vec<SlotEntry>,
}

#[derive(Deserialize)]
struct SlotEntry {
    #[serde(rename = "StartTime")]
    start_time: Option<String>,
    #[serde(rename = "EndTime")]
    end_time: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Convert a portal response body into `building -> room -> slots`.
///
/// Features that do not support open classrooms or lack a building code are
/// skipped. A building whose slot document cannot be decoded is kept with no
/// rooms.
pub fn parse_open_classrooms(json: &str) -> Result<BuildingAvailability, PortalError> {
    let response: PortalResponse = serde_json::from_str(json).map_err(|e| {
        tracing::error!(error = %e, "failed to decode portal response");
        PortalError::Decode(e.to_string())
    })?;
    tracing::info!(count = response.data.features.len(), "received portal features");

    let mut buildings = BuildingAvailability::new();
    for feature in response.data.features {
        let props = feature.properties;
        if props.support_open_classroom != Some(true) {
            continue;
        }
        let Some(building_code) = props.building_code else {
            tracing::warn!("skipping open-classroom feature without building code");
            continue;
        };
        let rooms = props
            .open_classroom_slots
            .and_then(|slots| decode_slots(&building_code, slots))
            .map(|doc| rooms_from_document(&building_code, doc))
            .unwrap_or_default();
        buildings.insert(building_code, rooms);
    }

    tracing::info!(count = buildings.len(), "buildings support open classrooms");
    Ok(buildings)
}

fn decode_slots(building_code: &str, slots: Value) -> Option<SlotsDocument> {
    let decoded = match slots {
        Value::Null => return None,
        Value::String(raw) => serde_json::from_str(&raw),
        other => serde_json::from_value(other),
    };
    decoded
        .map_err(|e| tracing::warn!(building_code, error = %e, "invalid openClassroomSlots document"))
        .ok()
}

fn rooms_from_document(building_code: &str, doc: SlotsDocument) -> RoomAvailability {
    let mut rooms = RoomAvailability::new();
    for room in doc.data {
        let Some(number) = room.room_number.as_ref().and_then(room_number_text) else {
            tracing::warn!(building_code, "skipping room without room number");
            continue;
        };
        let intervals = room
            .schedule
            .into_iter()
            .next()
            .map(|schedule| {
                schedule
                    .slots
                    .into_iter()
                    .filter_map(|slot| match (slot.start_time, slot.end_time) {
                        (Some(start), Some(end)) => Some(TimeInterval::new(start, end)),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();
        rooms.insert(format!("{building_code}{number}"), intervals);
    }
    rooms
}

fn room_number_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "portal_test.rs"]
mod tests;
