//! Wire DTOs for the backend's directory and availability endpoints.
//!
//! DESIGN
//! ======
//! Maps are `IndexMap`s so the order the backend chose (proximity for
//! availability, file order for the directory) survives decoding. Time
//! strings are opaque; nothing here parses them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Transport-level failures from the backend REST API.
///
/// These never reach the controller; the directory loader and availability
/// fetcher convert them into [`crate::state::error::FetchError`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("unexpected response status {status}")]
    Status { status: u16 },

    /// The body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The base URL cannot have the endpoint path appended.
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),
}

// =============================================================================
// DIRECTORY
// =============================================================================

/// Descriptive metadata for one building in the directory response.
///
/// The backend also sends coordinates; only the name is needed here. A
/// missing or `null` name decodes as empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingInfo {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `GET /all_buildings/` body: building code -> metadata.
pub type Directory = IndexMap<String, BuildingInfo>;

// =============================================================================
// AVAILABILITY
// =============================================================================

/// One free window for a room. Encoded on the wire as `[start, end]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct TimeInterval {
    pub start: String,
    pub end: String,
}

impl TimeInterval {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }
}

impl From<(String, String)> for TimeInterval {
    fn from((start, end): (String, String)) -> Self {
        Self { start, end }
    }
}

impl From<TimeInterval> for (String, String) {
    fn from(interval: TimeInterval) -> Self {
        (interval.start, interval.end)
    }
}

/// Room code -> free intervals, in the order received.
pub type RoomAvailability = IndexMap<String, Vec<TimeInterval>>;

/// `GET /result/{code}` body: building code -> rooms.
pub type BuildingAvailability = IndexMap<String, RoomAvailability>;
