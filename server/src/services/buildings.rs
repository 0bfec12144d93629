//! Building location directory loaded from `buildings.json`.
//!
//! The file is produced offline (`watclassroom refresh-locations`) and read
//! once at startup; handlers share the parsed map through `AppState`.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::proximity::Coordinates;

/// One building's entry in the location file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl BuildingRecord {
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates { latitude: self.latitude?, longitude: self.longitude? })
    }
}

/// Building code -> record, in file order.
pub type BuildingDirectory = IndexMap<String, BuildingRecord>;

#[derive(Debug, thiserror::Error)]
pub enum BuildingsError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: std::io::Error },

    #[error("failed to parse {path}: {source}")]
    Parse { path: String, source: serde_json::Error },
}

/// Read and parse the location file.
pub async fn load_directory(path: &Path) -> Result<BuildingDirectory, BuildingsError> {
    tracing::info!(path = %path.display(), "reading building directory");
    let contents = tokio::fs::read_to_string(path).await.map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "failed to load buildings file");
        BuildingsError::Read { path: path.display().to_string(), source }
    })?;
    let buildings = parse_directory(&contents)
        .map_err(|source| BuildingsError::Parse { path: path.display().to_string(), source })?;
    tracing::info!(count = buildings.len(), "loaded buildings");
    Ok(buildings)
}

/// Parse location-file JSON.
pub fn parse_directory(json: &str) -> Result<BuildingDirectory, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
#[path = "buildings_test.rs"]
mod tests;
