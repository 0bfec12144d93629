//! Directory loader: the building list behind the selection input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per session at startup. The resulting options are immutable;
//! a later reload would replace the list wholesale.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::net::api::BuildingApi;
use crate::net::types::Directory;

use super::error::FetchError;

/// One selectable entry in the building picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildingOption {
    /// Building code; the value submitted.
    pub code: String,
    /// `"{code} - {name}"`.
    pub display_label: String,
}

impl BuildingOption {
    /// Case-insensitive substring match on the label, for searchable pickers.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.display_label.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Fetch the directory and turn it into picker options.
///
/// # Errors
///
/// Any transport or decode failure becomes [`FetchError::DirectoryUnavailable`].
pub async fn load<A: BuildingApi + ?Sized>(api: &A) -> Result<Vec<BuildingOption>, FetchError> {
    match api.all_buildings().await {
        Ok(directory) => {
            let options = options_from_directory(directory);
            tracing::info!(count = options.len(), "building directory loaded");
            Ok(options)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch buildings");
            Err(FetchError::DirectoryUnavailable { reason: e.to_string() })
        }
    }
}

/// Build options in directory order.
#[must_use]
pub fn options_from_directory(directory: Directory) -> Vec<BuildingOption> {
    directory
        .into_iter()
        .map(|(code, info)| BuildingOption { display_label: format!("{code} - {}", info.name), code })
        .collect()
}
