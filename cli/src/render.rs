//! Plain-text rendering of controller state.
//!
//! Mirrors the single-page finder: a notice line, then either a loading
//! line, the initial prompt, "no results", or one section per building with
//! an expand marker. Expanded buildings list each room and its windows.

use std::fmt::Write as _;

use watclassroom::{BuildingAvailability, BuildingOption, ExpansionState, FetchError, Phase};

pub const PROMPT: &str = "Select a building and press Submit to see available rooms and times.";
pub const NO_RESULTS: &str = "No results to display.";
pub const LOADING: &str = "Loading...";

const EXPANDED: &str = "▲";
const COLLAPSED: &str = "▼";

/// Picker options whose label matches `filter`, one per line.
#[must_use]
pub fn render_options(options: &[BuildingOption], filter: Option<&str>) -> String {
    let query = filter.unwrap_or("");
    options
        .iter()
        .filter(|option| option.matches(query))
        .fold(String::new(), |mut out, option| {
            let _ = writeln!(out, "{}", option.display_label);
            out
        })
}

/// Full view for a phase plus the current notice.
#[must_use]
pub fn render_view(phase: &Phase, notice: Option<&FetchError>) -> String {
    let mut out = String::new();
    if let Some(notice) = notice {
        let _ = writeln!(out, "{}", notice.user_message());
    }

    match phase {
        Phase::DirectoryLoading | Phase::AvailabilityLoading { .. } => {
            let _ = writeln!(out, "{LOADING}");
        }
        Phase::Displaying { availability, .. } if availability.is_empty() => {
            let _ = writeln!(out, "{NO_RESULTS}");
        }
        Phase::Displaying { availability, expansion } => {
            out.push_str(&render_buildings(availability, expansion));
        }
        Phase::Idle | Phase::Ready | Phase::Failed { .. } => {
            let _ = writeln!(out, "{PROMPT}");
        }
    }
    out
}

/// Building sections in response order.
#[must_use]
pub fn render_buildings(availability: &BuildingAvailability, expansion: &ExpansionState) -> String {
    let mut out = String::new();
    for (building_code, rooms) in availability {
        let expanded = expansion.is_expanded(building_code);
        let marker = if expanded { EXPANDED } else { COLLAPSED };
        let _ = writeln!(out, "{building_code} {marker}");
        if !expanded {
            continue;
        }
        for (room_code, slots) in rooms {
            let _ = writeln!(out, "  {room_code}");
            for slot in slots {
                let _ = writeln!(out, "    {} - {}", slot.start, slot.end);
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
