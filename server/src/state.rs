//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! building directory is read once at startup and never mutated, so it is
//! shared behind an `Arc` with no lock. The open-classroom source is a trait
//! object so route tests can swap in a mock.

use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta, Utc};
use chrono_tz::Tz;

use crate::services::buildings::BuildingDirectory;
use crate::services::portal::OpenClassroomSource;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state. Clone is cheap (Arc internals).
#[derive(Clone)]
pub struct AppState {
    pub buildings: Arc<BuildingDirectory>,
    pub portal: Arc<dyn OpenClassroomSource>,
    pub timezone: Tz,
    pub lookahead: TimeDelta,
}

impl AppState {
    #[must_use]
    pub fn new(
        buildings: BuildingDirectory,
        portal: Arc<dyn OpenClassroomSource>,
        timezone: Tz,
        lookahead: TimeDelta,
    ) -> Self {
        Self { buildings: Arc::new(buildings), portal, timezone, lookahead }
    }

    /// Current wall-clock time on campus.
    #[must_use]
    pub fn campus_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
