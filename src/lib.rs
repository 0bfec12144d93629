//! Empty-classroom finder core.
//!
//! SYSTEM CONTEXT
//! ==============
//! This crate owns the availability-fetch state machine: it loads the
//! building directory once, submits a selected building code to the backend,
//! and keeps per-building expand/collapse flags in step with each response.
//! Rendering is left to a collaborator (see the `cli` crate) that reads the
//! controller's accessors and feeds back selection, submit, and toggle events.

pub mod net;
pub mod state;

pub use net::api::{ApiConfig, BuildingApi, HttpBuildingApi};
pub use net::types::{BuildingAvailability, RoomAvailability, TimeInterval};
pub use state::controller::{AvailabilityController, Phase};
pub use state::directory::BuildingOption;
pub use state::error::{FetchError, TransitionError};
pub use state::expansion::{ExpansionError, ExpansionState};
