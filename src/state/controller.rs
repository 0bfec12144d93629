//! Availability controller: the screen's state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The render collaborator reads this controller and sends back three
//! events: selection changed, submit pressed, building toggled. Startup and
//! submit are also available split-phase (`begin_*` hands out a pending
//! request, `finish_*` applies its outcome) so an event loop can keep
//! rendering while a request is outstanding.
//!
//! ORDERING
//! ========
//! Last submit wins. Every submit stamps a new request id, and an outcome
//! whose id is not the latest one is dropped on arrival. There is no
//! network cancellation and no timeout; a request that never resolves
//! leaves the controller in `AvailabilityLoading`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;

use crate::net::api::BuildingApi;
use crate::net::types::BuildingAvailability;

use super::availability;
use super::directory::{self, BuildingOption};
use super::error::{FetchError, TransitionError};
use super::expansion::ExpansionState;

// =============================================================================
// PHASE
// =============================================================================

/// Controller lifecycle. Availability and expansion only exist together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing loaded yet.
    #[default]
    Idle,
    /// Startup directory request outstanding.
    DirectoryLoading,
    /// Options known (possibly empty); nothing submitted yet.
    Ready,
    /// Availability request outstanding for this code.
    AvailabilityLoading { building_code: String },
    /// Latest response and its expand/collapse flags.
    Displaying { availability: BuildingAvailability, expansion: ExpansionState },
    /// Latest request failed; previous data discarded.
    Failed { error: FetchError },
}

impl Phase {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::DirectoryLoading => "directory_loading",
            Self::Ready => "ready",
            Self::AvailabilityLoading { .. } => "availability_loading",
            Self::Displaying { .. } => "displaying",
            Self::Failed { .. } => "failed",
        }
    }
}

// =============================================================================
// PENDING REQUESTS
// =============================================================================

/// Startup directory request handed out by [`AvailabilityController::begin_startup`].
pub struct DirectoryLoad<A: ?Sized> {
    api: Arc<A>,
}

impl<A: BuildingApi + ?Sized> DirectoryLoad<A> {
    /// Perform the request.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::DirectoryUnavailable`] on any failure.
    pub async fn resolve(self) -> Result<Vec<BuildingOption>, FetchError> {
        directory::load(self.api.as_ref()).await
    }
}

/// Availability request handed out by [`AvailabilityController::begin_submit`].
/// The building code is fixed when the request is created.
pub struct PendingFetch<A: ?Sized> {
    api: Arc<A>,
    request_id: u64,
    building_code: String,
}

impl<A: BuildingApi + ?Sized> PendingFetch<A> {
    #[must_use]
    pub fn building_code(&self) -> &str {
        &self.building_code
    }

    #[must_use]
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Perform the request. Apply the outcome with
    /// [`AvailabilityController::finish_submit`].
    pub async fn resolve(self) -> FetchOutcome {
        let result = availability::fetch(self.api.as_ref(), &self.building_code).await;
        FetchOutcome { request_id: self.request_id, building_code: self.building_code, result }
    }
}

/// Result of a [`PendingFetch`], tagged with the request that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOutcome {
    pub request_id: u64,
    pub building_code: String,
    pub result: Result<BuildingAvailability, FetchError>,
}

// =============================================================================
// CONTROLLER
// =============================================================================

pub struct AvailabilityController<A: ?Sized> {
    api: Arc<A>,
    phase: Phase,
    options: Vec<BuildingOption>,
    selection: Option<String>,
    /// The single user-visible error surface; latest event wins.
    notice: Option<FetchError>,
    latest_request: u64,
}

impl<A: BuildingApi + ?Sized> AvailabilityController<A> {
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            phase: Phase::Idle,
            options: Vec::new(),
            selection: None,
            notice: None,
            latest_request: 0,
        }
    }

    // -------------------------------------------------------------------------
    // startup
    // -------------------------------------------------------------------------

    /// Load the directory and move to `Ready`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] unless the controller is `Idle`; the
    /// directory loads once per session. A failed load is not an error here:
    /// it lands in `Ready` with no options and a notice.
    pub async fn on_startup(&mut self) -> Result<(), TransitionError> {
        let load = self.begin_startup()?;
        let result = load.resolve().await;
        self.finish_startup(result)
    }

    /// `Idle -> DirectoryLoading`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] unless the controller is `Idle`.
    pub fn begin_startup(&mut self) -> Result<DirectoryLoad<A>, TransitionError> {
        self.require("startup", matches!(self.phase, Phase::Idle))?;
        self.phase = Phase::DirectoryLoading;
        Ok(DirectoryLoad { api: Arc::clone(&self.api) })
    }

    /// `DirectoryLoading -> Ready`, attaching a notice on failure.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] unless the controller is `DirectoryLoading`.
    pub fn finish_startup(&mut self, result: Result<Vec<BuildingOption>, FetchError>) -> Result<(), TransitionError> {
        self.require("finish_startup", matches!(self.phase, Phase::DirectoryLoading))?;
        match result {
            Ok(options) => {
                self.options = options;
                self.notice = None;
            }
            Err(error) => {
                self.options = Vec::new();
                self.notice = Some(error);
            }
        }
        self.phase = Phase::Ready;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // selection
    // -------------------------------------------------------------------------

    /// Record the picked building. Only codes from the loaded options are
    /// accepted; a blank or unknown code clears the selection, so after a
    /// failed directory load nothing can be submitted.
    /// Never fetches; an in-flight request keeps its original target.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] before the directory has loaded.
    pub fn on_select(&mut self, code: &str) -> Result<(), TransitionError> {
        self.require("select", !matches!(self.phase, Phase::Idle | Phase::DirectoryLoading))?;
        let code = code.trim();
        let known = self.options.iter().any(|option| option.code == code);
        if !code.is_empty() && !known {
            tracing::warn!(building_code = %code, "ignoring selection outside building options");
        }
        self.selection = known.then(|| code.to_owned());
        Ok(())
    }

    // -------------------------------------------------------------------------
    // submit
    // -------------------------------------------------------------------------

    /// Fetch availability for the current selection and apply it.
    ///
    /// Returns `false` without any transition or network call when nothing
    /// is selected.
    pub async fn on_submit(&mut self) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let outcome = pending.resolve().await;
        self.finish_submit(outcome)
    }

    /// Enter `AvailabilityLoading` for the current selection.
    ///
    /// Returns `None`, leaving state untouched, when nothing is selected.
    /// Starting a new request supersedes any outstanding one.
    pub fn begin_submit(&mut self) -> Option<PendingFetch<A>> {
        let building_code = self.selection.clone()?;
        self.latest_request += 1;
        self.notice = None;
        self.phase = Phase::AvailabilityLoading { building_code: building_code.clone() };
        tracing::debug!(request_id = self.latest_request, %building_code, "availability request started");
        Some(PendingFetch { api: Arc::clone(&self.api), request_id: self.latest_request, building_code })
    }

    /// Apply a fetch outcome. Returns `false` if it was stale or already
    /// applied, and dropped.
    pub fn finish_submit(&mut self, outcome: FetchOutcome) -> bool {
        let awaiting = matches!(
            &self.phase,
            Phase::AvailabilityLoading { building_code } if *building_code == outcome.building_code
        );
        if outcome.request_id != self.latest_request || !awaiting {
            tracing::debug!(
                request_id = outcome.request_id,
                latest = self.latest_request,
                building_code = %outcome.building_code,
                "discarding stale availability result"
            );
            return false;
        }
        match outcome.result {
            Ok(availability) => {
                let expansion = ExpansionState::reset_for(availability.keys().cloned());
                self.notice = None;
                self.phase = Phase::Displaying { availability, expansion };
            }
            Err(error) => {
                self.notice = Some(error.clone());
                self.phase = Phase::Failed { error };
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // expansion
    // -------------------------------------------------------------------------

    /// Flip one building's expand/collapse flag.
    ///
    /// An unknown building is a logic fault: it is logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] unless the controller is `Displaying`.
    pub fn on_toggle_building(&mut self, code: &str) -> Result<(), TransitionError> {
        let phase = self.phase.name();
        let Phase::Displaying { expansion, .. } = &mut self.phase else {
            return Err(TransitionError { operation: "toggle_building", phase });
        };
        if let Err(e) = expansion.toggle(code) {
            tracing::warn!(error = %e, "ignoring toggle outside current result set");
        }
        Ok(())
    }

    /// Hide the current notice without changing phase.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -------------------------------------------------------------------------
    // accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn options(&self) -> &[BuildingOption] {
        &self.options
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&FetchError> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::DirectoryLoading | Phase::AvailabilityLoading { .. })
    }

    /// Whether submit would do anything; mirrors a disabled submit button.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selection.is_some()
    }

    #[must_use]
    pub fn availability(&self) -> Option<&BuildingAvailability> {
        match &self.phase {
            Phase::Displaying { availability, .. } => Some(availability),
            _ => None,
        }
    }

    #[must_use]
    pub fn expansion(&self) -> Option<&ExpansionState> {
        match &self.phase {
            Phase::Displaying { expansion, .. } => Some(expansion),
            _ => None,
        }
    }

    /// A successful response with zero buildings.
    #[must_use]
    pub fn is_no_results(&self) -> bool {
        self.availability().is_some_and(indexmap::IndexMap::is_empty)
    }

    fn require(&self, operation: &'static str, allowed: bool) -> Result<(), TransitionError> {
        if allowed {
            Ok(())
        } else {
            Err(TransitionError { operation, phase: self.phase.name() })
        }
    }
}
