//! Error taxonomy seen by the controller and the render collaborator.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fetch failures, already stripped of transport detail beyond a reason string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The startup directory load failed. Non-fatal.
    #[error("building directory unavailable: {reason}")]
    DirectoryUnavailable { reason: String },

    /// An availability request failed. Fatal to that request only.
    #[error("availability unavailable for {building_code}: {reason}")]
    AvailabilityUnavailable { building_code: String, reason: String },
}

impl FetchError {
    /// Message suitable for the single notice surface.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::DirectoryUnavailable { .. } => "Failed to load building list. Please try again.",
            Self::AvailabilityUnavailable { .. } => "Failed to fetch available rooms. Please try again.",
        }
    }

    /// Stable code for logs and the collaborator.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DirectoryUnavailable { .. } => "E_DIRECTORY_UNAVAILABLE",
            Self::AvailabilityUnavailable { .. } => "E_AVAILABILITY_UNAVAILABLE",
        }
    }
}

/// An operation was invoked in a phase where it has no meaning.
/// State is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{operation} is not allowed while {phase}")]
pub struct TransitionError {
    pub operation: &'static str,
    pub phase: &'static str,
}
