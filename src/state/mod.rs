//! Client state for the availability screen.
//!
//! ARCHITECTURE
//! ============
//! `directory` and `availability` wrap the two network calls and translate
//! transport errors into the core taxonomy in `error`. `expansion` is a pure
//! per-building flag map. `controller` sequences all of them and is the only
//! place screen state changes.

pub mod availability;
pub mod controller;
pub mod directory;
pub mod error;
pub mod expansion;

#[cfg(test)]
pub(crate) mod test_helpers;
