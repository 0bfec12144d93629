//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the two HTTP calls the core makes (directory and
//! availability) and `types` defines the wire schema they decode into.

pub mod api;
pub mod types;
