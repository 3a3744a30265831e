//! Networking modules for the detail endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `types` defines the per-endpoint reply shapes
//! and `error` the failures surfaced to the detail view.

pub mod api;
pub mod error;
pub mod types;
