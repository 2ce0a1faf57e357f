//! Networking modules for the fitness REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs authenticated HTTP calls and `types` defines the JSON
//! schema shared with the API.

pub mod api;
pub mod types;
