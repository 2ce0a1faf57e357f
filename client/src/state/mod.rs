//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `activities`, `activity_form`) so
//! components depend on small focused models. Each model is a plain struct;
//! the app wraps them in `RwSignal`s provided via context.

pub mod activities;
pub mod activity_form;
pub mod session;
