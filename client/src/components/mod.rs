//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render activity surfaces while reading/writing shared state
//! from Leptos context providers.

pub mod activity_form;
pub mod activity_list;
