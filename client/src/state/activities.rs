//! Activity-list state and the "activities changed" notification.
//!
//! DESIGN
//! ======
//! Views never append to `items` locally. A successful submission bumps
//! `revision`; the list view refetches whenever the revision moves.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use crate::net::api::ApiError;
use crate::net::types::Activity;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivitiesState {
    pub items: Vec<Activity>,
    pub revision: u64,
    pub loading: bool,
    pub error: Option<String>,
}

impl ActivitiesState {
    /// Signal that the server-side list changed.
    pub fn mark_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a list response. On failure the previous items stay visible.
    pub fn finish_load(&mut self, result: Result<Vec<Activity>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Activity> {
        self.items.iter().find(|a| a.id == id)
    }
}
