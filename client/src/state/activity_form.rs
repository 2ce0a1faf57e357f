//! Activity submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form component owns an `ActivityFormState` signal. On submit it takes
//! a copy of the draft, awaits `submit_activity`, then feeds the outcome back
//! through `finish`.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and shown inline; the draft is kept so the user can
//! resubmit. There is no automatic retry.

#[cfg(test)]
#[path = "activity_form_test.rs"]
mod activity_form_test;

use crate::net::api::{ActivityApi, ApiError};
use crate::net::types::{ActivityDraft, ActivityType};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityFormState {
    pub draft: ActivityDraft,
    pub submitting: bool,
    pub error: Option<String>,
}

/// Result of one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Failed(ApiError),
}

impl ActivityFormState {
    pub fn set_kind(&mut self, kind: ActivityType) {
        self.draft.kind = kind;
    }

    pub fn set_duration(&mut self, value: String) {
        self.draft.duration = value;
    }

    pub fn set_calories_burned(&mut self, value: String) {
        self.draft.calories_burned = value;
    }

    /// Copy the draft for sending. `None` while a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<ActivityDraft> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.draft.clone())
    }

    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        self.submitting = false;
        match outcome {
            SubmitOutcome::Added => {
                self.draft = ActivityDraft::default();
                self.error = None;
            }
            SubmitOutcome::Failed(e) => self.error = Some(failure_message(e)),
        }
    }
}

fn failure_message(error: &ApiError) -> String {
    format!("Could not add activity: {error}")
}

/// Send `draft` to the API, running `on_activity_added` once on success.
pub async fn submit_activity<A: ActivityApi>(
    api: &A,
    draft: &ActivityDraft,
    on_activity_added: impl FnOnce(),
) -> SubmitOutcome {
    match api.create_activity(draft).await {
        Ok(()) => {
            on_activity_added();
            SubmitOutcome::Added
        }
        Err(e) => {
            leptos::logging::error!("Error adding activity: {e}");
            SubmitOutcome::Failed(e)
        }
    }
}
