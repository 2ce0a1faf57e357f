//! Form for recording a new activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at the top of the activities page. The parent passes
//! `on_activity_added`, which fires once per successful submission.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::ClientConfig;
#[cfg(feature = "hydrate")]
use crate::net::api::{ApiError, HttpActivityApi};
use crate::net::types::ActivityType;
#[cfg(feature = "hydrate")]
use crate::state::activity_form::{SubmitOutcome, submit_activity};
use crate::state::activity_form::ActivityFormState;
#[cfg(feature = "hydrate")]
use crate::state::session::Session;

#[component]
pub fn ActivityForm(on_activity_added: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(ActivityFormState::default());
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<Session>>();
    #[cfg(feature = "hydrate")]
    let config = expect_context::<ClientConfig>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = form.try_update(ActivityFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let Some(api) = session.with_untracked(|s| HttpActivityApi::for_session(&config, s)) else {
                leptos::logging::error!("Error adding activity: {}", ApiError::NotAuthenticated);
                form.try_update(|f| f.finish(&SubmitOutcome::Failed(ApiError::NotAuthenticated)));
                return;
            };
            leptos::task::spawn_local(async move {
                let outcome = submit_activity(&api, &draft, move || on_activity_added.run(())).await;
                // The form may have unmounted while the request was in flight.
                form.try_update(|f| f.finish(&outcome));
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, on_activity_added);
        }
    };

    view! {
        <form class="activity-form" on:submit=on_submit>
            <label class="activity-form__label">
                "Activity Type"
                <select
                    class="activity-form__input"
                    prop:value=move || form.with(|f| f.draft.kind.as_str())
                    on:change=move |ev| {
                        if let Some(kind) = ActivityType::parse(&event_target_value(&ev)) {
                            form.update(|f| f.set_kind(kind));
                        }
                    }
                >
                    {ActivityType::ALL
                        .into_iter()
                        .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="activity-form__label">
                "Calories Burned"
                <input
                    class="activity-form__input"
                    type="number"
                    prop:value=move || form.with(|f| f.draft.calories_burned.clone())
                    on:input=move |ev| form.update(|f| f.set_calories_burned(event_target_value(&ev)))
                />
            </label>
            <label class="activity-form__label">
                "Duration (minutes)"
                <input
                    class="activity-form__input"
                    type="number"
                    prop:value=move || form.with(|f| f.draft.duration.clone())
                    on:input=move |ev| form.update(|f| f.set_duration(event_target_value(&ev)))
                />
            </label>
            <Show when=move || form.with(|f| f.error.is_some())>
                <p class="activity-form__error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.submitting)>
                "Add Activity"
            </button>
        </form>
    }
}
