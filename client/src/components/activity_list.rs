//! Activity list with clickable cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Refetches whenever `ActivitiesState::revision` moves or the session token
//! changes. The loaded items are kept in context so the detail page can show
//! the activity summary without another request.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::{ActivityApi, HttpActivityApi};
use crate::net::types::Activity;
use crate::state::activities::ActivitiesState;
use crate::state::session::Session;
use crate::util::format::{calories_label, duration_label};
use crate::util::gate::activity_path;

#[component]
pub fn ActivityList() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();

    // Track only the revision so writing `items` does not re-trigger the fetch.
    let revision = Memo::new(move |_| activities.with(|s| s.revision));

    Effect::new(move || {
        let _ = revision.get();
        let Some(api) = session.with(|s| HttpActivityApi::for_session(&config, s)) else {
            return;
        };
        activities.update(ActivitiesState::begin_load);
        leptos::task::spawn_local(async move {
            let result = api.list_activities().await;
            if let Err(e) = &result {
                leptos::logging::warn!("activity list failed: {e}");
            }
            activities.try_update(|s| s.finish_load(result));
        });
    });

    view! {
        <section class="activity-list">
            <Show when=move || activities.with(|s| s.error.is_some())>
                <p class="activity-list__error">
                    {move || activities.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show
                when=move || activities.with(|s| !s.items.is_empty())
                fallback=move || {
                    view! {
                        <p class="activity-list__empty">
                            {move || {
                                if activities.with(|s| s.loading) {
                                    "Loading activities..."
                                } else {
                                    "No activities yet."
                                }
                            }}
                        </p>
                    }
                }
            >
                <div class="activity-list__grid">
                    <For
                        each=move || activities.with(|s| s.items.clone())
                        key=|activity| activity.id.clone()
                        children=move |activity| view! { <ActivityCard activity/> }
                    />
                </div>
            </Show>
        </section>
    }
}

/// A clickable card linking to the activity detail page.
#[component]
fn ActivityCard(activity: Activity) -> impl IntoView {
    let href = activity_path(&activity.id);
    view! {
        <a class="activity-card" href=href>
            <span class="activity-card__type">{activity.kind.label()}</span>
            <span class="activity-card__metric">"Duration: " {duration_label(activity.duration)}</span>
            <span class="activity-card__metric">"Calories: " {calories_label(activity.calories_burned)}</span>
        </a>
    }
}
