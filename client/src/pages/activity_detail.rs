//! Activity detail page: summary plus the activity's recommendation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The summary comes from the list already loaded into `ActivitiesState`;
//! only the recommendation is fetched here. An id the API does not know is
//! shown as "not found" rather than as a failure.

#[cfg(test)]
#[path = "activity_detail_test.rs"]
mod activity_detail_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::{ActivityApi, ApiError, HttpActivityApi};
use crate::net::types::{Activity, Recommendation};
use crate::state::activities::ActivitiesState;
use crate::state::session::Session;
use crate::util::format::{calories_label, duration_label, timestamp_label};
use crate::util::gate::ACTIVITIES_PATH;

fn recommendation_error_message(error: &ApiError) -> String {
    if error.is_not_found() {
        "No recommendation found for this activity.".to_owned()
    } else {
        format!("Could not load activity details: {error}")
    }
}

/// Non-empty sections of a recommendation, in display order.
fn recommendation_sections(rec: &Recommendation) -> Vec<(&'static str, Vec<String>)> {
    [
        ("Improvements", &rec.improvements),
        ("Suggestions", &rec.suggestions),
        ("Safety Guidelines", &rec.safety),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(title, items)| (title, items.clone()))
    .collect()
}

#[component]
pub fn ActivityDetailPage(id: String) -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();

    let summary = {
        let id = id.clone();
        move || activities.with(|s| s.find(&id).cloned())
    };

    let recommendation = LocalResource::new(move || {
        let api = session.with(|s| HttpActivityApi::for_session(&config, s));
        let id = id.clone();
        async move {
            match api {
                Some(api) => api.activity_recommendation(&id).await,
                None => Err(ApiError::NotAuthenticated),
            }
        }
    });

    view! {
        <div class="activity-detail">
            <a class="activity-detail__back" href=ACTIVITIES_PATH>
                "Back to activities"
            </a>
            {move || summary().map(|activity| view! { <ActivitySummary activity/> })}
            <Suspense fallback=move || view! { <p>"Loading recommendation..."</p> }>
                {move || {
                    recommendation
                        .get()
                        .map(|result| match result {
                            Ok(rec) => view! { <RecommendationView rec/> }.into_any(),
                            Err(e) => {
                                if !e.is_not_found() {
                                    leptos::logging::warn!("recommendation fetch failed: {e}");
                                }
                                view! {
                                    <p class="activity-detail__error">{recommendation_error_message(&e)}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ActivitySummary(activity: Activity) -> impl IntoView {
    view! {
        <section class="activity-detail__summary">
            <h2>{activity.kind.label()}</h2>
            <p>"Duration: " {duration_label(activity.duration)}</p>
            <p>"Calories Burned: " {calories_label(activity.calories_burned)}</p>
            <p>"Date: " {timestamp_label(activity.start_time.as_deref().or(activity.created_at.as_deref()))}</p>
        </section>
    }
}

#[component]
fn RecommendationView(rec: Recommendation) -> impl IntoView {
    let sections = recommendation_sections(&rec);
    view! {
        <section class="activity-detail__recommendation">
            <h3>"Analysis"</h3>
            <p>{rec.recommendation}</p>
            {sections
                .into_iter()
                .map(|(title, items)| {
                    view! {
                        <h3>{title}</h3>
                        <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
                    }
                })
                .collect_view()}
        </section>
    }
}
