//! Activities page: creation form above the activity list.

use leptos::prelude::*;

use crate::components::activity_form::ActivityForm;
use crate::components::activity_list::ActivityList;
use crate::state::activities::ActivitiesState;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let on_activity_added = Callback::new(move |()| {
        activities.try_update(ActivitiesState::mark_changed);
    });

    view! {
        <div class="activities-page">
            <ActivityForm on_activity_added/>
            <ActivityList/>
        </div>
    }
}
