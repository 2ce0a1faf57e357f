//! Login prompt shown in place of every route while logged out.

use leptos::prelude::*;

use crate::auth::provider::PkceProvider;
use crate::auth::source::CredentialSource;

/// Login prompt: one button starting the OAuth2 PKCE redirect.
#[component]
pub fn LoginPrompt() -> impl IntoView {
    let provider = expect_context::<PkceProvider>();
    let errors = provider.clone();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Fitness Tracker"</h1>
                <p class="login-card__subtitle">"Sign in to record and review your workouts."</p>
                <button class="login-button" on:click=move |_| provider.login()>
                    "LOGIN"
                </button>
                {move || errors.last_error().map(|e| view! { <p class="login-message">{e}</p> })}
            </div>
        </div>
    }
}
