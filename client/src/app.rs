//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::auth::bridge::AuthBridge;
use crate::auth::provider::PkceProvider;
use crate::auth::source::CredentialSource;
use crate::config::ClientConfig;
use crate::pages::{activities::ActivitiesPage, activity_detail::ActivityDetailPage, login::LoginPrompt};
use crate::state::activities::ActivitiesState;
use crate::state::session::{Session, SessionStore};
use crate::util::gate::{RouteDecision, decide};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, session, activity list state and the credential
/// provider, then bridges provider credentials into the session store.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = RwSignal::new(Session::default());
    let activities = RwSignal::new(ActivitiesState::default());
    let provider = PkceProvider::new(config.auth.clone());

    provide_context(config);
    provide_context(session);
    provide_context(activities);
    provide_context(provider.clone());

    let bridge = Rc::new(AuthBridge::new(session));
    AuthBridge::attach(&bridge, &provider);

    // Runs once, in the browser only.
    Effect::new(move || provider.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/fitness.css"/>
        <Title text="Fitness Tracker"/>

        <Router>
            <Routes fallback=|| view! { <Gate/> }>
                <Route path=StaticSegment("") view=Gate/>
                <Route path=StaticSegment("activities") view=Gate/>
                <Route path=(StaticSegment("activities"), ParamSegment("id")) view=Gate/>
            </Routes>
        </Router>
    }
}

/// Resolves the current path against the session and renders the result.
#[component]
fn Gate() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let decision = Memo::new(move |_| session.with(|s| location.pathname.with(|path| decide(s, path))));

    move || match decision.get() {
        RouteDecision::Login => view! { <LoginPrompt/> }.into_any(),
        RouteDecision::Redirect { to } => view! { <Redirect path=to/> }.into_any(),
        RouteDecision::Activities => view! {
            <AuthenticatedShell>
                <ActivitiesPage/>
            </AuthenticatedShell>
        }
        .into_any(),
        RouteDecision::ActivityDetail { id } => view! {
            <AuthenticatedShell>
                <ActivityDetailPage id/>
            </AuthenticatedShell>
        }
        .into_any(),
        RouteDecision::NotFound => view! {
            <AuthenticatedShell>
                <p class="not-found">"Page not found."</p>
            </AuthenticatedShell>
        }
        .into_any(),
    }
}

#[component]
fn AuthenticatedShell(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let provider = expect_context::<PkceProvider>();

    let display_name = move || {
        session.with(|s| s.user().map(|u| u.display_name().to_owned()).unwrap_or_default())
    };
    let on_logout = move |_| {
        session.logout();
        provider.logout();
    };

    view! {
        <div class="app-shell">
            <header class="session-bar">
                <span class="session-bar__title">"Fitness Tracker"</span>
                <span class="session-bar__user">{display_name}</span>
                <button class="session-bar__logout" on:click=on_logout>
                    "LOGOUT"
                </button>
            </header>
            <main class="app-shell__content">{children()}</main>
        </div>
    }
}
