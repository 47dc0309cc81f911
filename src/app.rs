//! Root application component with routing and context providers.
//!
//! The app is rendered entirely in the browser: the session is restored from
//! `localStorage` while `App` is built, before anything is drawn.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::menu::NavTarget;
use crate::auth::session::SessionManager;
use crate::components::{layout::Layout, require_auth::RequireAuth};
use crate::config::SessionConfig;
use crate::net::channel::RequestChannel;
use crate::pages::{
    login::LoginPage, register::RegisterPage, unauthorized::UnauthorizedPage, workspace::WorkspacePage,
};
use crate::state::auth::{AuthState, SessionHandle};
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Build the tab's session and publish every state change through `publish`.
///
/// Storage is read before this returns, so the first render already sees the
/// resolved session rather than `Resolving`.
pub(crate) fn start_session<S: KeyValueStorage + 'static>(
    backend: S,
    config: &SessionConfig,
    publish: impl Fn(AuthState) + Send + Sync + 'static,
) -> SessionHandle<S> {
    let channel = RequestChannel::new(&config.api_base);
    let session = SessionHandle::new(SessionManager::new(backend, channel, config));
    session.subscribe(move |state| publish(AuthState::from(state)));
    session.initialize();
    session
}

/// Guarded route body: role check, then chrome, then the view.
fn guarded(target: NavTarget) -> impl IntoView {
    view! {
        <RequireAuth target=target>
            <Layout>
                <WorkspacePage target=target/>
            </Layout>
        </RequireAuth>
    }
}

/// Root application component.
///
/// Builds the one session manager for this tab, bridges its notifications
/// into the `AuthState` signal, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let session = start_session(BrowserStorage, &SessionConfig::from_build_env(), move |state| auth.set(state));

    provide_context(auth);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/helpdesk-client.css"/>
        <Title text="SupportHub"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("create") view=|| guarded(NavTarget::CreateTicket)/>
                <Route path=StaticSegment("tickets") view=|| guarded(NavTarget::Tickets)/>
                <Route path=StaticSegment("agent") view=|| guarded(NavTarget::AgentDashboard)/>
                <Route path=StaticSegment("admin") view=|| guarded(NavTarget::AdminDashboard)/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
            </Routes>
        </Router>
    }
}
