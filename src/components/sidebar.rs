//! Sidebar navigation driven by the role menu.
//!
//! Links come from `menu::visible_targets`; hiding a link is cosmetic, the
//! target route still runs its own guard. Logout needs no explicit redirect:
//! the enclosing `RequireAuth` sees the session end and sends the user to
//! the login view.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::menu::visible_targets;
use crate::state::auth::{AuthState, SessionHandle};

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionHandle>();

    let links = move || {
        visible_targets(auth.with(AuthState::role))
            .iter()
            .map(|target| view! { <A href=target.path()>{target.label()}</A> })
            .collect_view()
    };

    let on_logout = move |_: leptos::ev::MouseEvent| session.logout();

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h3 class="sidebar-title">"SupportHub"</h3>
            </div>
            <nav class="sidebar-menu">{links}</nav>
            <Show when=move || auth.with(|s| s.user.is_some())>
                <div class="sidebar-footer">
                    <div class="sidebar-username">
                        {move || auth.with(|s| s.user.as_ref().map(|u| u.username.clone()).unwrap_or_default())}
                    </div>
                    <button class="sidebar-logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </div>
            </Show>
        </aside>
    }
}
