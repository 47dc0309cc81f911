//! Landing view for signed-in users who hit a view outside their role.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth::menu::NavTarget;
use crate::state::auth::AuthState;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let home = move || {
        auth.with(|s| s.role())
            .map_or(NavTarget::Login, NavTarget::home_for)
            .path()
            .to_owned()
    };

    view! {
        <div class="card">
            <p>"Unauthorized Access"</p>
            <A href=home>"Back to your dashboard"</A>
        </div>
    }
}
