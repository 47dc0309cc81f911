//! Page header with the role title and signed-in username.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show when=move || auth.with(|s| s.user.is_some())>
            <header class="header">
                <h2>{move || auth.with(|s| s.role().map(|r| r.header_title()).unwrap_or_default())}</h2>
                <div class="header-right">
                    <input class="search" placeholder="Search..."/>
                    <span>
                        {move || auth.with(|s| s.user.as_ref().map(|u| u.username.clone()).unwrap_or_default())}
                    </span>
                </div>
            </header>
        </Show>
    }
}
