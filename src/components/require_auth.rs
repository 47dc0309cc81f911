//! Route guard wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through `RequireAuth`, which re-evaluates
//! the guard whenever auth state changes. Nothing renders until the session
//! has resolved and the decision is `Allow`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::guard::AccessDecision;
use crate::auth::menu::NavTarget;
use crate::state::auth::AuthState;

/// Render `children` only when the current identity may view `target`;
/// otherwise redirect to login or the unauthorized view.
#[component]
pub fn RequireAuth(target: NavTarget, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| auth.with(|s| s.access(target)));

    Effect::new(move || {
        let Some(path) = decision.get().and_then(AccessDecision::redirect_path) else {
            return;
        };
        navigate(
            path,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });

    view! {
        <Show when=move || decision.get() == Some(AccessDecision::Allow)>
            {children()}
        </Show>
    }
}
