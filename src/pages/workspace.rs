//! Guarded workspace views.
//!
//! Ticket forms, lists, and dashboards are fed by separate REST views; this
//! page only provides the titled frame they render into.

use leptos::prelude::*;

use crate::auth::menu::NavTarget;

#[component]
pub fn WorkspacePage(target: NavTarget) -> impl IntoView {
    view! {
        <section class="workspace" data-target=target.path()>
            <h3 class="workspace__title">{target.label()}</h3>
        </section>
    }
}
