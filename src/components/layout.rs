//! Authenticated chrome: sidebar, header, and page content.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout-container">
            <Sidebar/>
            <div class="main-content">
                <Header/>
                <div class="page-content">{children()}</div>
            </div>
        </div>
    }
}
