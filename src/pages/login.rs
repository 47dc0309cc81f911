//! Login page: username/password exchange for a bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page fetches the token and hands it to the session. The landing route
//! comes from the identity `login` returns; the token is never decoded here.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::identity::Identity;
use crate::auth::menu::NavTarget;
use crate::state::auth::SessionHandle;

pub(crate) const LOGIN_FAILED: &str = "Login failed";

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Landing path after a successful login, or the message to show instead.
/// The underlying reason is logged, never displayed.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn login_destination(outcome: Result<Identity, String>) -> Result<&'static str, &'static str> {
    match outcome {
        Ok(identity) => Ok(NavTarget::home_for(identity.role).path()),
        Err(e) => {
            log::warn!("login failed: {e}");
            Err(LOGIN_FAILED)
        }
    }
}

/// Username + password login form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, pass_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match crate::net::api::obtain_token(session.channel(), &user_value, &pass_value).await {
                    Ok(token) => session.login(&token).map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                };
                match login_destination(outcome) {
                    Ok(path) => {
                        password.set(String::new());
                        navigate(path, NavigateOptions::default());
                    }
                    Err(msg) => info.set(msg.to_owned()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, &navigate, user_value, pass_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <h2 class="login-title">"Welcome Back"</h2>
                <p class="login-subtitle">"Sign in to continue to your dashboard"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-btn" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-footer">
                    <span>"Don't have an account? "</span>
                    <A href=NavTarget::Register.path() attr:class="login-link">
                        "Register here"
                    </A>
                </div>
            </div>
        </div>
    }
}
