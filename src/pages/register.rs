//! Registration page. A successful sign-up logs straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "csr")]
use crate::auth::identity::Identity;
use crate::auth::identity::Role;
use crate::auth::menu::NavTarget;
use crate::net::types::RegisterRequest;
use crate::state::auth::SessionHandle;

/// Raw field values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

fn validate_register_form(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Fill in username, email, and password.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match");
    }
    let role = if form.role.is_empty() {
        Role::User
    } else {
        Role::parse(&form.role).ok_or("Choose a valid role.")?
    };
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        role,
    })
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "User",
        Role::Agent => "Agent",
        Role::Admin => "Admin",
    }
}

#[cfg(feature = "csr")]
async fn register_and_login(session: &SessionHandle, request: &RegisterRequest) -> Result<Identity, String> {
    let channel = session.channel();
    crate::net::api::register(channel, request)
        .await
        .map_err(|e| format!("Registration failed: {e}"))?;
    let token = crate::net::api::obtain_token(channel, &request.username, &request.password)
        .await
        .map_err(|e| format!("Registered, but login failed: {e}"))?;
    session
        .login(&token)
        .map_err(|e| format!("Registered, but login failed: {e}"))
}

/// Sign-up form; on success fetches a token and lands on the role's home view.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            role: role.get(),
        };
        let request = match validate_register_form(&form) {
            Ok(req) => req,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match register_and_login(&session, &request).await {
                    Ok(identity) => {
                        navigate(NavTarget::home_for(identity.role).path(), NavigateOptions::default());
                    }
                    Err(msg) => {
                        leptos::logging::warn!("{msg}");
                        info.set(msg);
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&session, &navigate, request);
            busy.set(false);
        }
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <h2 class="login-title">"Create Account"</h2>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm Password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{role_label(r)}</option> })
                            .collect_view()}
                    </select>
                    <button class="login-btn" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-footer">
                    <span>"Already have an account? "</span>
                    <A href=NavTarget::Login.path() attr:class="login-link">
                        "Login here"
                    </A>
                </div>
            </div>
        </div>
    }
}
