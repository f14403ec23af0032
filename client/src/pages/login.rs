//! Login page: email + password against the library backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use shelfdesk::api::Credentials;
use shelfdesk::routes::{DASHBOARD_ROUTE, REGISTER_ROUTE};
use shelfdesk::{AuthFlow, AuthPhase, AuthState, SessionService};

use super::finish_attempt;

/// Trim the email and require both fields before hitting the network.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        let ticket = session.begin(AuthFlow::Login);
        let navigate = navigate.clone();
        finish_attempt(
            session.clone(),
            ticket,
            async move { crate::net::api::login(&credentials).await },
            move || navigate(DASHBOARD_ROUTE, NavigateOptions::default()),
        );
    };

    let message = move || {
        let local = info.get();
        if local.is_empty() { auth.get().error.unwrap_or_default() } else { local }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Library Admin"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
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
                    <button class="login-button" type="submit" disabled=move || auth.get().phase() == AuthPhase::Authenticating>
                        {move || if auth.get().phase() == AuthPhase::Authenticating { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !message().is_empty()>
                    <p class="login-message">{message}</p>
                </Show>
                <div class="login-divider"></div>
                <a href=REGISTER_ROUTE class="login-link">
                    "Create an account"
                </a>
            </div>
        </div>
    }
}
