//! Registration page; a successful register signs the user straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use shelfdesk::api::Registration;
use shelfdesk::routes::{DASHBOARD_ROUTE, LOGIN_ROUTE};
use shelfdesk::{AuthFlow, AuthPhase, AuthState, SessionService};

use super::finish_attempt;

pub fn validate_register_input(name: &str, email: &str, password: &str) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    Ok(Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let registration =
            match validate_register_input(&name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
                Ok(registration) => registration,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        info.set(String::new());

        let ticket = session.begin(AuthFlow::Register);
        let navigate = navigate.clone();
        finish_attempt(
            session.clone(),
            ticket,
            async move { crate::net::api::register(&registration).await },
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
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        {move || if auth.get().phase() == AuthPhase::Authenticating { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !message().is_empty()>
                    <p class="login-message">{message}</p>
                </Show>
                <div class="login-divider"></div>
                <a href=LOGIN_ROUTE class="login-link">
                    "Already registered? Sign in"
                </a>
            </div>
        </div>
    }
}
