//! Top bar with the signed-in admin and a logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use shelfdesk::{AuthState, SessionService};

use crate::state::session::greeting_name;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate(shelfdesk::routes::LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <header class="app-header">
            <span class="app-header__title">"Library Admin"</span>
            <span class="app-header__spacer"></span>
            <span class="app-header__user">{move || greeting_name(&auth.get())}</span>
            <button class="btn app-header__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
