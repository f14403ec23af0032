//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside `Protected`, so by the time this renders the guard has
//! already confirmed a valid session.

use leptos::prelude::*;
use shelfdesk::AuthState;

use crate::components::header::Header;
use crate::state::session::greeting_name;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="dashboard-page">
            <Header/>
            <main class="dashboard-page__body">
                <h2>{move || format!("Welcome, {}", greeting_name(&auth.get()))}</h2>
                <nav class="dashboard-page__links">
                    <a href="/students">"Students"</a>
                    <a href="/students/add">"Add student"</a>
                    <a href="/addBooks">"Add books"</a>
                </nav>
            </main>
        </div>
    }
}
