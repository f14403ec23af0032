//! Protected library screens. Their data views live behind the backend's
//! student and book endpoints; here they only frame the route.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::header::Header;

#[component]
fn Screen(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <Header/>
            <main class="dashboard-page__body">
                <h2>{title}</h2>
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! { <Screen title="Students"><a href="/students/add">"Add student"</a></Screen> }
}

#[component]
pub fn AddStudentPage() -> impl IntoView {
    view! { <Screen title="Add student"><a href="/students">"Back to students"</a></Screen> }
}

#[component]
pub fn StudentDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();
    view! { <Screen title="Student"><p class="dashboard-page__id">{id}</p></Screen> }
}

#[component]
pub fn DeleteStudentPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.read().get("id").unwrap_or_default();
    view! { <Screen title="Delete student"><p class="dashboard-page__id">{id}</p></Screen> }
}

#[component]
pub fn AddBooksPage() -> impl IntoView {
    view! { <Screen title="Add books"><a href="/">"Back to dashboard"</a></Screen> }
}
