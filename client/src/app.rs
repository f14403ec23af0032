//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};
use shelfdesk::SessionService;
use shelfdesk::guard::{Navigation, navigate};
use shelfdesk::routes::{LOGIN_ROUTE, Route as AppRoute};

use crate::components::protected::Protected;
use crate::components::session_watcher::SessionWatcher;
use crate::pages::dashboard::DashboardPage;
use crate::pages::library::{AddBooksPage, AddStudentPage, DeleteStudentPage, StudentDetailPage, StudentsPage};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::session::{browser_session, provide_session};

/// Root application component.
///
/// Builds the one `SessionService` for the shell, mounts the session watcher
/// once, and wraps every protected route in the guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session(browser_session());

    view! {
        <Title text="Library Admin"/>

        <Router>
            <SessionWatcher/>
            <Routes fallback=Fallback>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=|| view! { <Protected><DashboardPage/></Protected> }/>
                <Route path=StaticSegment("students") view=|| view! { <Protected><StudentsPage/></Protected> }/>
                <Route
                    path=(StaticSegment("students"), StaticSegment("add"))
                    view=|| view! { <Protected><AddStudentPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("students"), StaticSegment("delete"), ParamSegment("id"))
                    view=|| view! { <Protected><DeleteStudentPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("students"), ParamSegment("id"))
                    view=|| view! { <Protected><StudentDetailPage/></Protected> }
                />
                <Route path=StaticSegment("addBooks") view=|| view! { <Protected><AddBooksPage/></Protected> }/>
            </Routes>
        </Router>
    }
}

/// Unknown paths resolve through the core route table: the guarded dashboard
/// when signed in, login otherwise.
#[component]
fn Fallback() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let pathname = use_location().pathname;

    move || match navigate(&session, &pathname.get()) {
        Navigation::Render(AppRoute::Login) => view! { <Redirect path=LOGIN_ROUTE/> }.into_any(),
        Navigation::Render(_) => view! { <DashboardPage/> }.into_any(),
        Navigation::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
    }
}
