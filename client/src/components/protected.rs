//! Route guard component for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router keeps a matched route's view alive while only its params
//! change (`/students/1` to `/students/2`), so the check is keyed on the
//! location's pathname rather than on mount. Every pathname change re-runs
//! the core navigation decision. The session watcher's timer is independent
//! of this.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use shelfdesk::SessionService;
use shelfdesk::guard::{Navigation, navigate};

/// Render `children` only while the stored session is valid; otherwise log
/// out and redirect to the login route.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionService>();
    let pathname = use_location().pathname;

    move || match navigate(&session, &pathname.get()) {
        Navigation::Render(_) => children().into_any(),
        Navigation::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
    }
}
