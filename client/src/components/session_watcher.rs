//! Session watcher mounted once in the app shell.
//!
//! DESIGN
//! ======
//! Checks on mount, then on every `check_interval` via a `gloo-timers`
//! `Interval`. The interval lives in a local `StoredValue` and is dropped in
//! `on_cleanup`, which cancels the browser timer as soon as the shell is torn
//! down.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use shelfdesk::{SessionService, SessionWatch, WatchOutcome};

#[component]
pub fn SessionWatcher() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let navigate = use_navigate();
    let watch = SessionWatch::new(session);

    let on_expired = move || navigate(shelfdesk::routes::LOGIN_ROUTE, NavigateOptions::default());
    if watch.check() == WatchOutcome::Expired {
        on_expired();
    }

    #[cfg(feature = "csr")]
    {
        let period_ms = u32::try_from(watch.service().config().check_interval.as_millis()).unwrap_or(u32::MAX);
        let tick = gloo_timers::callback::Interval::new(period_ms, move || {
            if watch.check() == WatchOutcome::Expired {
                tracing::info!(to = shelfdesk::routes::LOGIN_ROUTE, "session expired; redirecting");
                on_expired();
            }
        });
        let tick = StoredValue::new_local(Some(tick));
        on_cleanup(move || {
            if let Some(Some(tick)) = tick.try_update_value(Option::take) {
                drop(tick);
            }
        });
    }
}
