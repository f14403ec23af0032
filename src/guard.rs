//! Route guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs on every navigation into a protected route, independent of the
//! session watcher's timer. An invalid session fires the logout transition
//! (keeping the container in step with the cleared store) and redirects to
//! the login route.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use tracing::debug;

use crate::routes::{LOGIN_ROUTE, Route};
use crate::service::SessionService;

/// Render decision for a guarded view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(&'static str),
}

/// Check the session for a protected view.
pub fn guard(service: &SessionService) -> GuardOutcome {
    if service.validate_or_logout() {
        GuardOutcome::Render
    } else {
        debug!(to = LOGIN_ROUTE, "guard redirect");
        GuardOutcome::Redirect(LOGIN_ROUTE)
    }
}

/// Full navigation decision for a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(&'static str),
}

/// Resolve `path` against the route table.
///
/// Public routes render as-is, protected routes go through [`guard`], and
/// unknown paths land on the dashboard when signed in (still guarded) or on
/// the login page otherwise.
pub fn navigate(service: &SessionService, path: &str) -> Navigation {
    let route = match Route::parse(path) {
        Some(route) => route,
        None if service.is_authenticated() => Route::Dashboard,
        None => return Navigation::Render(Route::Login),
    };
    if !route.requires_auth() {
        return Navigation::Render(route);
    }
    match guard(service) {
        GuardOutcome::Render => Navigation::Render(route),
        GuardOutcome::Redirect(to) => Navigation::Redirect(to),
    }
}
