//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Login and register share the attempt plumbing below.

pub mod dashboard;
pub mod library;
pub mod login;
pub mod register;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use shelfdesk::{AuthFailure, AuthSession, AuthTicket, Completion, SessionService};

/// Resolve a started attempt with the result of `call`, then run
/// `on_authenticated` if it signed the user in.
///
/// Failures land in `AuthState::error` through the service; stale results
/// (logout or a newer attempt in between) are dropped silently.
pub(crate) fn finish_attempt<F>(
    session: SessionService,
    ticket: AuthTicket,
    call: F,
    on_authenticated: impl Fn() + 'static,
) where
    F: Future<Output = Result<AuthSession, AuthFailure>> + 'static,
{
    tracing::debug!(flow = ticket.flow().as_str(), "auth attempt dispatched");
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match session.complete(ticket, call.await) {
            Completion::Authenticated => on_authenticated(),
            Completion::Stale => tracing::debug!(flow = ticket.flow().as_str(), "auth attempt superseded"),
            Completion::Failed(_) => {}
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        drop(call);
        let outcome = session.complete(ticket, Err(AuthFailure::Network("not available outside the browser".to_owned())));
        if outcome == Completion::Authenticated {
            on_authenticated();
        }
    }
}
