//! Session context for the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `SessionService` is the source of truth. Components read a reactive
//! `RwSignal<AuthState>` mirror that the service updates after every
//! transition, so views re-render on login, failure, and logout without
//! polling the service.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use shelfdesk::{AuthState, SessionConfig, SessionService};

use crate::util::clock::BrowserClock;
use crate::util::storage::BrowserStorage;

/// Build the shell's one `SessionService` over `localStorage`.
pub fn browser_session() -> SessionService {
    SessionService::new(Arc::new(BrowserStorage), Arc::new(BrowserClock), SessionConfig::default())
}

/// Provide `service` and its reactive mirror as context; returns the mirror.
pub fn provide_session(service: SessionService) -> RwSignal<AuthState> {
    let auth = RwSignal::new(service.snapshot());
    service.subscribe(move |state, _event| auth.set(state.clone()));
    provide_context(service);
    provide_context(auth);
    auth
}

/// Greeting name, tolerating a session stored without a user record.
pub fn greeting_name(state: &AuthState) -> String {
    state.display_name().unwrap_or("Admin").to_owned()
}
