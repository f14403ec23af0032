//! # shelfdesk
//!
//! Session lifecycle core for the library admin front end: the persisted
//! session record, its validator, the auth state container, the periodic
//! session watcher, and the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every surface (the `client/` Leptos app, the `shelfdesk` CLI) builds one
//! [`SessionService`] over its own store and clock and hands it to the guard
//! and the watcher. Both ask the same validator, so they never disagree about
//! whether a session is still alive.

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod guard;
pub mod manager;
pub mod record;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validator;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SessionConfig;
pub use error::{AuthFailure, StoreError};
pub use guard::GuardOutcome;
pub use manager::{SessionWatch, WatchOutcome};
pub use record::{AuthSession, User};
pub use service::{AuthTicket, Completion, SessionService};
pub use state::{AuthEvent, AuthFlow, AuthPhase, AuthState};
pub use store::SessionStore;
