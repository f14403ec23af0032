//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Protected` and `SessionWatcher` are the two places the shell enforces
//! the session lifecycle; both read the `SessionService` from context.

pub mod header;
pub mod protected;
pub mod session_watcher;
