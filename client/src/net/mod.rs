//! Networking for the remote library API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the auth endpoints are called from here; wire types and failure
//! mapping are shared with the native client through the core crate.

pub mod api;
