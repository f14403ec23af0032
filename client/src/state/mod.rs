//! Shared client-side state.
//!
//! DESIGN
//! ======
//! Auth state itself is defined by the core crate; this module only wires it
//! into Leptos context.

pub mod session;
