//! Browser environment adapters for the session core.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys`/`js-sys` glue so pages and components
//! only ever see the core `SessionStore` and `Clock` traits.

pub mod clock;
pub mod storage;
