//! Persisted session storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! A string-keyed, string-valued store that outlives the process: browser
//! `localStorage` in the client, a JSON file for the CLI, a plain map in
//! tests. Every surface sharing one store sees the same session, with no
//! cross-surface locking; a logout elsewhere is noticed on the next check.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Durable key/value storage holding the session record.
///
/// Operations are infallible at this boundary. Backends that can fail log
/// and carry on; a lost write surfaces later as an absent session, which
/// every caller already handles.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
