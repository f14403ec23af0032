//! Session validity check.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and the session watcher both call this, through
//! `SessionService`, so they can never disagree about validity. The check is
//! synchronous from read to cleanup; nothing can interleave between seeing an
//! expired record and removing it.

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;

use std::time::Duration;

use tracing::{info, warn};

use crate::record::{self, Field, SessionRecord};
use crate::store::SessionStore;

/// What the validator found. Only `Valid` counts as logged in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    /// No token or no login time. Nothing was cleaned up.
    Missing,
    /// Within the TTL; `remaining` is time left before expiry.
    Valid { remaining: Duration },
    /// Older than the TTL. The record has been cleared.
    Expired,
    /// Token or login time is unusable junk, including a login time more
    /// than one TTL in the future. The record has been cleared.
    Corrupt,
}

impl Validity {
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Judge the stored record at `now_ms`, clearing it when expired or corrupt.
///
/// A missing `user` does not invalidate a session; callers must cope with
/// `read_user` returning `None` while this reports valid.
pub fn inspect(store: &dyn SessionStore, now_ms: i64, ttl: Duration) -> Validity {
    let SessionRecord { token, login_time, .. } = SessionRecord::load(store);

    if token.is_missing() || login_time.is_missing() {
        return Validity::Missing;
    }
    let (Field::Present(_), Field::Present(login_time)) = (token, login_time) else {
        warn!("stored session is corrupt; clearing");
        record::clear_record(store);
        return Validity::Corrupt;
    };

    let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
    if login_time > now_ms.saturating_add(ttl_ms) {
        warn!(login_time, now_ms, "stored login time is beyond the session window; clearing");
        record::clear_record(store);
        return Validity::Corrupt;
    }
    let elapsed = now_ms.saturating_sub(login_time);
    if elapsed > ttl_ms {
        info!(elapsed_ms = elapsed, ttl_ms, "session expired; clearing");
        record::clear_record(store);
        return Validity::Expired;
    }

    let remaining = u64::try_from(ttl_ms.saturating_sub(elapsed)).unwrap_or(u64::MAX);
    Validity::Valid { remaining: Duration::from_millis(remaining) }
}

/// `true` iff the stored session is present and younger than `ttl`.
pub fn is_session_valid(store: &dyn SessionStore, now_ms: i64, ttl: Duration) -> bool {
    inspect(store, now_ms, ttl).is_valid()
}
