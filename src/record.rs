//! The persisted session record: `token`, `user`, `loginTime`.
//!
//! DESIGN
//! ======
//! The three keys are written together on login/register and cleared
//! together on logout or expiry. Outside writers can still leave junk behind
//! (an `"undefined"` user, a non-numeric timestamp), so every field is parsed
//! into a [`Field`] on read instead of being trusted.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::store::SessionStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const LOGIN_TIME_KEY: &str = "loginTime";

/// Every key the record owns. Invalidation removes all of them.
pub const RECORD_KEYS: [&str; 3] = [TOKEN_KEY, USER_KEY, LOGIN_TIME_KEY];

/// Signed-in administrator as returned by the auth API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Successful login/register payload: `{token, user}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Parse result for one stored field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Field<T> {
    Missing,
    Present(T),
    /// Something is stored but it cannot be used.
    Corrupt,
}

impl<T> Field<T> {
    #[must_use]
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Missing | Self::Corrupt => None,
        }
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Raw contents of the three keys, parsed but not yet judged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: Field<String>,
    pub user: Field<User>,
    pub login_time: Field<i64>,
}

impl SessionRecord {
    /// Read all three keys without modifying the store.
    #[must_use]
    pub fn load(store: &dyn SessionStore) -> Self {
        Self {
            token: parse_token(store.get(TOKEN_KEY).as_deref()),
            user: parse_user(store.get(USER_KEY).as_deref()),
            login_time: parse_login_time(store.get(LOGIN_TIME_KEY).as_deref()),
        }
    }
}

/// Placeholders left behind when `undefined`/`null` got stringified.
fn is_placeholder(raw: &str) -> bool {
    matches!(raw.trim(), "" | "undefined" | "null")
}

pub(crate) fn parse_token(raw: Option<&str>) -> Field<String> {
    match raw {
        None | Some("") => Field::Missing,
        Some(raw) if is_placeholder(raw) => Field::Corrupt,
        Some(raw) => Field::Present(raw.to_owned()),
    }
}

pub(crate) fn parse_user(raw: Option<&str>) -> Field<User> {
    match raw {
        None => Field::Missing,
        Some(raw) if is_placeholder(raw) => Field::Corrupt,
        Some(raw) => serde_json::from_str(raw).map_or(Field::Corrupt, Field::Present),
    }
}

/// Numeric parse of the epoch-millisecond timestamp. Accepts float
/// renderings such as `"1700000000000.0"`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn parse_login_time(raw: Option<&str>) -> Field<i64> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Field::Missing;
    };
    if let Ok(ms) = raw.parse::<i64>() {
        return Field::Present(ms);
    }
    match raw.parse::<f64>() {
        Ok(ms) if ms.is_finite() => Field::Present(ms as i64),
        _ => Field::Corrupt,
    }
}

/// Read the stored user, removing the key if its value is unusable.
pub fn read_user(store: &dyn SessionStore) -> Option<User> {
    match parse_user(store.get(USER_KEY).as_deref()) {
        Field::Present(user) => Some(user),
        Field::Missing => None,
        Field::Corrupt => {
            warn!(key = USER_KEY, "removing corrupted stored user");
            store.remove(USER_KEY);
            None
        }
    }
}

/// Read the stored token. Placeholder strings count as absent.
pub fn read_token(store: &dyn SessionStore) -> Option<String> {
    parse_token(store.get(TOKEN_KEY).as_deref()).present()
}

/// Write the full record for a fresh session stamped at `login_time_ms`.
pub fn write_record(store: &dyn SessionStore, session: &AuthSession, login_time_ms: i64) {
    store.set(TOKEN_KEY, &session.token);
    match serde_json::to_string(&session.user) {
        Ok(json) => store.set(USER_KEY, &json),
        Err(e) => {
            warn!(error = %e, "could not encode user; storing session without it");
            store.remove(USER_KEY);
        }
    }
    store.set(LOGIN_TIME_KEY, &login_time_ms.to_string());
}

/// Remove every record key.
pub fn clear_record(store: &dyn SessionStore) {
    for key in RECORD_KEYS {
        store.remove(key);
    }
    debug!("session record cleared");
}
