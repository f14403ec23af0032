//! Session timing and API endpoint configuration.
//!
//! DESIGN
//! ======
//! Defaults are compiled in; each can be overridden from the environment.
//! Zero or unparseable overrides fall back to the default so a bad variable
//! can never arm a zero-period timer or an instantly-expiring session.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Maximum age of a session record before it is treated as expired.
pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60);

/// Period of the background session re-check.
pub const SESSION_CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Remote API root used when `SHELFDESK_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "https://libback-eh51.onrender.com/api";

const TTL_ENV: &str = "SHELFDESK_SESSION_TTL_SECS";
const CHECK_INTERVAL_ENV: &str = "SHELFDESK_SESSION_CHECK_SECS";
const API_BASE_URL_ENV: &str = "SHELFDESK_API_BASE_URL";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum session age.
    pub ttl: Duration,
    /// Session watcher period.
    pub check_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl: SESSION_TTL, check_interval: SESSION_CHECK_INTERVAL }
    }
}

impl SessionConfig {
    /// Build from `SHELFDESK_SESSION_TTL_SECS` / `SHELFDESK_SESSION_CHECK_SECS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            ttl: secs_or(lookup(TTL_ENV).as_deref(), SESSION_TTL),
            check_interval: secs_or(lookup(CHECK_INTERVAL_ENV).as_deref(), SESSION_CHECK_INTERVAL),
        }
    }
}

/// Remote API root from `SHELFDESK_API_BASE_URL`, or the default.
#[must_use]
pub fn api_base_url() -> String {
    base_url_or_default(std::env::var(API_BASE_URL_ENV).ok())
}

fn base_url_or_default(raw: Option<String>) -> String {
    raw.map(|v| v.trim().trim_end_matches('/').to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
}

fn secs_or(raw: Option<&str>, default: Duration) -> Duration {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map_or(default, Duration::from_secs)
}
