//! Session watcher: periodic re-validation independent of navigation.
//!
//! DESIGN
//! ======
//! [`SessionWatch::check`] is the whole policy and is synchronous, so any
//! scheduler can drive it: the tokio task below for native surfaces, a
//! `gloo-timers` sleep loop in the browser client. The watcher only acts while
//! the container reports authenticated, so public pages never loop through
//! redirects.
//!
//! TRADE-OFFS
//! ==========
//! A logout in another surface sharing the store is seen at the next tick at
//! the earliest. Shortening the period narrows that window at the cost of
//! more store reads.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use tracing::info;

use crate::routes::LOGIN_ROUTE;
use crate::service::SessionService;

/// Result of one watcher check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchOutcome {
    /// Container is anonymous; nothing checked.
    Idle,
    Valid,
    /// Session was invalid; logout has been applied.
    Expired,
}

#[derive(Clone, Debug)]
pub struct SessionWatch {
    service: SessionService,
}

impl SessionWatch {
    #[must_use]
    pub fn new(service: SessionService) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn service(&self) -> &SessionService {
        &self.service
    }

    pub fn check(&self) -> WatchOutcome {
        if !self.service.is_authenticated() {
            return WatchOutcome::Idle;
        }
        if self.service.validate_or_logout() {
            WatchOutcome::Valid
        } else {
            info!(redirect = LOGIN_ROUTE, "session watcher forced logout");
            WatchOutcome::Expired
        }
    }
}

// =============================================================================
// TOKIO SCHEDULER
// =============================================================================

/// Running watcher task. Dropping the handle disarms the timer.
#[cfg(feature = "runtime")]
#[derive(Debug)]
pub struct WatchHandle {
    task: tokio::task::JoinHandle<()>,
}

#[cfg(feature = "runtime")]
impl WatchHandle {
    /// Disarm the timer now.
    pub fn stop(self) {
        drop(self);
    }
}

#[cfg(feature = "runtime")]
impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(feature = "runtime")]
impl SessionWatch {
    /// Check once immediately, then every `service.config().check_interval`.
    ///
    /// `on_expired` receives the login route each time a check forces a
    /// logout. Must be called inside a tokio runtime.
    pub fn spawn<F>(self, on_expired: F) -> WatchHandle
    where
        F: Fn(&'static str) + Send + 'static,
    {
        let period = self.service.config().check_interval;
        if self.check() == WatchOutcome::Expired {
            on_expired(LOGIN_ROUTE);
        }

        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if self.check() == WatchOutcome::Expired {
                    on_expired(LOGIN_ROUTE);
                }
            }
        });
        WatchHandle { task }
    }
}
