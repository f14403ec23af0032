//! Session service: store + clock + auth state behind one handle.
//!
//! DESIGN
//! ======
//! One `SessionService` is built per application shell and passed to the
//! route guard, the session watcher and the login/register surfaces. All
//! record writes go through it. Each operation takes the state lock, applies
//! the auth event and its store side effect together, then releases the lock
//! before notifying listeners.
//!
//! TRADE-OFFS
//! ==========
//! In-flight login/register calls cannot be cancelled. Each attempt instead
//! carries an epoch; `logout` and newer attempts bump it, and a completion
//! whose epoch is no longer current is dropped. A slow success therefore
//! cannot sign a user back in after they logged out.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::SessionConfig;
use crate::error::AuthFailure;
use crate::record::{self, AuthSession, User};
use crate::state::{AuthEvent, AuthFlow, AuthState};
use crate::store::SessionStore;
use crate::validator::{self, Validity};

/// Callback run after every applied transition with the new state.
pub type Listener = Arc<dyn Fn(&AuthState, &AuthEvent) + Send + Sync>;

/// Proof that an attempt was started; hand it back to [`SessionService::complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "an attempt left uncompleted keeps the container loading"]
pub struct AuthTicket {
    flow: AuthFlow,
    epoch: u64,
}

impl AuthTicket {
    pub fn flow(&self) -> AuthFlow {
        self.flow
    }
}

/// What happened to a finished login/register attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    Authenticated,
    /// Carries the message now stored in `AuthState::error`.
    Failed(String),
    /// Superseded by a logout or a newer attempt; nothing was applied.
    Stale,
}

#[derive(Clone)]
pub struct SessionService {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    config: SessionConfig,
    core: Mutex<Core>,
    listeners: Mutex<Vec<Listener>>,
}

struct Core {
    auth: AuthState,
    epoch: u64,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("config", &self.inner.config)
            .field("auth", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl SessionService {
    /// Build the service and its initial auth state from the store.
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>, config: SessionConfig) -> Self {
        let auth = AuthState::from_store(store.as_ref());
        debug!(authenticated = auth.is_authenticated, "session service initialised");
        Self {
            inner: Arc::new(Inner {
                store,
                clock,
                config,
                core: Mutex::new(Core { auth, epoch: 0 }),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.inner.config
    }

    #[must_use]
    pub fn store(&self) -> &dyn SessionStore {
        self.inner.store.as_ref()
    }

    /// Register a callback for every applied transition.
    pub fn subscribe(&self, listener: impl Fn(&AuthState, &AuthEvent) + Send + Sync + 'static) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.lock_core().auth.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock_core().auth.is_authenticated
    }

    /// Stored user, or `None` (missing or corrupt, the latter removed).
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let _core = self.lock_core();
        record::read_user(self.store())
    }

    // =========================================================================
    // VALIDITY
    // =========================================================================

    /// Judge the stored session now, clearing it if expired or corrupt.
    pub fn validity(&self) -> Validity {
        let _core = self.lock_core();
        self.inspect_locked()
    }

    pub fn is_session_valid(&self) -> bool {
        self.validity().is_valid()
    }

    /// Time left on a valid session.
    pub fn remaining(&self) -> Option<Duration> {
        match self.validity() {
            Validity::Valid { remaining } => Some(remaining),
            _ => None,
        }
    }

    /// Run the validator and, when it fails, the logout transition, as one
    /// step. Returns whether the session was valid.
    pub fn validate_or_logout(&self) -> bool {
        let mut core = self.lock_core();
        if self.inspect_locked().is_valid() {
            return true;
        }
        let state = self.logout_locked(&mut core);
        drop(core);
        self.notify(&state, &AuthEvent::Logout);
        false
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Start a login/register attempt: `loading` on, `error` cleared.
    pub fn begin(&self, flow: AuthFlow) -> AuthTicket {
        let mut core = self.lock_core();
        core.epoch += 1;
        let ticket = AuthTicket { flow, epoch: core.epoch };
        let event = AuthEvent::Pending(flow);
        core.auth.apply(&event);
        let state = core.auth.clone();
        drop(core);
        debug!(flow = flow.as_str(), epoch = ticket.epoch, "auth attempt started");
        self.notify(&state, &event);
        ticket
    }

    /// Finish an attempt started with [`begin`](Self::begin).
    ///
    /// Success writes the full record with a fresh login time. Failure only
    /// sets `error`; the store is untouched.
    pub fn complete(&self, ticket: AuthTicket, result: Result<AuthSession, AuthFailure>) -> Completion {
        let mut core = self.lock_core();
        if ticket.epoch != core.epoch {
            debug!(
                flow = ticket.flow.as_str(),
                epoch = ticket.epoch,
                current = core.epoch,
                "ignoring stale auth completion"
            );
            return Completion::Stale;
        }

        let (event, completion) = match result {
            Ok(session) => {
                record::write_record(self.store(), &session, self.inner.clock.now_millis());
                info!(flow = ticket.flow.as_str(), user = %session.user.name, "session started");
                (AuthEvent::Fulfilled(ticket.flow, session), Completion::Authenticated)
            }
            Err(failure) => {
                let message = failure.user_message(ticket.flow);
                info!(flow = ticket.flow.as_str(), error = %failure, "auth attempt failed");
                (AuthEvent::Rejected(ticket.flow, message.clone()), Completion::Failed(message))
            }
        };
        core.auth.apply(&event);
        let state = core.auth.clone();
        drop(core);
        self.notify(&state, &event);
        completion
    }

    /// Clear the in-memory state and the stored record. Safe to repeat.
    pub fn logout(&self) {
        let mut core = self.lock_core();
        let state = self.logout_locked(&mut core);
        drop(core);
        self.notify(&state, &AuthEvent::Logout);
    }

    /// Drive a full login against `backend`.
    #[cfg(feature = "runtime")]
    pub async fn login<B>(&self, backend: &B, credentials: &crate::api::Credentials) -> Completion
    where
        B: crate::api::AuthBackend + ?Sized,
    {
        let ticket = self.begin(AuthFlow::Login);
        let result = backend.login(credentials).await;
        self.complete(ticket, result)
    }

    /// Drive a full registration against `backend`.
    #[cfg(feature = "runtime")]
    pub async fn register<B>(&self, backend: &B, registration: &crate::api::Registration) -> Completion
    where
        B: crate::api::AuthBackend + ?Sized,
    {
        let ticket = self.begin(AuthFlow::Register);
        let result = backend.register(registration).await;
        self.complete(ticket, result)
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn lock_core(&self) -> std::sync::MutexGuard<'_, Core> {
        self.inner.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn inspect_locked(&self) -> Validity {
        validator::inspect(self.store(), self.inner.clock.now_millis(), self.inner.config.ttl)
    }

    fn logout_locked(&self, core: &mut Core) -> AuthState {
        core.epoch += 1;
        core.auth.apply(&AuthEvent::Logout);
        record::clear_record(self.store());
        debug!(epoch = core.epoch, "logged out");
        core.auth.clone()
    }

    fn notify(&self, state: &AuthState, event: &AuthEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener(state, event);
        }
    }
}
