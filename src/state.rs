//! Auth state container: the in-memory mirror of the session.
//!
//! DESIGN
//! ======
//! `AuthState` changes only through [`AuthState::apply`], a pure reducer over
//! [`AuthEvent`]. Persistence side effects (writing or clearing the record)
//! belong to `SessionService`, which applies an event and touches the store
//! under one lock.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::record::{self, AuthSession, User};
use crate::store::SessionStore;

/// Which auth call is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthFlow {
    Login,
    Register,
}

impl AuthFlow {
    /// Message shown when the server gives no reason for a failure.
    #[must_use]
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => "Incorrect Credentials",
            Self::Register => "Registration failed",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }
}

/// Every transition the container accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    Pending(AuthFlow),
    Fulfilled(AuthFlow, AuthSession),
    Rejected(AuthFlow, String),
    Logout,
}

/// Coarse state derived from the fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Authenticating,
    Authenticated,
    AuthFailed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub token: Option<String>,
    /// True only while a login/register call is pending.
    pub loading: bool,
    /// Last login/register failure, cleared when a new attempt starts.
    pub error: Option<String>,
}

impl AuthState {
    /// Initial state for a freshly started shell.
    ///
    /// Authenticated iff a token is stored; expiry is left to the guard and
    /// watcher. A corrupt stored user is removed here.
    pub fn from_store(store: &dyn SessionStore) -> Self {
        let token = record::read_token(store);
        Self {
            is_authenticated: token.is_some(),
            user: record::read_user(store),
            token,
            loading: false,
            error: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Authenticating
        } else if self.is_authenticated {
            AuthPhase::Authenticated
        } else if self.error.is_some() {
            AuthPhase::AuthFailed
        } else {
            AuthPhase::Anonymous
        }
    }

    /// Display name for headers and greetings; `None` when no user is known.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    pub fn apply(&mut self, event: &AuthEvent) {
        match event {
            AuthEvent::Pending(_) => {
                self.loading = true;
                self.error = None;
            }
            AuthEvent::Fulfilled(_, session) => {
                self.loading = false;
                self.is_authenticated = true;
                self.user = Some(session.user.clone());
                self.token = Some(session.token.clone());
                self.error = None;
            }
            AuthEvent::Rejected(_, message) => {
                self.loading = false;
                self.error = Some(message.clone());
            }
            AuthEvent::Logout => *self = Self::default(),
        }
    }
}
