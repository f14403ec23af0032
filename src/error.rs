//! Error types shared by the session core.
//!
//! ERROR HANDLING
//! ==============
//! Store corruption and expiry never become errors; they are cleaned up where
//! they are found. Remote auth failures are the only class that reaches the
//! user, and only as text in `AuthState::error`.

use crate::state::AuthFlow;

/// Outcome of a failed login/register call.
///
/// Carries no HTTP client types so both the reqwest and the gloo-net
/// backends can produce it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    /// The server answered with an error payload carrying a `message`.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Non-success status without a usable message.
    #[error("auth request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    /// Success status, but the body was not `{token, user}`.
    #[error("unexpected auth response: {0}")]
    Decode(String),
}

impl AuthFailure {
    /// Text for `AuthState::error`: the server's message when it sent one,
    /// otherwise the flow's generic fallback.
    #[must_use]
    pub fn user_message(&self, flow: AuthFlow) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            _ => flow.fallback_message().to_owned(),
        }
    }
}

#[cfg(feature = "runtime")]
impl From<reqwest::Error> for AuthFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// File-backed store failures. Logged at the store boundary, never raised
/// through `SessionStore`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session file io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
