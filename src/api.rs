//! Remote auth API boundary.
//!
//! The library API exposes `POST {base}/auth/login` and
//! `POST {base}/auth/register`, both answering `{token, user}` on success and
//! `{message}` on failure. Wire types and failure mapping live here so every
//! HTTP stack (reqwest natively, gloo-net in the browser) agrees on them.
//!
//! ERROR HANDLING
//! ==============
//! Backends return [`AuthFailure`], never panic. The service turns a failure
//! into the container's `error` text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::error::AuthFailure;
#[cfg(feature = "runtime")]
use crate::record::AuthSession;

/// Login form payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Register form payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[must_use]
pub fn login_endpoint(base_url: &str) -> String {
    format!("{}/auth/login", base_url.trim_end_matches('/'))
}

#[must_use]
pub fn register_endpoint(base_url: &str) -> String {
    format!("{}/auth/register", base_url.trim_end_matches('/'))
}

/// Map a non-success response to a failure, keeping the server's `message`
/// when the body has a non-blank one.
#[must_use]
pub fn failure_from_body(status: u16, body: &str) -> AuthFailure {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty());
    match message {
        Some(message) => AuthFailure::Rejected { status, message },
        None => AuthFailure::Status(status),
    }
}

// =============================================================================
// BACKEND
// =============================================================================

/// Remote login/register calls.
#[cfg(feature = "runtime")]
#[async_trait::async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthFailure>;
    async fn register(&self, registration: &Registration) -> Result<AuthSession, AuthFailure>;
}

/// `reqwest` implementation of [`AuthBackend`].
#[cfg(feature = "runtime")]
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
    http: reqwest::Client,
}

#[cfg(feature = "runtime")]
impl HttpAuthApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: reqwest::Client::new() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<T: Serialize + Sync>(&self, url: String, body: &T) -> Result<AuthSession, AuthFailure> {
        tracing::debug!(%url, "auth request");
        let resp = self.http.post(&url).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(failure_from_body(status.as_u16(), &text));
        }
        Ok(resp.json::<AuthSession>().await?)
    }
}

#[cfg(feature = "runtime")]
#[async_trait::async_trait]
impl AuthBackend for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthFailure> {
        self.post(login_endpoint(&self.base_url), credentials).await
    }

    async fn register(&self, registration: &Registration) -> Result<AuthSession, AuthFailure> {
        self.post(register_endpoint(&self.base_url), registration).await
    }
}
