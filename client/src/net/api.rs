//! Auth API calls from the browser.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning an error, since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls resolve to `AuthFailure` instead of panicking; the session service
//! turns that into the text shown on the login/register forms.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use shelfdesk::AuthFailure;
use shelfdesk::AuthSession;
use shelfdesk::api::{Credentials, Registration};

/// API root, baked in at build time through `SHELFDESK_API_BASE_URL`.
pub fn base_url() -> &'static str {
    option_env!("SHELFDESK_API_BASE_URL")
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .unwrap_or(shelfdesk::config::DEFAULT_API_BASE_URL)
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> AuthFailure {
    AuthFailure::Network("not available outside the browser".to_owned())
}

/// `POST {base}/auth/login`.
///
/// # Errors
///
/// Returns the mapped failure when the request fails or is rejected.
pub async fn login(credentials: &Credentials) -> Result<AuthSession, AuthFailure> {
    #[cfg(feature = "csr")]
    {
        post(&shelfdesk::api::login_endpoint(base_url()), credentials).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(unavailable())
    }
}

/// `POST {base}/auth/register`.
///
/// # Errors
///
/// Returns the mapped failure when the request fails or is rejected.
pub async fn register(registration: &Registration) -> Result<AuthSession, AuthFailure> {
    #[cfg(feature = "csr")]
    {
        post(&shelfdesk::api::register_endpoint(base_url()), registration).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = registration;
        Err(unavailable())
    }
}

#[cfg(feature = "csr")]
async fn post<T: serde::Serialize>(url: &str, body: &T) -> Result<AuthSession, AuthFailure> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthFailure::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthFailure::Network(e.to_string()))?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(shelfdesk::api::failure_from_body(resp.status(), &text));
    }
    resp.json::<AuthSession>()
        .await
        .map_err(|e| AuthFailure::Decode(e.to_string()))
}
