#![cfg(not(feature = "csr"))]

use super::*;
use shelfdesk::AuthFlow;

#[test]
fn base_url_has_no_trailing_slash() {
    assert!(!base_url().ends_with('/'));
    assert!(!base_url().is_empty());
}

#[test]
fn unavailable_maps_to_flow_fallback() {
    assert_eq!(unavailable().user_message(AuthFlow::Login), "Incorrect Credentials");
    assert_eq!(unavailable().user_message(AuthFlow::Register), "Registration failed");
}
