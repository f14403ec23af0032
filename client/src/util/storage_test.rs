#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn get_is_empty_outside_browser() {
    assert_eq!(BrowserStorage.get("token"), None);
}

#[test]
fn writes_are_noops_outside_browser() {
    BrowserStorage.set("token", "abc");
    BrowserStorage.remove("token");
    assert_eq!(BrowserStorage.get("token"), None);
}
