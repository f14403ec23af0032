#![cfg(not(feature = "csr"))]

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use super::*;
use shelfdesk::store::MemoryStore;
use shelfdesk::{AuthFlow, ManualClock, SessionConfig, User};

fn anonymous() -> (SessionService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let service = SessionService::new(store.clone(), Arc::new(ManualClock::new(0)), SessionConfig::default());
    (service, store)
}

fn unused_session() -> AuthSession {
    AuthSession {
        token: "abc".to_owned(),
        user: User { id: None, name: "Alice".to_owned(), email: None, role: None },
    }
}

#[test]
fn attempt_outside_browser_fails_with_flow_fallback() {
    let (service, store) = anonymous();
    let signed_in = Rc::new(Cell::new(false));
    let flag = signed_in.clone();

    let ticket = service.begin(AuthFlow::Login);
    finish_attempt(service.clone(), ticket, async { Ok(unused_session()) }, move || flag.set(true));

    let state = service.snapshot();
    assert!(!state.loading);
    assert!(!state.is_authenticated);
    assert_eq!(state.error.as_deref(), Some("Incorrect Credentials"));
    assert!(!signed_in.get());
    assert!(store.is_empty());
}

#[test]
fn register_attempt_uses_register_fallback() {
    let (service, _store) = anonymous();
    let ticket = service.begin(AuthFlow::Register);
    finish_attempt(service.clone(), ticket, async { Ok(unused_session()) }, || {});
    assert_eq!(service.snapshot().error.as_deref(), Some("Registration failed"));
}
