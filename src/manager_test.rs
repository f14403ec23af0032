use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use super::*;
use crate::clock::ManualClock;
use crate::config::SessionConfig;
use crate::record::{AuthSession, User};
use crate::state::AuthFlow;
use crate::store::{MemoryStore, SessionStore};

const NOW: i64 = 1_700_000_000_000;

fn signed_in() -> (SessionService, Arc<MemoryStore>, Arc<ManualClock>) {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::new(NOW));
    let service = SessionService::new(store.clone(), clock.clone(), SessionConfig::default());
    let ticket = service.begin(AuthFlow::Login);
    let session = AuthSession {
        token: "abc".to_owned(),
        user: User { id: None, name: "Alice".to_owned(), email: None, role: None },
    };
    service.complete(ticket, Ok(session));
    (service, store, clock)
}

// =============================================================
// check()
// =============================================================

#[test]
fn idle_while_anonymous() {
    let store = Arc::new(MemoryStore::with_entries([("theme", "dark")]));
    let service = SessionService::new(store.clone(), Arc::new(ManualClock::new(NOW)), SessionConfig::default());
    let watch = SessionWatch::new(service);

    assert_eq!(watch.check(), WatchOutcome::Idle);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn valid_session_passes() {
    let (service, _, clock) = signed_in();
    clock.advance(Duration::from_secs(30 * 60));
    assert_eq!(SessionWatch::new(service).check(), WatchOutcome::Valid);
}

#[test]
fn expired_session_logs_out_then_goes_idle() {
    let (service, store, clock) = signed_in();
    let watch = SessionWatch::new(service.clone());
    clock.advance(Duration::from_secs(2 * 60 * 60));

    assert_eq!(watch.check(), WatchOutcome::Expired);
    assert!(!service.is_authenticated());
    assert!(store.is_empty());
    assert_eq!(watch.check(), WatchOutcome::Idle);
}

#[test]
fn store_cleared_elsewhere_is_noticed() {
    let (service, store, _) = signed_in();
    // Another surface logged out through the shared store.
    crate::record::clear_record(&*store);

    assert_eq!(SessionWatch::new(service.clone()).check(), WatchOutcome::Expired);
    assert!(!service.is_authenticated());
}

// =============================================================
// spawn()
// =============================================================

#[tokio::test(start_paused = true)]
async fn expired_on_mount_fires_immediately() {
    let (service, _, clock) = signed_in();
    clock.advance(Duration::from_secs(2 * 60 * 60));
    let (tx, mut rx) = mpsc::unbounded_channel();

    let _handle = SessionWatch::new(service).spawn(move |to| {
        let _ = tx.send(to);
    });

    assert_eq!(rx.try_recv().ok(), Some(LOGIN_ROUTE));
}

#[tokio::test(start_paused = true)]
async fn tick_detects_expiry() {
    let (service, _, clock) = signed_in();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _handle = SessionWatch::new(service.clone()).spawn(move |to| {
        let _ = tx.send(to);
    });
    assert!(rx.try_recv().is_err());

    clock.advance(Duration::from_secs(61 * 60));
    let fired = tokio::time::timeout(Duration::from_secs(120), rx.recv()).await;

    assert_eq!(fired.ok().flatten(), Some(LOGIN_ROUTE));
    assert!(!service.is_authenticated());
}

#[tokio::test(start_paused = true)]
async fn dropped_handle_disarms_timer() {
    let (service, store, clock) = signed_in();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = SessionWatch::new(service.clone()).spawn(move |to| {
        let _ = tx.send(to);
    });

    handle.stop();
    clock.advance(Duration::from_secs(61 * 60));
    let fired = tokio::time::timeout(Duration::from_secs(300), rx.recv()).await;

    assert!(!matches!(fired, Ok(Some(_))));
    // No tick ran, so the stale record is still there for the next check.
    assert!(service.is_authenticated());
    assert_eq!(store.get("token").as_deref(), Some("abc"));
}
