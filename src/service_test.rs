use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::api::{AuthBackend, Credentials, Registration};
use crate::clock::ManualClock;
use crate::store::MemoryStore;

const NOW: i64 = 1_700_000_000_000;

fn alice() -> AuthSession {
    AuthSession {
        token: "tok-alice".to_owned(),
        user: User { id: Some("u1".to_owned()), name: "Alice".to_owned(), email: None, role: None },
    }
}

fn service_with(store: MemoryStore) -> (SessionService, Arc<MemoryStore>, Arc<ManualClock>) {
    let store = Arc::new(store);
    let clock = Arc::new(ManualClock::new(NOW));
    let service = SessionService::new(store.clone(), clock.clone(), SessionConfig::default());
    (service, store, clock)
}

struct StubBackend {
    login: Result<AuthSession, AuthFailure>,
    register: Result<AuthSession, AuthFailure>,
}

#[async_trait::async_trait]
impl AuthBackend for StubBackend {
    async fn login(&self, _credentials: &Credentials) -> Result<AuthSession, AuthFailure> {
        self.login.clone()
    }

    async fn register(&self, _registration: &Registration) -> Result<AuthSession, AuthFailure> {
        self.register.clone()
    }
}

fn creds() -> Credentials {
    Credentials { email: "alice@example.com".to_owned(), password: "pw".to_owned() }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_reads_initial_state_from_store() {
    let (service, _, _) = service_with(MemoryStore::with_entries([
        ("token", "abc".to_owned()),
        ("user", r#"{"name":"Alice"}"#.to_owned()),
        ("loginTime", NOW.to_string()),
    ]));
    let state = service.snapshot();
    assert!(state.is_authenticated);
    assert_eq!(state.display_name(), Some("Alice"));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn successful_completion_writes_full_record_with_fresh_login_time() {
    let (service, store, _) = service_with(MemoryStore::new());
    let ticket = service.begin(AuthFlow::Login);
    assert!(service.snapshot().loading);

    assert_eq!(service.complete(ticket, Ok(alice())), Completion::Authenticated);

    let state = service.snapshot();
    assert!(state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(store.get("token").as_deref(), Some("tok-alice"));
    assert_eq!(store.get("loginTime"), Some(NOW.to_string()));
    assert!(record::read_user(&*store).is_some());
    assert!(service.is_session_valid());
}

#[test]
fn rejected_login_surfaces_server_message() {
    let (service, store, _) = service_with(MemoryStore::new());
    let before = service.snapshot();
    let ticket = service.begin(AuthFlow::Login);
    let failure = AuthFailure::Rejected { status: 401, message: "Incorrect Credentials".to_owned() };

    assert_eq!(
        service.complete(ticket, Err(failure)),
        Completion::Failed("Incorrect Credentials".to_owned())
    );

    let state = service.snapshot();
    assert_eq!(state.error.as_deref(), Some("Incorrect Credentials"));
    assert!(!state.loading);
    assert_eq!(state.is_authenticated, before.is_authenticated);
    assert!(store.is_empty());
}

#[test]
fn logout_clears_state_and_store() {
    let (service, store, _) = service_with(MemoryStore::new());
    let ticket = service.begin(AuthFlow::Register);
    service.complete(ticket, Ok(alice()));

    service.logout();

    assert_eq!(service.snapshot(), AuthState::default());
    assert!(store.is_empty());
}

#[test]
fn logout_twice_is_harmless() {
    let (service, store, _) = service_with(MemoryStore::with_entries([("theme", "dark")]));
    service.logout();
    service.logout();
    assert_eq!(service.snapshot(), AuthState::default());
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn completion_after_logout_is_stale() {
    let (service, store, _) = service_with(MemoryStore::new());
    let ticket = service.begin(AuthFlow::Login);
    service.logout();

    assert_eq!(service.complete(ticket, Ok(alice())), Completion::Stale);
    assert!(!service.is_authenticated());
    assert!(!service.snapshot().loading);
    assert!(store.is_empty());
}

#[test]
fn older_attempt_is_superseded_by_newer_one() {
    let (service, _, _) = service_with(MemoryStore::new());
    let first = service.begin(AuthFlow::Login);
    let second = service.begin(AuthFlow::Login);

    let failure = AuthFailure::Status(500);
    assert_eq!(service.complete(first, Err(failure)), Completion::Stale);
    assert!(service.snapshot().loading);

    assert_eq!(service.complete(second, Ok(alice())), Completion::Authenticated);
    assert!(service.snapshot().error.is_none());
}

// =============================================================
// Validity
// =============================================================

#[test]
fn validate_or_logout_expires_old_session() {
    let (service, store, clock) = service_with(MemoryStore::new());
    let ticket = service.begin(AuthFlow::Login);
    service.complete(ticket, Ok(alice()));

    clock.advance(Duration::from_secs(61 * 60));

    assert!(!service.validate_or_logout());
    assert!(!service.is_authenticated());
    assert!(store.is_empty());
}

#[test]
fn remaining_counts_down() {
    let (service, _, clock) = service_with(MemoryStore::new());
    let ticket = service.begin(AuthFlow::Login);
    service.complete(ticket, Ok(alice()));

    clock.advance(Duration::from_secs(15 * 60));
    assert_eq!(service.remaining(), Some(Duration::from_secs(45 * 60)));
}

#[test]
fn listeners_see_every_transition() {
    let (service, _, _) = service_with(MemoryStore::new());
    let logouts = Arc::new(AtomicUsize::new(0));
    let seen = logouts.clone();
    service.subscribe(move |state, event| {
        if *event == AuthEvent::Logout {
            assert!(!state.is_authenticated);
            seen.fetch_add(1, Ordering::SeqCst);
        }
    });

    service.logout();
    assert!(!service.validate_or_logout());
    assert_eq!(logouts.load(Ordering::SeqCst), 2);
}

// =============================================================
// Backend-driven flows
// =============================================================

#[tokio::test]
async fn login_through_backend_authenticates() {
    let (service, store, _) = service_with(MemoryStore::new());
    let backend = StubBackend { login: Ok(alice()), register: Err(AuthFailure::Status(500)) };

    assert_eq!(service.login(&backend, &creds()).await, Completion::Authenticated);
    assert_eq!(store.get("token").as_deref(), Some("tok-alice"));
}

#[tokio::test]
async fn register_failure_uses_fallback_message() {
    let (service, _, _) = service_with(MemoryStore::new());
    let backend = StubBackend {
        login: Ok(alice()),
        register: Err(AuthFailure::Network("dns".to_owned())),
    };
    let registration = Registration {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "pw".to_owned(),
    };

    assert_eq!(
        service.register(&backend, &registration).await,
        Completion::Failed("Registration failed".to_owned())
    );
    assert_eq!(service.snapshot().error.as_deref(), Some("Registration failed"));
}
