use super::*;
use crate::store::MemoryStore;

const NOW: i64 = 1_700_000_000_000;
const MINUTE_MS: i64 = 60 * 1000;
const TTL: Duration = Duration::from_secs(60 * 60);

fn stored_at(login_time: i64) -> MemoryStore {
    MemoryStore::with_entries([
        ("token", "abc".to_owned()),
        ("user", r#"{"name":"Alice"}"#.to_owned()),
        ("loginTime", login_time.to_string()),
    ])
}

#[test]
fn recent_login_is_valid() {
    let store = stored_at(NOW - 10 * MINUTE_MS);
    assert!(is_session_valid(&store, NOW, TTL));
}

#[test]
fn valid_session_leaves_store_unchanged() {
    let store = stored_at(NOW - 10 * MINUTE_MS);
    let before = store.snapshot();
    assert_eq!(
        inspect(&store, NOW, TTL),
        Validity::Valid { remaining: Duration::from_secs(50 * 60) }
    );
    assert_eq!(store.snapshot(), before);
}

#[test]
fn old_login_is_invalid_and_cleared() {
    let store = stored_at(NOW - 90 * MINUTE_MS);
    assert!(!is_session_valid(&store, NOW, TTL));
    assert_eq!(store.get("token"), None);
    assert_eq!(store.get("user"), None);
    assert_eq!(store.get("loginTime"), None);
}

#[test]
fn exactly_at_ttl_is_still_valid() {
    let store = stored_at(NOW - 60 * MINUTE_MS);
    assert!(is_session_valid(&store, NOW, TTL));
    assert!(!is_session_valid(&store, NOW + 1, TTL));
}

#[test]
fn missing_token_or_login_time_is_invalid_without_mutation() {
    let cases = [
        MemoryStore::new(),
        MemoryStore::with_entries([("token", "abc")]),
        MemoryStore::with_entries([("loginTime", NOW.to_string())]),
        MemoryStore::with_entries([("user", r#"{"name":"Alice"}"#.to_owned()), ("loginTime", NOW.to_string())]),
    ];
    for store in cases {
        let before = store.snapshot();
        assert_eq!(inspect(&store, NOW, TTL), Validity::Missing);
        assert_eq!(store.snapshot(), before);
    }
}

#[test]
fn missing_user_does_not_invalidate() {
    let store = MemoryStore::with_entries([("token", "abc".to_owned()), ("loginTime", NOW.to_string())]);
    assert!(is_session_valid(&store, NOW, TTL));
}

#[test]
fn second_call_agrees_and_does_not_mutate() {
    let store = stored_at(NOW - 90 * MINUTE_MS);
    let first = is_session_valid(&store, NOW, TTL);
    let after_first = store.snapshot();
    let second = is_session_valid(&store, NOW, TTL);
    assert_eq!(first, second);
    assert_eq!(store.snapshot(), after_first);

    let store = stored_at(NOW - MINUTE_MS);
    assert_eq!(is_session_valid(&store, NOW, TTL), is_session_valid(&store, NOW, TTL));
}

#[test]
fn unparseable_login_time_clears_record() {
    let store = MemoryStore::with_entries([("token", "abc"), ("loginTime", "later"), ("user", r#"{"name":"A"}"#)]);
    assert_eq!(inspect(&store, NOW, TTL), Validity::Corrupt);
    assert!(store.is_empty());
}

#[test]
fn placeholder_token_clears_record() {
    let store = MemoryStore::with_entries([("token", "undefined".to_owned()), ("loginTime", NOW.to_string())]);
    assert_eq!(inspect(&store, NOW, TTL), Validity::Corrupt);
    assert!(store.is_empty());
}

#[test]
fn string_timestamp_compares_numerically() {
    // "999..." sorts after "1700..." as text; numerically it is far older.
    let store = MemoryStore::with_entries([("token", "abc"), ("loginTime", "999999999999")]);
    assert!(!is_session_valid(&store, NOW, TTL));
}

#[test]
fn small_future_skew_stays_valid() {
    let store = stored_at(NOW + 5 * MINUTE_MS);
    assert_eq!(
        inspect(&store, NOW, TTL),
        Validity::Valid { remaining: Duration::from_millis(65 * 60 * 1000) }
    );
}

#[test]
fn login_time_one_ttl_ahead_is_still_valid() {
    let store = stored_at(NOW + 60 * MINUTE_MS);
    assert!(is_session_valid(&store, NOW, TTL));
}

#[test]
fn login_time_beyond_one_ttl_ahead_clears_record() {
    let store = stored_at(NOW + 60 * MINUTE_MS + 1);
    assert_eq!(inspect(&store, NOW, TTL), Validity::Corrupt);
    assert!(store.is_empty());
}

#[test]
fn exponent_login_time_cannot_pin_session_open() {
    let store = MemoryStore::with_entries([("token", "abc"), ("loginTime", "1e30"), ("user", r#"{"name":"A"}"#)]);
    assert_eq!(inspect(&store, NOW, TTL), Validity::Corrupt);
    assert!(store.is_empty());
}
