use std::sync::Arc;

use parking_lot::Mutex;

use super::*;
use crate::auth::guard::{AccessDecision, evaluate};
use crate::auth::identity::{Role, SubjectId};
use crate::auth::test_support::{credential, credential_for};
use crate::util::storage::MemoryStorage;

const KEY: &str = "token";

fn manager_with(backend: &MemoryStorage) -> SessionManager<MemoryStorage> {
    SessionManager::start(backend.clone(), RequestChannel::new("/api"), &SessionConfig::default())
}

fn stored(backend: &MemoryStorage) -> Option<String> {
    backend.get(KEY).unwrap()
}

fn assert_fully_anonymous(manager: &SessionManager<MemoryStorage>, backend: &MemoryStorage) {
    assert_eq!(manager.state(), &SessionState::Anonymous);
    assert_eq!(manager.identity(), None);
    assert!(manager.credential().is_none());
    assert_eq!(manager.channel().authorization(), None);
    assert_eq!(stored(backend), None);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn new_manager_is_resolving_until_initialized() {
    let backend = MemoryStorage::new();
    let mut manager = SessionManager::new(backend.clone(), RequestChannel::new("/api"), &SessionConfig::default());
    assert_eq!(manager.state(), &SessionState::Resolving);
    manager.initialize();
    assert_fully_anonymous(&manager, &backend);
}

#[test]
fn initialize_restores_stored_credential() {
    let raw = credential(7, "agent", "alice");
    let backend = MemoryStorage::with_entry(KEY, &raw);
    let manager = manager_with(&backend);
    let identity = manager.identity().unwrap();
    assert_eq!(identity.id, SubjectId::Number(7));
    assert_eq!(identity.role, Role::Agent);
    assert_eq!(manager.channel().authorization(), Some(format!("Bearer {raw}")));
    assert_eq!(stored(&backend), Some(raw));
}

#[test]
fn initialize_with_two_segment_credential_clears_store() {
    let backend = MemoryStorage::with_entry(KEY, "header.payload");
    let manager = manager_with(&backend);
    assert_fully_anonymous(&manager, &backend);
}

#[test]
fn initialize_with_unknown_role_clears_store() {
    let backend = MemoryStorage::with_entry(KEY, &credential(1, "root", "x"));
    let manager = manager_with(&backend);
    assert_fully_anonymous(&manager, &backend);
}

#[test]
fn reinitialize_after_external_corruption_drops_session() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    manager.login(&credential(1, "user", "x")).unwrap();
    backend.set(KEY, "garbage").unwrap();
    manager.initialize();
    assert_fully_anonymous(&manager, &backend);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_agent_then_guard_decisions() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    let identity = manager.login(&credential(7, "agent", "alice")).unwrap();
    assert_eq!(
        identity,
        Identity {
            id: SubjectId::Number(7),
            role: Role::Agent,
            username: "alice".to_owned(),
        }
    );
    assert_eq!(evaluate(manager.identity(), Some([Role::Agent].as_slice())), AccessDecision::Allow);
    assert_eq!(evaluate(manager.identity(), Some([Role::Admin].as_slice())), AccessDecision::DenyWrongRole);
}

#[test]
fn login_persists_and_attaches_header() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    let raw = credential(1, "user", "bob");
    manager.login(&raw).unwrap();
    assert_eq!(stored(&backend), Some(raw.clone()));
    assert_eq!(manager.channel().authorization(), Some(format!("Bearer {raw}")));
    assert_eq!(manager.credential().map(Credential::as_str), Some(raw.as_str()));
}

#[test]
fn failed_login_leaves_anonymous_session_untouched() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    let err = manager.login("not-a-credential").unwrap_err();
    assert!(matches!(err, CredentialError::Malformed(_)));
    assert_fully_anonymous(&manager, &backend);
}

#[test]
fn failed_login_leaves_authenticated_session_untouched() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    let raw = credential(1, "user", "bob");
    manager.login(&raw).unwrap();
    let err = manager.login(&credential(2, "owner", "eve")).unwrap_err();
    assert_eq!(err, CredentialError::UnsupportedRole("owner".to_owned()));
    assert_eq!(manager.identity().map(|i| i.username.as_str()), Some("bob"));
    assert_eq!(stored(&backend), Some(raw.clone()));
    assert_eq!(manager.channel().authorization(), Some(format!("Bearer {raw}")));
}

#[test]
fn second_login_fully_replaces_first() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    manager
        .login(&credential_for(&serde_json::json!({
            "subject_id": "u-1",
            "role": "user",
            "username": "first",
            "exp": 1_900_000_000,
        })))
        .unwrap();
    let second = credential(2, "admin", "second");
    manager.login(&second).unwrap();
    assert_eq!(
        manager.identity(),
        Some(&Identity {
            id: SubjectId::Number(2),
            role: Role::Admin,
            username: "second".to_owned(),
        })
    );
    assert_eq!(stored(&backend), Some(second.clone()));
    assert_eq!(manager.channel().authorization(), Some(format!("Bearer {second}")));
}

// =============================================================
// logout
// =============================================================

#[test]
fn login_then_logout_matches_logout_alone() {
    let a = MemoryStorage::new();
    let mut with_login = manager_with(&a);
    with_login.login(&credential(1, "admin", "root")).unwrap();
    with_login.logout();

    let b = MemoryStorage::new();
    let mut without_login = manager_with(&b);
    without_login.logout();

    assert_fully_anonymous(&with_login, &a);
    assert_fully_anonymous(&without_login, &b);
}

#[test]
fn repeated_logout_is_idempotent() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    manager.login(&credential(1, "user", "x")).unwrap();
    for _ in 0..3 {
        manager.logout();
        assert_fully_anonymous(&manager, &backend);
    }
}

#[test]
fn session_is_restartable_after_logout() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    manager.login(&credential(1, "user", "x")).unwrap();
    manager.logout();
    manager.login(&credential(2, "agent", "y")).unwrap();
    assert_eq!(manager.identity().map(|i| i.role), Some(Role::Agent));
}

// =============================================================
// upstream rejection
// =============================================================

#[test]
fn unauthorized_response_ends_session() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    manager.login(&credential(1, "user", "x")).unwrap();
    assert!(manager.handle_upstream_rejection(401));
    assert_fully_anonymous(&manager, &backend);
}

#[test]
fn other_statuses_keep_session() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    manager.login(&credential(1, "user", "x")).unwrap();
    assert!(!manager.handle_upstream_rejection(403));
    assert!(!manager.handle_upstream_rejection(500));
    assert!(manager.is_authenticated());
}

#[test]
fn unauthorized_response_while_anonymous_is_ignored() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    assert!(!manager.handle_upstream_rejection(401));
}

// =============================================================
// expiry policy
// =============================================================

fn enforcing(backend: &MemoryStorage) -> SessionManager<MemoryStorage> {
    let config = SessionConfig {
        expiry: ExpiryPolicy::Enforce,
        ..SessionConfig::default()
    };
    SessionManager::start(backend.clone(), RequestChannel::new("/api"), &config)
}

fn with_exp(exp: i64) -> String {
    credential_for(&serde_json::json!({
        "subject_id": 1,
        "role": "user",
        "username": "x",
        "exp": exp,
    }))
}

#[test]
fn ignore_policy_accepts_expired_credential() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    assert!(manager.login(&with_exp(1)).is_ok());
}

#[test]
fn enforce_policy_rejects_expired_login() {
    let backend = MemoryStorage::new();
    let mut manager = enforcing(&backend);
    assert_eq!(manager.login(&with_exp(1)), Err(CredentialError::Expired));
    assert_fully_anonymous(&manager, &backend);
    assert!(manager.login(&with_exp(i64::from(u32::MAX) * 4)).is_ok());
}

#[test]
fn enforce_policy_drops_expired_stored_credential() {
    let backend = MemoryStorage::with_entry(KEY, &with_exp(1));
    let manager = enforcing(&backend);
    assert_fully_anonymous(&manager, &backend);
}

// =============================================================
// observers
// =============================================================

fn recorder() -> (Arc<Mutex<Vec<SessionState>>>, impl Fn(&SessionState) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |state: &SessionState| sink.lock().push(state.clone()))
}

#[test]
fn subscriber_sees_resolution_then_transitions() {
    let backend = MemoryStorage::new();
    let mut manager = SessionManager::new(backend, RequestChannel::new("/api"), &SessionConfig::default());
    let (seen, observer) = recorder();
    manager.subscribe(observer);
    manager.initialize();
    manager.login(&credential(1, "user", "x")).unwrap();
    manager.logout();
    manager.logout();

    let seen = seen.lock();
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], SessionState::Resolving);
    assert_eq!(seen[1], SessionState::Anonymous);
    assert!(matches!(seen[2], SessionState::Authenticated(_)));
    assert_eq!(seen[3], SessionState::Anonymous);
}

#[test]
fn failed_login_does_not_notify() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    let (seen, observer) = recorder();
    manager.subscribe(observer);
    let _ = manager.login("a.b");
    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn unsubscribed_observer_is_not_called() {
    let backend = MemoryStorage::new();
    let mut manager = manager_with(&backend);
    let (seen, observer) = recorder();
    let id = manager.subscribe(observer);
    assert!(manager.unsubscribe(id));
    assert!(!manager.unsubscribe(id));
    manager.login(&credential(1, "user", "x")).unwrap();
    assert_eq!(seen.lock().len(), 1);
}
