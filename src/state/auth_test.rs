use super::*;
use serde_json::json;

fn session() -> Session {
    Session { user: json!({"id": 1, "name": "a"}), jwt: "T".to_owned() }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.jwt.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// SharedAuthState
// =============================================================

#[test]
fn publish_sets_user_and_token_together() {
    let shared = SharedAuthState::new();
    shared.publish(&session());

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.user, Some(json!({"id": 1, "name": "a"})));
    assert_eq!(snapshot.jwt.as_deref(), Some("T"));
    assert!(snapshot.is_authenticated());
}

#[test]
fn publish_replaces_previous_identity() {
    let shared = SharedAuthState::new();
    shared.publish(&session());
    shared.publish(&Session { user: json!({"username": "bob"}), jwt: "U".to_owned() });

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.user, Some(json!({"username": "bob"})));
    assert_eq!(snapshot.jwt.as_deref(), Some("U"));
}

#[test]
fn clones_observe_publish() {
    let shared = SharedAuthState::new();
    let reader = shared.clone();
    shared.publish(&session());
    assert!(reader.snapshot().is_authenticated());
}

#[test]
fn from_session_restores_and_clear_forgets() {
    let shared = SharedAuthState::from_session(Some(&session()));
    assert!(shared.snapshot().is_authenticated());
    shared.clear();
    assert_eq!(shared.snapshot(), AuthState::default());

    assert!(!SharedAuthState::from_session(None).snapshot().is_authenticated());
}
