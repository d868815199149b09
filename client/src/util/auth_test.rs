use assessments::{Session, SessionUser};

use super::*;

#[test]
fn should_redirect_unauth_when_not_loading_and_session_missing() {
    let state = AuthState { session: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { session: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = AuthState {
        session: Some(Session {
            user: SessionUser {
                id: "u1".to_owned(),
                email: "alice@example.com".to_owned(),
                first_name: "Alice".to_owned(),
                last_name: String::new(),
                username: "alice".to_owned(),
            },
            token: "tok".to_owned(),
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}
