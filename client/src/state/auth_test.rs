use assessments::SessionUser;

use super::*;

fn session() -> Session {
    Session {
        user: SessionUser {
            id: "u1".to_owned(),
            email: "ada@example.com".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            username: "ada".to_owned(),
        },
        token: "tok-1".to_owned(),
    }
}

#[test]
fn default_state_is_loading_without_session() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.token(), None);
}

#[test]
fn sign_in_sets_session_and_clears_loading() {
    let mut state = AuthState::default();
    state.sign_in(session());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.token().as_deref(), Some("tok-1"));
    assert_eq!(state.display_name(), "Ada");
}

#[test]
fn sign_out_clears_session() {
    let mut state = AuthState::default();
    state.sign_in(session());
    state.sign_out();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn restore_with_nothing_stored_finishes_loading() {
    let mut state = AuthState::default();
    state.restore(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn stored_session_is_absent_outside_browser() {
    assert_eq!(load_stored_session(), None);
}
