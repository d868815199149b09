//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The session is mirrored to local storage
//! so a reload keeps the user signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use assessments::Session;

use crate::util::storage;

/// Local storage key holding the serialized [`Session`].
pub const SESSION_STORAGE_KEY: &str = "diabetes_predict_session";

/// Authentication state tracking the current session and restore status.
///
/// `loading` stays true until the stored session has been read on the
/// client, so guards do not redirect during hydration.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Bearer token of the current session.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.session.as_ref().map(|s| s.display_name().to_owned()).unwrap_or_default()
    }

    /// Store a fresh session and persist it.
    pub fn sign_in(&mut self, session: Session) {
        storage::save_json(SESSION_STORAGE_KEY, &session);
        self.session = Some(session);
        self.loading = false;
    }

    /// Drop the session locally and from storage.
    pub fn sign_out(&mut self) {
        storage::remove(SESSION_STORAGE_KEY);
        self.session = None;
        self.loading = false;
    }

    /// Finish startup using whatever session storage holds.
    pub fn restore(&mut self, stored: Option<Session>) {
        self.session = stored;
        self.loading = false;
    }
}

/// Read the persisted session, if any.
pub fn load_stored_session() -> Option<Session> {
    storage::load_json(SESSION_STORAGE_KEY)
}
