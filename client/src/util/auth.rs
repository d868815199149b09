//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components apply identical unauthenticated redirect
//! behavior, and every API failure funnels through the same 401 handling.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use assessments::ApiError;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::data::DataState;

/// True once the stored session has been checked and none was found.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect authenticated visitors away from the login and signup pages.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.session.is_some() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });
}

/// End the session and drop cached records.
pub fn sign_out(auth: RwSignal<AuthState>, data: RwSignal<DataState>) {
    auth.update(AuthState::sign_out);
    data.update(DataState::clear);
}

/// Sign out when the API rejected the token. Returns the message to show.
pub fn handle_api_error(err: &ApiError, auth: RwSignal<AuthState>, data: RwSignal<DataState>) -> String {
    if err.is_unauthorized() {
        #[cfg(feature = "hydrate")]
        log::warn!("session rejected by api: {err}");
        sign_out(auth, data);
    }
    err.user_message()
}

/// Navigate whenever `target` is filled, then clear it.
///
/// Handlers embedded in protected views set the signal instead of holding the
/// router's navigate closure themselves.
pub fn install_pending_navigation<F>(target: RwSignal<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
