//! Record-list loading shared by every authenticated page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::data::DataState;

/// Refetch the record list for the current session.
pub fn refresh(auth: RwSignal<AuthState>, data: RwSignal<DataState>) {
    let Some(token) = auth.get_untracked().token() else {
        return;
    };
    data.update(DataState::start_loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_records(&token).await {
            Ok(records) => {
                log::info!("loaded {} records", records.len());
                data.update(|d| d.replace_all(records));
            }
            Err(err) => {
                let message = crate::util::auth::handle_api_error(&err, auth, data);
                data.update(|d| d.fail(message));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Fetch records once a session exists and nothing has been loaded yet.
pub fn install_records_loader(auth: RwSignal<AuthState>, data: RwSignal<DataState>) {
    Effect::new(move || {
        if !auth.get().is_authenticated() {
            return;
        }
        let state = data.get();
        if state.loaded || state.loading || state.error.is_some() {
            return;
        }
        refresh(auth, data);
    });
}
