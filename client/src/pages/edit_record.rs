//! Edit form for an existing record. Saving re-scores it on the API side.

#[cfg(test)]
#[path = "edit_record_test.rs"]
mod edit_record_test;

use assessments::validation::summarize;
use assessments::{Assessment, MeasurementDraft};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::layout::{AuthGate, Layout};
use crate::components::measurement_fields::MeasurementFields;
use crate::state::auth::AuthState;
use crate::state::data::DataState;
use crate::util::auth::{install_pending_navigation, install_unauth_redirect};
use crate::util::records::install_records_loader;

/// Form contents for a record, once it is known.
fn initial_draft(record: Option<&Assessment>) -> Option<MeasurementDraft> {
    record.map(|r| MeasurementDraft::from_measurements(&r.measurements))
}

/// What the form should do when the route id or the record list changes.
#[derive(Clone, Debug, PartialEq)]
enum DraftSync {
    Keep,
    Load(MeasurementDraft),
    Clear,
}

/// `loaded_for` is the id whose record currently fills the form.
fn sync_draft(loaded_for: Option<&str>, route_id: &str, record: Option<&Assessment>) -> DraftSync {
    if loaded_for == Some(route_id) {
        return DraftSync::Keep;
    }
    match initial_draft(record) {
        Some(draft) => DraftSync::Load(draft),
        None if loaded_for.is_some() => DraftSync::Clear,
        None => DraftSync::Keep,
    }
}

#[component]
pub fn EditRecordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = expect_context::<RwSignal<DataState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    install_records_loader(auth, data);
    let redirect = RwSignal::new(None::<String>);
    install_pending_navigation(redirect, navigate);

    let params = use_params_map();
    let record_id = Memo::new(move |_| params.get().get("id").unwrap_or_default());

    let draft = RwSignal::new(MeasurementDraft::default());
    let loaded_for = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Refill whenever the route points at a different record.
    Effect::new(move || {
        let id = record_id.get();
        let state = data.get();
        match sync_draft(loaded_for.get_untracked().as_deref(), &id, state.find(&id)) {
            DraftSync::Keep => {}
            DraftSync::Load(d) => {
                draft.set(d);
                error.set(None);
                loaded_for.set(Some(id));
            }
            DraftSync::Clear => {
                draft.set(MeasurementDraft::default());
                loaded_for.set(None);
            }
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let measurements = match draft.get().validate() {
            Ok(m) => m,
            Err(errors) => {
                error.set(Some(summarize(&errors)));
                return;
            }
        };
        let Some(token) = auth.get().token() else {
            return;
        };
        let Some(id) = loaded_for.get() else {
            return;
        };
        saving.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_record(&token, &id, &measurements).await {
                Ok(record) => {
                    data.update(|d| {
                        d.update(record);
                    });
                    crate::util::records::refresh(auth, data);
                    redirect.set(Some("/review-records".to_owned()));
                }
                Err(err) => error.set(Some(crate::util::auth::handle_api_error(&err, auth, data))),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (measurements, token, id);
        }
    };

    view! {
        <AuthGate>
            <Layout>
                <div class="edit-page">
                    <h1>"Edit Record"</h1>
                    <Show
                        when=move || loaded_for.get().as_deref() == Some(record_id.get().as_str())
                        fallback=move || {
                            view! {
                                <p class="page__loading">
                                    {move || {
                                        if data.get().loaded { "Record Not Found" } else { "Loading record..." }
                                    }}
                                </p>
                            }
                        }
                    >
                        <form class="edit-page__form" on:submit=on_save>
                            <MeasurementFields draft=draft disabled=Signal::derive(move || saving.get())/>
                            <Show when=move || error.get().is_some()>
                                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
                            </Show>
                            <div class="edit-page__actions">
                                <a class="btn" href="/review-records">"Cancel"</a>
                                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                                </button>
                            </div>
                        </form>
                    </Show>
                </div>
            </Layout>
        </AuthGate>
    }
}
