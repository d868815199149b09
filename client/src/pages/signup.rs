//! Signup page: personal and account details with client-side checks.
//!
//! A successful signup does not sign the user in; the API first requires the
//! email address to be verified.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use assessments::api::{SignupRequest, encode_component};
use assessments::validation::{Field, SignupDraft};
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_auth_redirect;

fn signup_request(draft: &SignupDraft) -> SignupRequest {
    SignupRequest {
        email: draft.email.trim().to_owned(),
        password: draft.password.clone(),
        first_name: draft.first_name.trim().to_owned(),
        last_name: draft.last_name.trim().to_owned(),
        username: draft.username.trim().to_owned(),
        phone_number: draft.phone_number.trim().to_owned(),
        date_of_birth: draft.date_of_birth.trim().to_owned(),
    }
}

fn pending_path(email: &str) -> String {
    format!("/verification-pending?email={}", encode_component(email))
}

fn field_value(draft: &SignupDraft, field: Field) -> String {
    match field {
        Field::FirstName => draft.first_name.clone(),
        Field::LastName => draft.last_name.clone(),
        Field::Email => draft.email.clone(),
        Field::DateOfBirth => draft.date_of_birth.clone(),
        Field::PhoneNumber => draft.phone_number.clone(),
        Field::Username => draft.username.clone(),
        Field::Password => draft.password.clone(),
        Field::ConfirmPassword => draft.confirm_password.clone(),
        _ => String::new(),
    }
}

fn set_field(draft: &mut SignupDraft, field: Field, value: String) {
    match field {
        Field::FirstName => draft.first_name = value,
        Field::LastName => draft.last_name = value,
        Field::Email => draft.email = value,
        Field::DateOfBirth => draft.date_of_birth = value,
        Field::PhoneNumber => draft.phone_number = value,
        Field::Username => draft.username = value,
        Field::Password => draft.password = value,
        Field::ConfirmPassword => draft.confirm_password = value,
        _ => {}
    }
}

#[component]
fn TextInput(draft: RwSignal<SignupDraft>, field: Field, #[prop(default = "text")] kind: &'static str) -> impl IntoView {
    view! {
        <label class="auth-form__field">
            <span>{field.label()}</span>
            <input
                class="auth-input"
                type=kind
                prop:value=move || draft.with(|d| field_value(d, field))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set_field(d, field, value));
                }
            />
        </label>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_auth_redirect(auth, navigate.clone());

    let draft = RwSignal::new(SignupDraft::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = draft.get();
        if let Err(err) = current.validate() {
            error.set(Some(err.message));
            return;
        }
        let request = signup_request(&current);
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&request).await {
                    Ok(resp) => navigate(&pending_path(&resp.email), NavigateOptions::default()),
                    Err(err) => error.set(Some(err.user_message())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <fieldset class="auth-form__section">
                        <legend>"Personal information"</legend>
                        <TextInput draft=draft field=Field::FirstName/>
                        <TextInput draft=draft field=Field::LastName/>
                        <TextInput draft=draft field=Field::DateOfBirth kind="date"/>
                        <TextInput draft=draft field=Field::PhoneNumber kind="tel"/>
                    </fieldset>
                    <fieldset class="auth-form__section">
                        <legend>"Account"</legend>
                        <TextInput draft=draft field=Field::Email kind="email"/>
                        <TextInput draft=draft field=Field::Username/>
                        <TextInput draft=draft field=Field::Password kind="password"/>
                        <TextInput draft=draft field=Field::ConfirmPassword kind="password"/>
                    </fieldset>
                    <label class="auth-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.get().accept_terms
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                draft.update(|d| d.accept_terms = checked);
                            }
                        />
                        "I accept the Privacy & Security terms"
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__footer">"Already have an account? " <a href="/login">"Sign in"</a></p>
            </div>
        </div>
    }
}
