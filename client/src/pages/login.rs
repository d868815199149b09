//! Login page: email + password against the risk API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use assessments::ApiError;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::data::DataState;
use crate::util::auth::install_auth_redirect;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Trim the email and require both inputs.
fn validate_login_input(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter your email and password");
    }
    Ok(email.to_owned())
}

/// Message for a failed login. The API detail wins when it sent one.
fn login_error_message(err: &ApiError) -> String {
    if let Some(detail) = err.detail() {
        return detail.to_owned();
    }
    match err {
        ApiError::Network(_) => err.user_message(),
        _ => INVALID_CREDENTIALS.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = expect_context::<RwSignal<DataState>>();
    let navigate = use_navigate();
    install_auth_redirect(auth, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_login_input(&email.get(), &password.get()) {
            Ok(v) => v,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let password_value = password.get();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(resp) => {
                        data.update(DataState::clear);
                        auth.update(|a| a.sign_in(resp.into()));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(login_error_message(&err))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, data, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"DiabetesPredict"</h1>
                <p class="auth-card__subtitle">"Sign in to track your diabetes risk"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__field">
                        <span>"Email"</span>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__field">
                        <span>"Password"</span>
                        <div class="auth-input-group">
                            <input
                                class="auth-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="btn auth-input-group__toggle"
                                type="button"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
