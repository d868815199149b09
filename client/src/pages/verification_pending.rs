//! Shown after signup until the user follows the emailed link.

#[cfg(test)]
#[path = "verification_pending_test.rs"]
mod verification_pending_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

#[derive(Clone, Debug, PartialEq, Eq)]
enum ResendStatus {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

impl ResendStatus {
    fn button_label(&self) -> &'static str {
        match self {
            Self::Sending => "Sending...",
            _ => "Resend verification email",
        }
    }
}

fn sent_message(message: Option<String>) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Verification email sent.".to_owned())
}

#[component]
pub fn VerificationPendingPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let email = Memo::new(move |_| query.get().get("email").filter(|e| !e.trim().is_empty()));
    let status = RwSignal::new(ResendStatus::Idle);

    Effect::new(move || {
        if email.get().is_none() {
            navigate("/signup", NavigateOptions::default());
        }
    });

    let on_resend = move |_| {
        let Some(address) = email.get() else {
            return;
        };
        if status.get() == ResendStatus::Sending {
            return;
        }
        status.set(ResendStatus::Sending);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::resend_verification(&address).await {
                Ok(resp) => status.set(ResendStatus::Sent(sent_message(resp.message))),
                Err(err) => status.set(ResendStatus::Failed(err.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = address;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Check your email"</h1>
                <p class="auth-message">
                    "We sent a verification link to "
                    <strong>{move || email.get().unwrap_or_default()}</strong>
                    ". Follow it to activate your account."
                </p>
                <button
                    class="btn btn--primary"
                    disabled=move || status.get() == ResendStatus::Sending
                    on:click=on_resend
                >
                    {move || status.get().button_label()}
                </button>
                {move || match status.get() {
                    ResendStatus::Sent(message) => {
                        Some(view! { <p class="auth-message auth-message--success">{message}</p> }.into_any())
                    }
                    ResendStatus::Failed(message) => {
                        Some(view! { <p class="auth-message auth-message--error">{message}</p> }.into_any())
                    }
                    ResendStatus::Idle | ResendStatus::Sending => None,
                }}
                <p class="auth-card__footer"><a href="/login">"Back to login"</a></p>
            </div>
        </div>
    }
}
