//! Landing page for the link in the verification email.

#[cfg(test)]
#[path = "verify_email_test.rs"]
mod verify_email_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Delay before the success screen moves on to the login page.
pub const REDIRECT_DELAY_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
enum VerifyStatus {
    Loading,
    Success(String),
    Failed(String),
}

/// Status before the API call: a missing token fails immediately.
fn initial_status(token: Option<&str>) -> VerifyStatus {
    match token.map(str::trim) {
        Some(t) if !t.is_empty() => VerifyStatus::Loading,
        _ => VerifyStatus::Failed("Invalid verification link".to_owned()),
    }
}

fn success_message(message: &str) -> String {
    if message.trim().is_empty() {
        "Your email has been verified.".to_owned()
    } else {
        message.to_owned()
    }
}

/// Cancellation flag for the delayed redirect, tripped when the page unmounts.
#[derive(Clone, Debug, Default)]
struct RedirectGuard(Arc<AtomicBool>);

impl RedirectGuard {
    fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    fn is_live(&self) -> bool {
        !self.0.load(Ordering::Relaxed)
    }
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let token = query.get_untracked().get("token");
    let status = RwSignal::new(initial_status(token.as_deref()));
    let guard = RedirectGuard::default();
    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });

    #[cfg(feature = "hydrate")]
    {
        let navigate = use_navigate();
        if let (Some(token), VerifyStatus::Loading) = (token, status.get_untracked()) {
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_email(&token).await {
                    Ok(resp) => {
                        let _ = status.try_set(VerifyStatus::Success(success_message(&resp.message)));
                        gloo_timers::future::sleep(std::time::Duration::from_secs(REDIRECT_DELAY_SECS)).await;
                        if guard.is_live() {
                            navigate("/login", NavigateOptions::default());
                        }
                    }
                    Err(err) => {
                        let _ = status.try_set(VerifyStatus::Failed(err.user_message()));
                    }
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, guard);
    }

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Email verification"</h1>
                {move || match status.get() {
                    VerifyStatus::Loading => view! { <p class="auth-message">"Verifying your email..."</p> }.into_any(),
                    VerifyStatus::Success(message) => {
                        view! {
                            <p class="auth-message auth-message--success">{message}</p>
                            <p class="auth-message">
                                {format!("Redirecting to login in {REDIRECT_DELAY_SECS} seconds...")}
                            </p>
                            <a class="btn btn--primary" href="/login">"Go to login"</a>
                        }
                            .into_any()
                    }
                    VerifyStatus::Failed(message) => {
                        view! {
                            <p class="auth-message auth-message--error">{message}</p>
                            <a class="btn" href="/signup">"Back to signup"</a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
