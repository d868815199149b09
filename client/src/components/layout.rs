//! Page chrome for authenticated routes: header nav, greeting, footer.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::data::DataState;

const NAV_LINKS: [(&str, &str); 3] = [
    ("/dashboard", "Dashboard"),
    ("/update-data", "Update Data"),
    ("/review-records", "Review Records"),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = expect_context::<RwSignal<DataState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::util::auth::sign_out(auth, data);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="layout">
            <header class="layout__header">
                <a class="layout__brand" href="/dashboard">"DiabetesPredict"</a>
                <nav class="layout__nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a class="layout__nav-link" href=href>{label}</a> })
                        .collect_view()}
                </nav>
                <span class="layout__spacer"></span>
                <span class="layout__greeting">{move || format!("Hello, {}", auth.get().display_name())}</span>
                <button class="btn layout__logout" on:click=on_logout>"Logout"</button>
            </header>
            <main class="layout__main">{children()}</main>
            <footer class="layout__footer">
                "Predictions are informational only and do not replace medical advice."
            </footer>
        </div>
    }
}

/// Loading/auth placeholder shared by every protected page.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="page page--placeholder">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
