//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, edit_record::EditRecordPage, login::LoginPage, record_result::RecordResultPage,
    review_records::ReviewRecordsPage, signup::SignupPage, update_data::UpdateDataPage,
    verification_pending::VerificationPendingPage, verify_email::VerifyEmailPage,
};
use crate::state::{auth::AuthState, data::DataState, model_mode::ModelModeState};
use crate::util::config::API_BASE_META;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is published as a meta tag so the browser bundle knows which
/// risk API deployment to call.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let data = RwSignal::new(DataState::default());
    let model_mode = RwSignal::new(ModelModeState::default());

    provide_context(auth);
    provide_context(data);
    provide_context(model_mode);

    // Storage is only readable after hydration; SSR renders the loading state.
    Effect::new(move || {
        auth.update(|a| a.restore(crate::state::auth::load_stored_session()));
        model_mode.set(ModelModeState::load());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/diabetes-predict.css"/>
        <Title text="DiabetesPredict"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route path=StaticSegment("verification-pending") view=VerificationPendingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("update-data") view=UpdateDataPage/>
                <Route path=StaticSegment("review-records") view=ReviewRecordsPage/>
                <Route path=(StaticSegment("records"), ParamSegment("id")) view=RecordResultPage/>
                <Route
                    path=(StaticSegment("records"), ParamSegment("id"), StaticSegment("edit"))
                    view=EditRecordPage
                />
            </Routes>
        </Router>
    }
}
