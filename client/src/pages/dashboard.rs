//! Dashboard page: headline stats, model picker and trend charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Every number is derived from the
//! shared record list for the model chosen in the selector.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use assessments::stats::{self, Summary};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::charts::{
    BMI_COLOR, GLUCOSE_COLOR, HealthFactorChart, LineChart, LineSeries, RISK_COLOR, RiskPieChart,
};
use crate::components::layout::{AuthGate, Layout};
use crate::components::model_metrics_grid::ModelMetricsGrid;
use crate::components::model_selector::ModelSelector;
use crate::components::risk_badge::format_percentage;
use crate::components::stat_card::StatCard;
use crate::state::auth::AuthState;
use crate::state::data::DataState;
use crate::state::model_mode::ModelModeState;
use crate::util::auth::install_unauth_redirect;
use crate::util::records::install_records_loader;

/// Text for the four stat cards, in display order.
fn stat_values(summary: &Summary) -> [String; 4] {
    [
        summary.latest_risk_percentage.map_or_else(|| "-".to_owned(), format_percentage),
        summary.total.to_string(),
        summary.average_bmi.map_or_else(|| "-".to_owned(), |bmi| format!("{bmi:.1}")),
        summary.latest_date.clone().unwrap_or_else(|| "-".to_owned()),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = expect_context::<RwSignal<DataState>>();
    let model_mode = expect_context::<RwSignal<ModelModeState>>();
    install_unauth_redirect(auth, use_navigate());
    install_records_loader(auth, data);

    let summary = Memo::new(move |_| stats::summary(&data.get().records, model_mode.get().model));
    let stat = move |i: usize| Signal::derive(move || stat_values(&summary.get())[i].clone());

    let risk_trend = Memo::new(move |_| stats::risk_trend(&data.get().records, model_mode.get().model, false));
    let risk_labels = Signal::derive(move || risk_trend.get().into_iter().map(|p| p.label).collect::<Vec<_>>());
    let risk_series = Signal::derive(move || {
        vec![LineSeries {
            name: "Risk %",
            color: RISK_COLOR,
            values: risk_trend.get().into_iter().map(|p| p.value).collect(),
        }]
    });

    let dual = Memo::new(move |_| stats::bmi_glucose_trend(&data.get().records));
    let dual_labels = Signal::derive(move || dual.get().into_iter().map(|p| p.label).collect::<Vec<_>>());
    let dual_series = Signal::derive(move || {
        let points = dual.get();
        vec![
            LineSeries { name: "BMI", color: BMI_COLOR, values: points.iter().map(|p| p.bmi).collect() },
            LineSeries {
                name: "Glucose (÷5)",
                color: GLUCOSE_COLOR,
                values: points.iter().map(|p| p.glucose_scaled).collect(),
            },
        ]
    });

    let distribution =
        Signal::derive(move || stats::risk_distribution(&data.get().records, model_mode.get().model));

    view! {
        <AuthGate>
            <Layout>
                <div class="dashboard-page">
                    <div class="dashboard-page__header">
                        <h1>"Dashboard"</h1>
                        <ModelSelector/>
                    </div>
                    <Show when=move || data.get().error.is_some()>
                        <p class="page__error">{move || data.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || data.get().loading>
                        <p class="page__loading">"Loading records..."</p>
                    </Show>
                    <div class="dashboard-page__stats">
                        <StatCard title="Latest Risk" value=stat(0) subtitle="Selected model"/>
                        <StatCard title="Total Assessments" value=stat(1)/>
                        <StatCard title="Average BMI" value=stat(2)/>
                        <StatCard title="Last Assessment" value=stat(3)/>
                    </div>
                    <ModelMetricsGrid/>
                    <div class="dashboard-page__charts">
                        <LineChart title="Risk Trend" labels=risk_labels series=risk_series bounds=(0.0, 100.0)/>
                        <RiskPieChart title="Risk Distribution" distribution=distribution/>
                        <LineChart title="BMI & Glucose" labels=dual_labels series=dual_series/>
                        <HealthFactorChart/>
                    </div>
                    <Show when=move || data.get().loaded && data.get().records.is_empty()>
                        <p class="dashboard-page__empty">
                            "No assessments yet. " <a href="/update-data">"Add your first record"</a>
                        </p>
                    </Show>
                </div>
            </Layout>
        </AuthGate>
    }
}
