//! Result view for one assessment: inputs, per-model verdicts, context charts.

#[cfg(test)]
#[path = "record_result_test.rs"]
mod record_result_test;

use assessments::stats;
use assessments::{Assessment, ModelKey, Prediction};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::charts::{LineChart, LineSeries, RISK_COLOR, RiskPieChart};
use crate::components::layout::{AuthGate, Layout};
use crate::components::measurement_fields::MeasurementTable;
use crate::components::model_selector::ModelSelector;
use crate::components::risk_badge::RiskBadge;
use crate::state::auth::AuthState;
use crate::state::data::DataState;
use crate::state::model_mode::ModelModeState;
use crate::util::auth::install_unauth_redirect;
use crate::util::records::install_records_loader;

/// Each model with whatever prediction the record carries for it.
fn model_verdicts(record: &Assessment) -> Vec<(ModelKey, Option<Prediction>)> {
    ModelKey::ALL.into_iter().map(|m| (m, record.prediction(m))).collect()
}

#[component]
pub fn RecordResultPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = expect_context::<RwSignal<DataState>>();
    let model_mode = expect_context::<RwSignal<ModelModeState>>();
    install_unauth_redirect(auth, use_navigate());
    install_records_loader(auth, data);

    let params = use_params_map();
    let record_id = Memo::new(move |_| params.get().get("id").unwrap_or_default());
    let record = Memo::new(move |_| data.get().find(&record_id.get()).cloned());

    let trend = Memo::new(move |_| stats::risk_trend(&data.get().records, model_mode.get().model, false));
    let trend_labels = Signal::derive(move || trend.get().into_iter().map(|p| p.label).collect::<Vec<_>>());
    let trend_series = Signal::derive(move || {
        vec![LineSeries {
            name: "Risk %",
            color: RISK_COLOR,
            values: trend.get().into_iter().map(|p| p.value).collect(),
        }]
    });
    let distribution =
        Signal::derive(move || stats::risk_distribution(&data.get().records, model_mode.get().model));

    view! {
        <AuthGate>
            <Layout>
                <div class="result-page">
                    {move || match record.get() {
                        Some(rec) => {
                            let selected = Signal::derive(move || {
                                record.get().and_then(|r| r.prediction(model_mode.get().model))
                            });
                            view! {
                                <div class="result-page__header">
                                    <h1>"Assessment Result"</h1>
                                    <span class="result-page__date">{stats::day_label(&rec)}</span>
                                    <ModelSelector/>
                                </div>
                                <section class="result-page__headline">
                                    <h2>"Your risk"</h2>
                                    <RiskBadge prediction=selected/>
                                </section>
                                <section class="result-page__measurements">
                                    <h2>"Measurements"</h2>
                                    <MeasurementTable measurements=rec.measurements.clone()/>
                                </section>
                                <section class="result-page__models">
                                    <h2>"All models"</h2>
                                    <table class="table">
                                        <tbody>
                                            {model_verdicts(&rec)
                                                .into_iter()
                                                .map(|(model, prediction)| {
                                                    view! {
                                                        <tr>
                                                            <td>{model.label()}</td>
                                                            <td><RiskBadge prediction=prediction/></td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                </section>
                                <div class="result-page__actions">
                                    <a class="btn" href=format!("/records/{}/edit", rec.id)>"Edit"</a>
                                    <a class="btn" href="/review-records">"All records"</a>
                                </div>
                            }
                                .into_any()
                        }
                        None if data.get().loaded => {
                            view! {
                                <div class="result-page__missing">
                                    <h1>"Record Not Found"</h1>
                                    <p>"The assessment you are looking for does not exist or was deleted."</p>
                                    <a class="btn btn--primary" href="/dashboard">"Back to dashboard"</a>
                                </div>
                            }
                                .into_any()
                        }
                        None => view! { <p class="page__loading">"Loading record..."</p> }.into_any(),
                    }}
                    <div class="result-page__charts">
                        <LineChart title="Risk Trend" labels=trend_labels series=trend_series bounds=(0.0, 100.0)/>
                        <RiskPieChart title="Risk Distribution" distribution=distribution/>
                    </div>
                </div>
            </Layout>
        </AuthGate>
    }
}
