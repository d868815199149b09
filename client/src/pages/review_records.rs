//! History table with expandable details, edit/delete and trend charts.

#[cfg(test)]
#[path = "review_records_test.rs"]
mod review_records_test;

use assessments::stats;
use assessments::{Assessment, ModelKey};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::charts::{BLOOD_PRESSURE_COLOR, BMI_COLOR, GLUCOSE_COLOR, LineChart, LineSeries, RISK_COLOR};
use crate::components::layout::{AuthGate, Layout};
use crate::components::measurement_fields::MeasurementTable;
use crate::components::model_selector::ModelSelector;
use crate::components::risk_badge::{RiskBadge, format_percentage};
use crate::state::auth::AuthState;
use crate::state::data::DataState;
use crate::state::model_mode::ModelModeState;
use crate::util::auth::install_unauth_redirect;
use crate::util::records::install_records_loader;

/// One table row, already formatted.
#[derive(Clone, Debug, PartialEq)]
struct HistoryRow {
    id: String,
    date: String,
    percentage: String,
    bmi: String,
    glucose: String,
    blood_pressure: String,
}

fn history_row(record: &Assessment, model: ModelKey) -> HistoryRow {
    let m = &record.measurements;
    HistoryRow {
        id: record.id.clone(),
        date: stats::day_label(record),
        percentage: record.prediction(model).map_or_else(|| "-".to_owned(), |p| format_percentage(p.percentage)),
        bmi: format!("{:.1}", m.bmi),
        glucose: m.glucose.to_string(),
        blood_pressure: m.blood_pressure.to_string(),
    }
}

/// Flip the expanded row: opening another row closes the current one.
fn toggle_expanded(current: Option<String>, id: &str) -> Option<String> {
    if current.as_deref() == Some(id) { None } else { Some(id.to_owned()) }
}

fn series(name: &'static str, color: &'static str, points: Vec<stats::TrendPoint>) -> (Vec<String>, Vec<LineSeries>) {
    let labels = points.iter().map(|p| p.label.clone()).collect();
    let values = points.into_iter().map(|p| p.value).collect();
    (labels, vec![LineSeries { name, color, values }])
}

#[component]
pub fn ReviewRecordsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = expect_context::<RwSignal<DataState>>();
    let model_mode = expect_context::<RwSignal<ModelModeState>>();
    install_unauth_redirect(auth, use_navigate());
    install_records_loader(auth, data);

    let expanded = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let on_confirm_delete = move |_| {
        let (Some(id), Some(token)) = (pending_delete.get(), auth.get().token()) else {
            return;
        };
        deleting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_record(&token, &id).await {
                Ok(resp) => {
                    data.update(|d| {
                        d.remove(&id);
                    });
                    message.set(Some(resp.message.unwrap_or_else(|| "Record deleted".to_owned())));
                    crate::util::records::refresh(auth, data);
                }
                Err(err) => message.set(Some(crate::util::auth::handle_api_error(&err, auth, data))),
            }
            pending_delete.set(None);
            deleting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, token);
        }
    };

    let risk = Memo::new(move |_| {
        series("Risk %", RISK_COLOR, stats::risk_trend(&data.get().records, model_mode.get().model, true))
    });
    let bmi = Memo::new(move |_| series("BMI", BMI_COLOR, stats::metric_trend(&data.get().records, |r| r.measurements.bmi)));
    let glucose = Memo::new(move |_| {
        series(
            "Glucose",
            GLUCOSE_COLOR,
            stats::metric_trend(&data.get().records, |r| f64::from(r.measurements.glucose)),
        )
    });
    let pressure = Memo::new(move |_| {
        series(
            "Blood Pressure",
            BLOOD_PRESSURE_COLOR,
            stats::metric_trend(&data.get().records, |r| f64::from(r.measurements.blood_pressure)),
        )
    });

    view! {
        <AuthGate>
            <Layout>
                <div class="review-page">
                    <div class="review-page__header">
                        <h1>"Review Records"</h1>
                        <ModelSelector/>
                    </div>
                    <Show when=move || message.get().is_some()>
                        <p class="page__notice">{move || message.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || data.get().error.is_some()>
                        <p class="page__error">{move || data.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=move || !data.get().records.is_empty()
                        fallback=move || {
                            view! {
                                <p class="review-page__empty">
                                    {move || if data.get().loading { "Loading records..." } else { "No records yet." }}
                                </p>
                            }
                        }
                    >
                        <table class="table review-page__table">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Risk"</th>
                                    <th>"Risk %"</th>
                                    <th>"BMI"</th>
                                    <th>"Glucose"</th>
                                    <th>"Blood Pressure"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let model = model_mode.get().model;
                                    data.get()
                                        .records
                                        .into_iter()
                                        .map(|record| {
                                            let row = history_row(&record, model);
                                            let id = row.id.clone();
                                            let toggle_id = id.clone();
                                            let delete_id = id.clone();
                                            let open_id = id.clone();
                                            let prediction = record.prediction(model);
                                            let measurements = record.measurements.clone();
                                            view! {
                                                <tr class="review-page__row">
                                                    <td>{row.date}</td>
                                                    <td><RiskBadge prediction=prediction/></td>
                                                    <td>{row.percentage}</td>
                                                    <td>{row.bmi}</td>
                                                    <td>{row.glucose}</td>
                                                    <td>{row.blood_pressure}</td>
                                                    <td class="review-page__actions">
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| expanded.update(|e| *e = toggle_expanded(e.take(), &toggle_id))
                                                        >
                                                            "Details"
                                                        </button>
                                                        <a class="btn btn--small" href=format!("/records/{id}")>"View"</a>
                                                        <a class="btn btn--small" href=format!("/records/{id}/edit")>"Edit"</a>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| pending_delete.set(Some(delete_id.clone()))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                                <Show when=move || expanded.get().as_deref() == Some(open_id.as_str())>
                                                    <tr class="review-page__details">
                                                        <td colspan="7">
                                                            <MeasurementTable measurements=measurements.clone()/>
                                                        </td>
                                                    </tr>
                                                </Show>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </Show>
                    <Show when=move || pending_delete.get().is_some()>
                        <div class="modal-backdrop">
                            <div class="modal">
                                <h2>"Delete record?"</h2>
                                <p>"This permanently removes the assessment and its predictions."</p>
                                <div class="modal__actions">
                                    <button
                                        class="btn"
                                        disabled=move || deleting.get()
                                        on:click=move |_| pending_delete.set(None)
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        class="btn btn--danger"
                                        disabled=move || deleting.get()
                                        on:click=on_confirm_delete
                                    >
                                        {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </Show>
                    <div class="review-page__charts">
                        <LineChart
                            title="Risk Over Time"
                            labels=Signal::derive(move || risk.get().0)
                            series=Signal::derive(move || risk.get().1)
                            bounds=(0.0, 100.0)
                        />
                        <LineChart
                            title="BMI Over Time"
                            labels=Signal::derive(move || bmi.get().0)
                            series=Signal::derive(move || bmi.get().1)
                        />
                        <LineChart
                            title="Glucose Over Time"
                            labels=Signal::derive(move || glucose.get().0)
                            series=Signal::derive(move || glucose.get().1)
                        />
                        <LineChart
                            title="Blood Pressure Over Time"
                            labels=Signal::derive(move || pressure.get().0)
                            series=Signal::derive(move || pressure.get().1)
                        />
                    </div>
                </div>
            </Layout>
        </AuthGate>
    }
}
