//! Update-data page: three-step measurement form plus CSV bulk import.
//!
//! Step 1 collects input, step 2 shows it back for review, step 3 submits.
//! A new record lands on its result page; a bulk import goes to the review
//! list once the refetch has been kicked off.

#[cfg(test)]
#[path = "update_data_test.rs"]
mod update_data_test;

use assessments::csv::parse_measurements;
use assessments::validation::summarize;
use assessments::{MeasurementDraft, Measurements};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::{AuthGate, Layout};
use crate::components::measurement_fields::{MeasurementFields, MeasurementTable};
use crate::state::auth::AuthState;
use crate::state::data::DataState;
use crate::util::auth::{install_pending_navigation, install_unauth_redirect};
use crate::util::records::install_records_loader;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Enter,
    Review,
    Submit,
}

impl Step {
    const ALL: [Self; 3] = [Self::Enter, Self::Review, Self::Submit];

    fn number(self) -> u8 {
        match self {
            Self::Enter => 1,
            Self::Review => 2,
            Self::Submit => 3,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Enter => "Enter measurements",
            Self::Review => "Review",
            Self::Submit => "Submit",
        }
    }
}

/// Result of picking a CSV file.
#[derive(Clone, Debug, PartialEq)]
enum CsvStatus {
    Empty,
    Ready { name: String, rows: Vec<Measurements> },
    Failed(String),
    Uploading,
}

/// Parse a picked file into a preview or an error line.
fn csv_status(name: &str, text: &str) -> CsvStatus {
    match parse_measurements(text) {
        Ok(rows) => CsvStatus::Ready { name: name.to_owned(), rows },
        Err(err) => CsvStatus::Failed(err.to_string()),
    }
}

fn preview_text(name: &str, count: usize) -> String {
    let noun = if count == 1 { "record" } else { "records" };
    format!("{name}: {count} {noun} ready to upload")
}

/// Validate step 1 and move on, or return the alert text.
fn advance(draft: &MeasurementDraft) -> Result<Measurements, String> {
    draft.validate().map_err(|errors| summarize(&errors))
}

#[component]
pub fn UpdateDataPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = expect_context::<RwSignal<DataState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    install_records_loader(auth, data);
    let redirect = RwSignal::new(None::<String>);
    install_pending_navigation(redirect, navigate);

    let draft = RwSignal::new(MeasurementDraft::default());
    let step = RwSignal::new(Step::Enter);
    let validated = RwSignal::new(None::<Measurements>);
    let error = RwSignal::new(None::<String>);
    let csv = RwSignal::new(CsvStatus::Empty);

    let on_next = move |_| match advance(&draft.get()) {
        Ok(m) => {
            validated.set(Some(m));
            error.set(None);
            step.set(Step::Review);
        }
        Err(msg) => error.set(Some(msg)),
    };

    let on_back = move |_| step.set(Step::Enter);

    let on_reset = move |_| {
        draft.set(MeasurementDraft::default());
        validated.set(None);
        error.set(None);
        step.set(Step::Enter);
    };

    let on_submit = move |_| {
        let (Some(measurements), Some(token)) = (validated.get(), auth.get().token()) else {
            return;
        };
        step.set(Step::Submit);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_record(&token, &measurements).await {
                Ok(record) => {
                    let path = format!("/records/{}", record.id);
                    data.update(|d| d.insert(record));
                    crate::util::records::refresh(auth, data);
                    redirect.set(Some(path));
                }
                Err(err) => {
                    error.set(Some(crate::util::auth::handle_api_error(&err, auth, data)));
                    step.set(Step::Review);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (measurements, token);
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::file::selected_file(&ev) else {
                csv.set(CsvStatus::Empty);
                return;
            };
            let name = file.name();
            if let Err(msg) = crate::util::file::check_csv_file(&name, file.size()) {
                csv.set(CsvStatus::Failed(msg));
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::util::file::read_text(file).await {
                    Ok(text) => csv.set(csv_status(&name, &text)),
                    Err(msg) => csv.set(CsvStatus::Failed(msg)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_upload = move |_| {
        let CsvStatus::Ready { rows, .. } = csv.get() else {
            return;
        };
        let Some(token) = auth.get().token() else {
            return;
        };
        csv.set(CsvStatus::Uploading);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let count = rows.len();
            match crate::net::api::create_records_bulk(&token, rows).await {
                Ok(_) => {
                    log::info!("bulk import stored {count} records");
                    csv.set(CsvStatus::Empty);
                    crate::util::records::refresh(auth, data);
                    redirect.set(Some("/review-records".to_owned()));
                }
                Err(err) => {
                    csv.set(CsvStatus::Failed(crate::util::auth::handle_api_error(&err, auth, data)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (rows, token);
        }
    };

    view! {
        <AuthGate>
            <Layout>
                <div class="update-page">
                    <h1>"Update Health Data"</h1>
                    <ol class="stepper">
                        {Step::ALL
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <li class="stepper__step" class:stepper__step--active=move || step.get() == s>
                                        <span class="stepper__number">{s.number()}</span>
                                        {s.title()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                    <Show when=move || error.get().is_some()>
                        <p class="page__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    {move || match step.get() {
                        Step::Enter => {
                            view! {
                                <section class="update-page__form">
                                    <MeasurementFields draft=draft/>
                                    <div class="update-page__actions">
                                        <button class="btn" on:click=on_reset>"Reset"</button>
                                        <button class="btn btn--primary" on:click=on_next>"Next"</button>
                                    </div>
                                </section>
                            }
                                .into_any()
                        }
                        Step::Review => {
                            view! {
                                <section class="update-page__review">
                                    {validated.get().map(|m| view! { <MeasurementTable measurements=m/> })}
                                    <div class="update-page__actions">
                                        <button class="btn" on:click=on_back>"Back"</button>
                                        <button class="btn btn--primary" on:click=on_submit>"Submit"</button>
                                    </div>
                                </section>
                            }
                                .into_any()
                        }
                        Step::Submit => view! { <p class="page__loading">"Calculating your risk..."</p> }.into_any(),
                    }}
                    <section class="update-page__csv">
                        <h2>"Import from CSV"</h2>
                        <p class="update-page__hint">
                            "Columns: glucose, blood_pressure, bmi, age and optionally pregnancies, insulin, diabetic_family."
                        </p>
                        <input type="file" accept=".csv,text/csv" on:change=on_file/>
                        {move || match csv.get() {
                            CsvStatus::Empty => None,
                            CsvStatus::Ready { name, rows } => {
                                Some(
                                    view! {
                                        <p class="update-page__preview">{preview_text(&name, rows.len())}</p>
                                        <button class="btn btn--primary" on:click=on_upload>"Upload"</button>
                                    }
                                        .into_any(),
                                )
                            }
                            CsvStatus::Failed(msg) => Some(view! { <p class="page__error">{msg}</p> }.into_any()),
                            CsvStatus::Uploading => Some(view! { <p class="page__loading">"Uploading..."</p> }.into_any()),
                        }}
                    </section>
                </div>
            </Layout>
        </AuthGate>
    }
}
