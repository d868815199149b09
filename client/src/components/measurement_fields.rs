//! Input grid for the seven health measurements.
//!
//! Shared by the update-data and edit-record forms. The draft keeps raw
//! strings; validation happens on submit.

#[cfg(test)]
#[path = "measurement_fields_test.rs"]
mod measurement_fields_test;

use assessments::{MeasurementDraft, Measurements};
use assessments::validation::{
    AGE_RANGE, BLOOD_PRESSURE_RANGE, BMI_RANGE, Field, GLUCOSE_RANGE, INSULIN_RANGE, PREGNANCIES_RANGE,
};
use leptos::prelude::*;

const TEXT_FIELDS: [Field; 6] =
    [Field::Pregnancies, Field::Glucose, Field::BloodPressure, Field::Insulin, Field::Bmi, Field::Age];

fn slot(draft: &mut MeasurementDraft, field: Field) -> Option<&mut String> {
    match field {
        Field::Pregnancies => Some(&mut draft.pregnancies),
        Field::Glucose => Some(&mut draft.glucose),
        Field::BloodPressure => Some(&mut draft.blood_pressure),
        Field::Insulin => Some(&mut draft.insulin),
        Field::Bmi => Some(&mut draft.bmi),
        Field::Age => Some(&mut draft.age),
        _ => None,
    }
}

fn value_of(draft: &MeasurementDraft, field: Field) -> String {
    match field {
        Field::Pregnancies => draft.pregnancies.clone(),
        Field::Glucose => draft.glucose.clone(),
        Field::BloodPressure => draft.blood_pressure.clone(),
        Field::Insulin => draft.insulin.clone(),
        Field::Bmi => draft.bmi.clone(),
        Field::Age => draft.age.clone(),
        _ => String::new(),
    }
}

fn hint(field: Field) -> String {
    match field {
        Field::Pregnancies => range_hint(&PREGNANCIES_RANGE),
        Field::Glucose => format!("{} mg/dL", range_hint(&GLUCOSE_RANGE)),
        Field::BloodPressure => format!("{} mmHg", range_hint(&BLOOD_PRESSURE_RANGE)),
        Field::Insulin => format!("{} µU/mL, optional", range_hint(&INSULIN_RANGE)),
        Field::Bmi => range_hint(&BMI_RANGE),
        _ => format!("{} years", range_hint(&AGE_RANGE)),
    }
}

fn range_hint<T: std::fmt::Display>(range: &std::ops::RangeInclusive<T>) -> String {
    format!("{}-{}", range.start(), range.end())
}

/// Label/value pairs for a read-only measurement table.
#[must_use]
pub fn measurement_rows(m: &Measurements) -> Vec<(&'static str, String)> {
    vec![
        (Field::Pregnancies.label(), m.pregnancies.to_string()),
        (Field::Glucose.label(), format!("{} mg/dL", m.glucose)),
        (Field::BloodPressure.label(), format!("{} mmHg", m.blood_pressure)),
        (
            Field::Insulin.label(),
            if m.insulin == 0 { "Not measured".to_owned() } else { format!("{} µU/mL", m.insulin) },
        ),
        (Field::Bmi.label(), format!("{:.1}", m.bmi)),
        ("Family history of diabetes", if m.diabetic_family { "Yes" } else { "No" }.to_owned()),
        (Field::Age.label(), format!("{} years", m.age)),
    ]
}

/// Read-only table of a record's measurements.
#[component]
pub fn MeasurementTable(measurements: Measurements) -> impl IntoView {
    view! {
        <dl class="measurement-table">
            {measurement_rows(&measurements)
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <dt class="measurement-table__label">{label}</dt>
                        <dd class="measurement-table__value">{value}</dd>
                    }
                })
                .collect_view()}
        </dl>
    }
}

#[component]
pub fn MeasurementFields(
    draft: RwSignal<MeasurementDraft>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="measurement-fields">
            {TEXT_FIELDS
                .into_iter()
                .map(|field| {
                    let step = if field == Field::Bmi { "0.1" } else { "1" };
                    view! {
                        <label class="measurement-fields__field">
                            <span class="measurement-fields__label">{field.label()}</span>
                            <input
                                class="measurement-fields__input"
                                type="number"
                                step=step
                                min="0"
                                placeholder=hint(field)
                                disabled=move || disabled.get()
                                prop:value=move || draft.with(|d| value_of(d, field))
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| {
                                        if let Some(slot) = slot(d, field) {
                                            *slot = value;
                                        }
                                    });
                                }
                            />
                        </label>
                    }
                })
                .collect_view()}
            <label class="measurement-fields__field">
                <span class="measurement-fields__label">"Family history of diabetes"</span>
                <select
                    class="measurement-fields__input"
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        let yes = event_target_value(&ev) == "yes";
                        draft.update(|d| d.diabetic_family = yes);
                    }
                >
                    <option value="no" selected=move || !draft.get().diabetic_family>"No"</option>
                    <option value="yes" selected=move || draft.get().diabetic_family>"Yes"</option>
                </select>
            </label>
        </div>
    }
}
