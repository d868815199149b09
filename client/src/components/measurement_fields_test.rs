use super::*;

fn sample(insulin: u32, family: bool) -> Measurements {
    Measurements {
        pregnancies: 2,
        glucose: 120,
        blood_pressure: 80,
        insulin,
        bmi: 25.45,
        diabetic_family: family,
        age: 35,
    }
}

#[test]
fn rows_format_units_and_flags() {
    let rows = measurement_rows(&sample(100, true));
    assert_eq!(rows[1], ("Glucose Level", "120 mg/dL".to_owned()));
    assert_eq!(rows[3], ("Insulin Level", "100 µU/mL".to_owned()));
    assert_eq!(rows[5].1, "Yes");
    assert_eq!(rows[6].1, "35 years");
}

#[test]
fn zero_insulin_reads_as_not_measured() {
    assert_eq!(measurement_rows(&sample(0, false))[3].1, "Not measured");
}

#[test]
fn draft_accessors_cover_every_text_field() {
    let mut draft = MeasurementDraft::default();
    for (i, field) in TEXT_FIELDS.into_iter().enumerate() {
        if let Some(slot) = slot(&mut draft, field) {
            *slot = i.to_string();
        }
    }
    assert_eq!(value_of(&draft, Field::Pregnancies), "0");
    assert_eq!(value_of(&draft, Field::Age), "5");
    assert_eq!(draft.bmi, "4");
}
