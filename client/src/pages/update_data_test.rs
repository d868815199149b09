use super::*;

#[test]
fn steps_are_numbered_in_order() {
    let numbers: Vec<u8> = Step::ALL.into_iter().map(Step::number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(Step::Review.title(), "Review");
}

#[test]
fn advance_reports_required_fields_once() {
    let draft = MeasurementDraft { glucose: "120".to_owned(), ..MeasurementDraft::default() };
    assert_eq!(advance(&draft), Err("Please fill in all required fields".to_owned()));
}

#[test]
fn advance_returns_typed_measurements() {
    let draft = MeasurementDraft {
        glucose: "120".to_owned(),
        blood_pressure: "80".to_owned(),
        bmi: "25.5".to_owned(),
        age: "35".to_owned(),
        ..MeasurementDraft::default()
    };
    let m = advance(&draft).unwrap();
    assert_eq!(m.glucose, 120);
    assert_eq!(m.pregnancies, 0);
}

#[test]
fn csv_status_previews_rows() {
    let status = csv_status("data.csv", "glucose,blood_pressure,bmi,age\n120,80,25.5,35\n99,70,22.0,40\n");
    let CsvStatus::Ready { name, rows } = status else {
        panic!("expected ready status");
    };
    assert_eq!(preview_text(&name, rows.len()), "data.csv: 2 records ready to upload");
}

#[test]
fn csv_status_surfaces_line_error() {
    let status = csv_status("data.csv", "glucose,blood_pressure,bmi,age\n500,80,25.5,35\n");
    assert_eq!(
        status,
        CsvStatus::Failed("line 2: Glucose Level must be between 44 and 199".to_owned())
    );
}

#[test]
fn preview_text_singular() {
    assert_eq!(preview_text("one.csv", 1), "one.csv: 1 record ready to upload");
}
