use super::*;

#[test]
fn parses_snake_case_header() {
    let input = "pregnancies,glucose,blood_pressure,insulin,bmi,diabetic_family,age\n\
                 2,120,80,100,25.5,1,35\n\
                 0,95,70,,22.1,0,28\n";
    let rows = parse_measurements(input).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].glucose, 120);
    assert!(rows[0].diabetic_family);
    assert_eq!(rows[1].insulin, 0);
    assert!(!rows[1].diabetic_family);
}

#[test]
fn dataset_style_header_ignores_unknown_columns() {
    let input = "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome\r\n\
                 6,148,72,35,0,33.6,0.627,50,1\r\n";
    let rows = parse_measurements(input).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].pregnancies, 6);
    assert_eq!(rows[0].blood_pressure, 72);
    assert_eq!(rows[0].age, 50);
    assert!(!rows[0].diabetic_family);
}

#[test]
fn bad_row_rejects_whole_file_with_line_number() {
    let input = "glucose,blood_pressure,bmi,age\n\
                 120,80,25.5,35\n\
                 \n\
                 500,80,25.5,35\n";
    let err = parse_measurements(input).unwrap_err();
    assert_eq!(
        err,
        CsvError::Row { line: 4, message: "Glucose Level must be between 44 and 199".to_owned() }
    );
}

#[test]
fn missing_required_column_is_reported() {
    let err = parse_measurements("glucose,bmi,age\n120,25.5,35\n").unwrap_err();
    assert_eq!(err, CsvError::MissingColumn("blood_pressure"));
}

#[test]
fn header_only_file_has_no_rows() {
    assert_eq!(parse_measurements("glucose,blood_pressure,bmi,age\n"), Err(CsvError::NoRows));
}

#[test]
fn empty_file_is_rejected() {
    assert_eq!(parse_measurements("  \n\n"), Err(CsvError::Empty));
}

#[test]
fn field_count_mismatch_is_a_row_error() {
    let err = parse_measurements("glucose,blood_pressure,bmi,age\n120,80,25.5\n").unwrap_err();
    assert_eq!(err, CsvError::Row { line: 2, message: "expected 4 fields, found 3".to_owned() });
}

#[test]
fn quoted_fields_and_family_words() {
    let input = "\"Glucose\",\"Blood Pressure\",\"BMI\",\"Age\",\"Family History\"\n\
                 \"120\",\"80\",\"25.5\",\"35\",\"yes\"\n";
    let rows = parse_measurements(input).unwrap();
    assert!(rows[0].diabetic_family);
}

#[test]
fn invalid_family_flag_is_a_row_error() {
    let input = "glucose,blood_pressure,bmi,age,diabetic_family\n120,80,25.5,35,maybe\n";
    let err = parse_measurements(input).unwrap_err();
    assert!(matches!(err, CsvError::Row { line: 2, .. }));
}

#[test]
fn split_record_handles_escaped_quotes() {
    assert_eq!(
        split_record(r#"a,"b ""quoted"", c",d"#).unwrap(),
        vec!["a".to_owned(), "b \"quoted\", c".to_owned(), "d".to_owned()]
    );
}

#[test]
fn split_record_rejects_unterminated_quote() {
    assert!(split_record("\"open,1").is_err());
}

#[test]
fn oversize_input_is_rejected() {
    let input = "a".repeat(MAX_CSV_BYTES + 1);
    assert_eq!(parse_measurements(&input), Err(CsvError::TooLarge));
}

#[test]
fn byte_order_mark_before_quoted_header_is_ignored() {
    let input = "\u{feff}\"Glucose\",\"BloodPressure\",\"BMI\",\"Age\"\r\n120,70,30.1,40\r\n";
    let rows = parse_measurements(input).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].glucose, 120);
    assert_eq!(rows[0].blood_pressure, 70);
}
