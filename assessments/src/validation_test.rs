use super::*;

fn valid_draft() -> MeasurementDraft {
    MeasurementDraft {
        pregnancies: "2".to_owned(),
        glucose: "120".to_owned(),
        blood_pressure: "80".to_owned(),
        insulin: "100".to_owned(),
        bmi: "25.5".to_owned(),
        diabetic_family: true,
        age: "35".to_owned(),
    }
}

fn fields(errors: &[FieldError]) -> Vec<Field> {
    errors.iter().map(|e| e.field).collect()
}

#[test]
fn valid_draft_produces_measurements() {
    let m = valid_draft().validate().unwrap();
    assert_eq!(m.glucose, 120);
    assert_eq!(m.blood_pressure, 80);
    assert!((m.bmi - 25.5).abs() < f64::EPSILON);
    assert!(m.diabetic_family);
}

#[test]
fn glucose_outside_range_is_rejected() {
    for raw in ["43", "200"] {
        let draft = MeasurementDraft { glucose: raw.to_owned(), ..valid_draft() };
        let errors = draft.validate().unwrap_err();
        assert_eq!(fields(&errors), vec![Field::Glucose]);
        assert_eq!(errors[0].message, "Glucose Level must be between 44 and 199");
    }
}

#[test]
fn glucose_range_bounds_are_inclusive() {
    for raw in ["44", "199"] {
        let draft = MeasurementDraft { glucose: raw.to_owned(), ..valid_draft() };
        assert!(draft.validate().is_ok());
    }
}

#[test]
fn every_failing_field_is_reported() {
    let draft = MeasurementDraft {
        glucose: "10".to_owned(),
        bmi: "abc".to_owned(),
        age: "-4".to_owned(),
        ..valid_draft()
    };
    let errors = draft.validate().unwrap_err();
    assert_eq!(fields(&errors), vec![Field::Glucose, Field::Bmi, Field::Age]);
    assert_eq!(errors[2].message, "Age cannot be negative");
}

#[test]
fn blank_required_field_reports_required_message() {
    let draft = MeasurementDraft { blood_pressure: "  ".to_owned(), ..valid_draft() };
    assert!(draft.missing_required());
    let errors = draft.validate().unwrap_err();
    assert_eq!(summarize(&errors), REQUIRED_FIELDS_MESSAGE);
}

#[test]
fn blank_optional_fields_default_to_zero() {
    let draft = MeasurementDraft { pregnancies: String::new(), insulin: String::new(), ..valid_draft() };
    let m = draft.validate().unwrap();
    assert_eq!(m.pregnancies, 0);
    assert_eq!(m.insulin, 0);
}

#[test]
fn zero_insulin_means_not_measured() {
    let draft = MeasurementDraft { insulin: "0".to_owned(), ..valid_draft() };
    assert_eq!(draft.validate().unwrap().insulin, 0);
    let draft = MeasurementDraft { insulin: "5".to_owned(), ..valid_draft() };
    assert_eq!(fields(&draft.validate().unwrap_err()), vec![Field::Insulin]);
}

#[test]
fn fractional_integer_fields_are_rejected() {
    let draft = MeasurementDraft { age: "35.5".to_owned(), ..valid_draft() };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors[0].message, "Age must be a whole number");
}

#[test]
fn from_measurements_round_trips_into_form() {
    let m = valid_draft().validate().unwrap();
    let draft = MeasurementDraft::from_measurements(&m);
    assert_eq!(draft.validate().unwrap(), m);
}

#[test]
fn from_measurements_leaves_unmeasured_insulin_blank() {
    let m = MeasurementDraft { insulin: String::new(), ..valid_draft() }.validate().unwrap();
    assert_eq!(MeasurementDraft::from_measurements(&m).insulin, "");
}

#[test]
fn summarize_joins_range_messages() {
    let errors = vec![
        FieldError { field: Field::Glucose, message: "a".to_owned() },
        FieldError { field: Field::Age, message: "b".to_owned() },
    ];
    assert_eq!(summarize(&errors), "a; b");
}

fn valid_signup() -> SignupDraft {
    SignupDraft {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        date_of_birth: "1990-12-10".to_owned(),
        phone_number: "(555) 123-4567".to_owned(),
        username: "ada_l".to_owned(),
        password: "analytic1".to_owned(),
        confirm_password: "analytic1".to_owned(),
        accept_terms: true,
    }
}

#[test]
fn valid_signup_passes() {
    assert_eq!(valid_signup().validate(), Ok(()));
}

#[test]
fn signup_rejects_password_mismatch() {
    let draft = SignupDraft { confirm_password: "analytic2".to_owned(), ..valid_signup() };
    let err = draft.validate().unwrap_err();
    assert_eq!(err.field, Field::ConfirmPassword);
    assert_eq!(err.message, "Passwords do not match");
}

#[test]
fn signup_requires_terms() {
    let draft = SignupDraft { accept_terms: false, ..valid_signup() };
    assert_eq!(draft.validate().unwrap_err().field, Field::AcceptTerms);
}

#[test]
fn signup_requires_names() {
    let draft = SignupDraft { last_name: " ".to_owned(), ..valid_signup() };
    assert_eq!(draft.validate().unwrap_err().message, "Last Name is required");
}

#[test]
fn email_validation_cases() {
    assert!(validate_email("user@example.com").is_ok());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("user@").is_err());
    assert!(validate_email("userexample.com").is_err());
    assert_eq!(validate_email("user@localhost").unwrap_err().message, "Invalid email domain");
}

#[test]
fn password_strength_cases() {
    assert!(validate_password_strength("short1").is_err());
    assert!(validate_password_strength("lettersonly").is_err());
    assert!(validate_password_strength("12345678").is_err());
    assert!(validate_password_strength("letters123").is_ok());
}

#[test]
fn phone_validation_cases() {
    assert!(validate_phone_number("555-123-4567").is_ok());
    assert!(validate_phone_number("12345").is_err());
    assert!(validate_phone_number("555-CALL-NOW").is_err());
    assert!(validate_phone_number("1234567890123456").is_err());
}

#[test]
fn username_validation_cases() {
    assert!(validate_username("ab").is_err());
    assert!(validate_username(&"a".repeat(31)).is_err());
    assert!(validate_username("bad-name").is_err());
    assert!(validate_username("good_name1").is_ok());
}
