//! Form-layer validation for measurements and account details.
//!
//! These are UI guards only; the API remains the authority on what it stores.
//! Measurement ranges follow the observed ranges of the training dataset so
//! that submitted values stay inside what the models were fitted on.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;
use std::ops::RangeInclusive;

use crate::record::Measurements;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

pub const PREGNANCIES_RANGE: RangeInclusive<u32> = 0..=17;
pub const GLUCOSE_RANGE: RangeInclusive<u32> = 44..=199;
pub const BLOOD_PRESSURE_RANGE: RangeInclusive<u32> = 24..=122;
pub const INSULIN_RANGE: RangeInclusive<u32> = 14..=846;
pub const BMI_RANGE: RangeInclusive<f64> = 18.2..=67.1;
pub const AGE_RANGE: RangeInclusive<u32> = 21..=81;

/// Identifies an input on the measurement or signup forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Pregnancies,
    Glucose,
    BloodPressure,
    Insulin,
    Bmi,
    Age,
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    PhoneNumber,
    Username,
    Password,
    ConfirmPassword,
    AcceptTerms,
}

impl Field {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pregnancies => "Number of Pregnancies",
            Self::Glucose => "Glucose Level",
            Self::BloodPressure => "Diastolic Blood Pressure",
            Self::Insulin => "Insulin Level",
            Self::Bmi => "BMI",
            Self::Age => "Age",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::DateOfBirth => "Date of Birth",
            Self::PhoneNumber => "Phone Number",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::AcceptTerms => "Privacy & Security terms",
        }
    }
}

/// A single rejected input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Raw measurement form input, one string per text box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasurementDraft {
    pub pregnancies: String,
    pub glucose: String,
    pub blood_pressure: String,
    pub insulin: String,
    pub bmi: String,
    pub diabetic_family: bool,
    pub age: String,
}

impl MeasurementDraft {
    /// Pre-fill the form from a stored record.
    #[must_use]
    pub fn from_measurements(m: &Measurements) -> Self {
        Self {
            pregnancies: m.pregnancies.to_string(),
            glucose: m.glucose.to_string(),
            blood_pressure: m.blood_pressure.to_string(),
            insulin: if m.insulin == 0 { String::new() } else { m.insulin.to_string() },
            bmi: m.bmi.to_string(),
            diabetic_family: m.diabetic_family,
            age: m.age.to_string(),
        }
    }

    /// True when any required field is blank.
    #[must_use]
    pub fn missing_required(&self) -> bool {
        [&self.glucose, &self.blood_pressure, &self.bmi, &self.age]
            .into_iter()
            .any(|v| v.trim().is_empty())
    }

    /// Validate every field, returning typed measurements or all failures.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per invalid input. Blank required fields are
    /// reported with [`REQUIRED_FIELDS_MESSAGE`].
    pub fn validate(&self) -> Result<Measurements, Vec<FieldError>> {
        let mut errors = Vec::new();

        let pregnancies = optional_int(Field::Pregnancies, &self.pregnancies, &PREGNANCIES_RANGE, false, &mut errors);
        let glucose = required_int(Field::Glucose, &self.glucose, &GLUCOSE_RANGE, &mut errors);
        let blood_pressure = required_int(Field::BloodPressure, &self.blood_pressure, &BLOOD_PRESSURE_RANGE, &mut errors);
        let insulin = optional_int(Field::Insulin, &self.insulin, &INSULIN_RANGE, true, &mut errors);
        let bmi = required_float(Field::Bmi, &self.bmi, &BMI_RANGE, &mut errors);
        let age = required_int(Field::Age, &self.age, &AGE_RANGE, &mut errors);

        match (pregnancies, glucose, blood_pressure, insulin, bmi, age) {
            (Some(pregnancies), Some(glucose), Some(blood_pressure), Some(insulin), Some(bmi), Some(age))
                if errors.is_empty() =>
            {
                Ok(Measurements {
                    pregnancies,
                    glucose,
                    blood_pressure,
                    insulin,
                    bmi,
                    diabetic_family: self.diabetic_family,
                    age,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Collapse a list of field errors into the single line shown in alerts.
#[must_use]
pub fn summarize(errors: &[FieldError]) -> String {
    if errors.iter().any(|e| e.message == REQUIRED_FIELDS_MESSAGE) {
        return REQUIRED_FIELDS_MESSAGE.to_owned();
    }
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

fn range_message<T: fmt::Display>(field: Field, range: &RangeInclusive<T>) -> String {
    format!("{} must be between {} and {}", field.label(), range.start(), range.end())
}

fn parse_int(field: Field, raw: &str, errors: &mut Vec<FieldError>) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        errors.push(FieldError::new(field, format!("{} cannot be negative", field.label())));
        return None;
    }
    match trimmed.parse::<u32>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(FieldError::new(field, format!("{} must be a whole number", field.label())));
            None
        }
    }
}

fn required_int(field: Field, raw: &str, range: &RangeInclusive<u32>, errors: &mut Vec<FieldError>) -> Option<u32> {
    if raw.trim().is_empty() {
        errors.push(FieldError::new(field, REQUIRED_FIELDS_MESSAGE));
        return None;
    }
    let value = parse_int(field, raw, errors)?;
    if !range.contains(&value) {
        errors.push(FieldError::new(field, range_message(field, range)));
        return None;
    }
    Some(value)
}

/// Blank parses as zero. With `zero_means_absent`, an explicit zero also
/// bypasses the range check.
fn optional_int(
    field: Field,
    raw: &str,
    range: &RangeInclusive<u32>,
    zero_means_absent: bool,
    errors: &mut Vec<FieldError>,
) -> Option<u32> {
    if raw.trim().is_empty() {
        return Some(0);
    }
    let value = parse_int(field, raw, errors)?;
    if zero_means_absent && value == 0 {
        return Some(0);
    }
    if !range.contains(&value) {
        errors.push(FieldError::new(field, range_message(field, range)));
        return None;
    }
    Some(value)
}

fn required_float(field: Field, raw: &str, range: &RangeInclusive<f64>, errors: &mut Vec<FieldError>) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, REQUIRED_FIELDS_MESSAGE));
        return None;
    }
    let Ok(value) = trimmed.parse::<f64>() else {
        errors.push(FieldError::new(field, format!("{} must be a number", field.label())));
        return None;
    };
    if value.is_sign_negative() {
        errors.push(FieldError::new(field, format!("{} cannot be negative", field.label())));
        return None;
    }
    if !value.is_finite() || !range.contains(&value) {
        errors.push(FieldError::new(field, range_message(field, range)));
        return None;
    }
    Some(value)
}

// =============================================================================
// ACCOUNT DETAILS
// =============================================================================

/// Raw signup form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl SignupDraft {
    /// Validate the signup form; returns the first failure in form order.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] encountered.
    pub fn validate(&self) -> Result<(), FieldError> {
        for (field, value) in [
            (Field::FirstName, &self.first_name),
            (Field::LastName, &self.last_name),
            (Field::DateOfBirth, &self.date_of_birth),
        ] {
            if value.trim().is_empty() {
                return Err(FieldError::new(field, format!("{} is required", field.label())));
            }
        }
        validate_email(&self.email)?;
        validate_phone_number(&self.phone_number)?;
        validate_username(&self.username)?;
        validate_password_strength(&self.password)?;
        if self.password != self.confirm_password {
            return Err(FieldError::new(Field::ConfirmPassword, "Passwords do not match"));
        }
        if !self.accept_terms {
            return Err(FieldError::new(Field::AcceptTerms, "Please accept the Privacy & Security terms"));
        }
        Ok(())
    }
}

/// # Errors
///
/// Rejects addresses without exactly one `@`, an empty local part, or an
/// undotted domain.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = email.trim();
    let invalid = || FieldError::new(Field::Email, "Invalid email format");
    let (local, domain) = email.rsplit_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || local.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(FieldError::new(Field::Email, "Invalid email domain"));
    }
    Ok(())
}

/// # Errors
///
/// Requires at least 8 characters mixing letters and digits.
pub fn validate_password_strength(password: &str) -> Result<(), FieldError> {
    if password.chars().count() < 8 {
        return Err(FieldError::new(Field::Password, "Password must be at least 8 characters long"));
    }
    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(FieldError::new(Field::Password, "Password must contain both letters and numbers"));
    }
    Ok(())
}

/// # Errors
///
/// Requires 10-15 digits once `-`, spaces and parentheses are stripped.
pub fn validate_phone_number(phone: &str) -> Result<(), FieldError> {
    let cleaned: String = phone.chars().filter(|c| !matches!(c, '-' | ' ' | '(' | ')')).collect();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::new(Field::PhoneNumber, "Phone number must contain only digits"));
    }
    if !(10..=15).contains(&cleaned.len()) {
        return Err(FieldError::new(Field::PhoneNumber, "Phone number must be between 10 and 15 digits"));
    }
    Ok(())
}

/// # Errors
///
/// Requires 3-30 characters drawn from letters, digits and `_`.
pub fn validate_username(username: &str) -> Result<(), FieldError> {
    let len = username.chars().count();
    if len < 3 {
        return Err(FieldError::new(Field::Username, "Username must be at least 3 characters long"));
    }
    if len > 30 {
        return Err(FieldError::new(Field::Username, "Username must be at most 30 characters long"));
    }
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(FieldError::new(
            Field::Username,
            "Username can only contain letters, numbers, and underscores",
        ));
    }
    Ok(())
}
