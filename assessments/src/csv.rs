//! CSV import of measurement rows for bulk upload.
//!
//! The whole file is parsed and validated before anything is sent: a single
//! bad row rejects the import, and the error names the line so the user can
//! fix the file and retry.

#[cfg(test)]
#[path = "csv_test.rs"]
mod csv_test;

use crate::record::Measurements;
use crate::validation::{MeasurementDraft, summarize};

/// Largest accepted upload, in bytes.
pub const MAX_CSV_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CsvError {
    #[error("CSV file is larger than 10MB")]
    TooLarge,
    #[error("CSV file is empty")]
    Empty,
    #[error("CSV file has a header but no data rows")]
    NoRows,
    #[error("CSV header is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("line {line}: {message}")]
    Row { line: usize, message: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Column {
    Pregnancies,
    Glucose,
    BloodPressure,
    Insulin,
    Bmi,
    DiabeticFamily,
    Age,
}

impl Column {
    fn from_header(raw: &str) -> Option<Self> {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "pregnancies" => Some(Self::Pregnancies),
            "glucose" => Some(Self::Glucose),
            "bloodpressure" => Some(Self::BloodPressure),
            "insulin" => Some(Self::Insulin),
            "bmi" => Some(Self::Bmi),
            "diabeticfamily" | "diabetesfamily" | "familyhistory" => Some(Self::DiabeticFamily),
            "age" => Some(Self::Age),
            _ => None,
        }
    }
}

const REQUIRED_COLUMNS: [(Column, &str); 4] = [
    (Column::Glucose, "glucose"),
    (Column::BloodPressure, "blood_pressure"),
    (Column::Bmi, "bmi"),
    (Column::Age, "age"),
];

/// Parse and validate a CSV document into measurements.
///
/// # Errors
///
/// Returns [`CsvError`] for oversize input, a missing header column, no data
/// rows, or the first row that fails to parse or validate.
pub fn parse_measurements(input: &str) -> Result<Vec<Measurements>, CsvError> {
    if input.len() > MAX_CSV_BYTES {
        return Err(CsvError::TooLarge);
    }

    let mut lines = input
        .trim_start_matches('\u{feff}')
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Err(CsvError::Empty);
    };
    let columns: Vec<Option<Column>> = split_record(header)
        .map_err(|message| CsvError::Row { line: header_line, message })?
        .iter()
        .map(|h| Column::from_header(h))
        .collect();
    for (required, name) in REQUIRED_COLUMNS {
        if !columns.contains(&Some(required)) {
            return Err(CsvError::MissingColumn(name));
        }
    }

    let mut rows = Vec::new();
    for (line, text) in lines {
        let fields = split_record(text).map_err(|message| CsvError::Row { line, message })?;
        if fields.len() != columns.len() {
            return Err(CsvError::Row {
                line,
                message: format!("expected {} fields, found {}", columns.len(), fields.len()),
            });
        }
        let draft = row_draft(&columns, fields).map_err(|message| CsvError::Row { line, message })?;
        let measurements = draft
            .validate()
            .map_err(|errors| CsvError::Row { line, message: summarize(&errors) })?;
        rows.push(measurements);
    }

    if rows.is_empty() {
        return Err(CsvError::NoRows);
    }
    Ok(rows)
}

fn row_draft(columns: &[Option<Column>], fields: Vec<String>) -> Result<MeasurementDraft, String> {
    let mut draft = MeasurementDraft::default();
    for (column, value) in columns.iter().zip(fields) {
        match column {
            Some(Column::Pregnancies) => draft.pregnancies = value,
            Some(Column::Glucose) => draft.glucose = value,
            Some(Column::BloodPressure) => draft.blood_pressure = value,
            Some(Column::Insulin) => draft.insulin = value,
            Some(Column::Bmi) => draft.bmi = value,
            Some(Column::Age) => draft.age = value,
            Some(Column::DiabeticFamily) => draft.diabetic_family = parse_flag(&value)?,
            None => {}
        }
    }
    Ok(draft)
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "no" | "false" | "n" => Ok(false),
        "1" | "yes" | "true" | "y" => Ok(true),
        other => Err(format!("family history must be yes/no or 1/0, got `{other}`")),
    }
}

/// Split one CSV record, honouring double quotes and `""` escapes.
fn split_record(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ('"', false) if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            (',', false) => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if in_quotes {
        return Err("unterminated quoted field".to_owned());
    }
    fields.push(current);
    Ok(fields.into_iter().map(|f| f.trim().to_owned()).collect())
}
