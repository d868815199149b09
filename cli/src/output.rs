//! Plain-text tables for terminal output.

use std::fmt::Write as _;

use assessments::stats::{self, day_label};
use assessments::{Assessment, ModelKey};

const RECORD_HEADER: [&str; 8] = ["ID", "DATE", "RISK", "PROB", "GLUCOSE", "BP", "BMI", "AGE"];
const MODEL_HEADER: [&str; 6] = ["KEY", "MODEL", "ACCURACY", "F1", "RECALL", "ROC AUC"];

/// One row per record, newest first, scored by `model`.
#[must_use]
pub fn records_table(records: &[Assessment], model: ModelKey) -> String {
    let rows: Vec<Vec<String>> = stats::chronological(records)
        .into_iter()
        .rev()
        .map(|record| {
            let prediction = record.prediction(model);
            vec![
                record.id.clone(),
                day_label(record),
                prediction.map_or_else(|| "-".to_owned(), |p| p.level.to_string()),
                prediction.map_or_else(|| "-".to_owned(), |p| format!("{:.1}%", p.percentage)),
                record.measurements.glucose.to_string(),
                record.measurements.blood_pressure.to_string(),
                format!("{:.1}", record.measurements.bmi),
                record.measurements.age.to_string(),
            ]
        })
        .collect();
    render(&RECORD_HEADER, &rows)
}

/// Every model with its evaluation metrics.
#[must_use]
pub fn models_table() -> String {
    let rows: Vec<Vec<String>> = ModelKey::ALL
        .into_iter()
        .map(|model| {
            let m = model.metrics();
            vec![
                model.as_str().to_owned(),
                model.label().to_owned(),
                format!("{:.1}%", m.accuracy),
                format!("{:.1}%", m.f1),
                format!("{:.1}%", m.recall),
                format!("{:.1}%", m.roc_auc),
            ]
        })
        .collect();
    render(&MODEL_HEADER, &rows)
}

fn render(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = header.iter().map(|h| (*h).to_owned()).collect();
    for row in std::iter::once(&header).chain(rows) {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
    out
}

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;
