use std::collections::BTreeMap;

use assessments::{Measurements, Prediction, RiskLevel};

use super::*;

fn record(id: &str, created_at: &str, scored: bool) -> Assessment {
    let mut predictions = BTreeMap::new();
    if scored {
        predictions.insert(ModelKey::Xgboost, Prediction { level: RiskLevel::High, percentage: 71.25 });
    }
    Assessment {
        id: id.to_owned(),
        created_at: Some(created_at.to_owned()),
        measurements: Measurements {
            pregnancies: 0,
            glucose: 150,
            blood_pressure: 85,
            insulin: 0,
            bmi: 31.0,
            diabetic_family: true,
            age: 52,
        },
        predictions,
    }
}

#[test]
fn records_table_lists_newest_first() {
    let table = records_table(
        &[record("old", "2024-01-02T00:00:00", true), record("new", "2024-05-06T00:00:00", true)],
        ModelKey::Xgboost,
    );
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].starts_with("new"));
    assert!(lines[1].contains("06/05/2024"));
    assert!(lines[1].contains("High"));
    assert!(lines[1].contains("71.2%") || lines[1].contains("71.3%"));
    assert!(lines[2].starts_with("old"));
}

#[test]
fn unscored_model_shows_dashes() {
    let table = records_table(&[record("1", "2024-01-02T00:00:00", false)], ModelKey::Xgboost);
    let row = table.lines().nth(1).unwrap();
    let cells: Vec<&str> = row.split_whitespace().collect();
    assert_eq!(cells[2], "-");
    assert_eq!(cells[3], "-");
}

#[test]
fn columns_are_aligned_to_widest_cell() {
    let table = records_table(&[record("abcdefgh", "2024-01-02T00:00:00", true)], ModelKey::Xgboost);
    let mut lines = table.lines();
    let header = lines.next().unwrap();
    let row = lines.next().unwrap();
    assert_eq!(header.find("DATE"), row.find("02/01/2024"));
}

#[test]
fn models_table_has_every_model() {
    let table = models_table();
    assert_eq!(table.lines().count(), ModelKey::ALL.len() + 1);
    assert!(table.contains("xgboost"));
    assert!(table.contains("90.9%"));
}
