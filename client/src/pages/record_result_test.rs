use std::collections::BTreeMap;

use assessments::{Measurements, RiskLevel};

use super::*;

#[test]
fn verdicts_list_every_model_with_missing_ones_empty() {
    let mut predictions = BTreeMap::new();
    predictions.insert(ModelKey::Svc, Prediction { level: RiskLevel::Low, percentage: 12.0 });
    let record = Assessment {
        id: "1".to_owned(),
        created_at: None,
        measurements: Measurements {
            pregnancies: 0,
            glucose: 90,
            blood_pressure: 70,
            insulin: 0,
            bmi: 22.0,
            diabetic_family: false,
            age: 30,
        },
        predictions,
    };
    let verdicts = model_verdicts(&record);
    assert_eq!(verdicts.len(), ModelKey::ALL.len());
    assert_eq!(verdicts.iter().filter(|(_, p)| p.is_some()).count(), 1);
    assert!(verdicts.contains(&(ModelKey::Svc, Some(Prediction { level: RiskLevel::Low, percentage: 12.0 }))));
}
