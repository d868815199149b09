use std::collections::BTreeMap;

use assessments::Measurements;

use super::*;

#[test]
fn no_record_means_no_draft_yet() {
    assert_eq!(initial_draft(None), None);
}

fn record(id: &str, glucose: u32) -> Assessment {
    Assessment {
        id: id.to_owned(),
        created_at: None,
        measurements: Measurements {
            pregnancies: 1,
            glucose,
            blood_pressure: 75,
            insulin: 0,
            bmi: 24.5,
            diabetic_family: true,
            age: 44,
        },
        predictions: BTreeMap::new(),
    }
}

#[test]
fn draft_is_prefilled_from_record() {
    let record = record("1", 110);
    let draft = initial_draft(Some(&record)).unwrap();
    assert_eq!(draft.glucose, "110");
    assert_eq!(draft.insulin, "");
    assert!(draft.diabetic_family);
    assert_eq!(draft.validate().unwrap(), record.measurements);
}

#[test]
fn same_record_keeps_edits() {
    assert_eq!(sync_draft(Some("1"), "1", Some(&record("1", 110))), DraftSync::Keep);
}

#[test]
fn switching_route_id_reloads_from_the_new_record() {
    let DraftSync::Load(draft) = sync_draft(Some("1"), "2", Some(&record("2", 150))) else {
        panic!("expected the second record to load");
    };
    assert_eq!(draft.glucose, "150");
}

#[test]
fn switching_to_an_unknown_id_clears_the_old_draft() {
    assert_eq!(sync_draft(Some("1"), "missing", None), DraftSync::Clear);
}

#[test]
fn nothing_loaded_and_no_record_waits() {
    assert_eq!(sync_draft(None, "1", None), DraftSync::Keep);
}
