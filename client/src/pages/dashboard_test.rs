use super::*;

#[test]
fn empty_summary_renders_dashes() {
    let summary = Summary { latest_risk_percentage: None, total: 0, average_bmi: None, latest_date: None };
    assert_eq!(stat_values(&summary), ["-", "0", "-", "-"].map(str::to_owned));
}

#[test]
fn populated_summary_formats_each_card() {
    let summary = Summary {
        latest_risk_percentage: Some(42.27),
        total: 3,
        average_bmi: Some(26.333),
        latest_date: Some("05/04/2024".to_owned()),
    };
    assert_eq!(stat_values(&summary), ["42.3%", "3", "26.3", "05/04/2024"].map(str::to_owned));
}

#[test]
fn unscored_latest_record_shows_dash_not_zero() {
    let summary = Summary {
        latest_risk_percentage: None,
        total: 2,
        average_bmi: Some(25.0),
        latest_date: Some("01/01/2030".to_owned()),
    };
    assert_eq!(stat_values(&summary)[0], "-");
}
