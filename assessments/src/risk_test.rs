use super::*;

#[test]
fn parse_label_accepts_api_labels() {
    assert_eq!(RiskLevel::parse_label("Low Risk"), Some(RiskLevel::Low));
    assert_eq!(RiskLevel::parse_label("Medium Risk"), Some(RiskLevel::Moderate));
    assert_eq!(RiskLevel::parse_label("High Risk"), Some(RiskLevel::High));
}

#[test]
fn parse_label_accepts_bare_words_in_any_case() {
    assert_eq!(RiskLevel::parse_label("moderate"), Some(RiskLevel::Moderate));
    assert_eq!(RiskLevel::parse_label("  HIGH "), Some(RiskLevel::High));
}

#[test]
fn parse_label_rejects_unknown_text() {
    assert_eq!(RiskLevel::parse_label("Extreme Risk"), None);
    assert_eq!(RiskLevel::parse_label(""), None);
}

#[test]
fn deserialize_reports_unknown_labels() {
    let err = serde_json::from_str::<RiskLevel>("\"Severe\"").unwrap_err();
    assert!(err.to_string().contains("unknown risk label"));
}

#[test]
fn serialize_uses_api_label_not_legend() {
    assert_eq!(serde_json::to_string(&RiskLevel::Moderate).unwrap(), "\"Medium Risk\"");
    assert_eq!(RiskLevel::Moderate.legend(), "Moderate Risk");
}

#[test]
fn api_label_parses_back_to_same_level() {
    for level in RiskLevel::ALL {
        assert_eq!(RiskLevel::parse_label(level.api_label()), Some(level));
    }
}

#[test]
fn ordering_follows_severity() {
    assert!(RiskLevel::Low < RiskLevel::Moderate);
    assert!(RiskLevel::Moderate < RiskLevel::High);
}
