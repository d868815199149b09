use super::*;

#[test]
fn blank_or_missing_base_uses_default() {
    assert_eq!(normalize_api_base(None), DEFAULT_API_BASE);
    assert_eq!(normalize_api_base(Some("  ")), DEFAULT_API_BASE);
}

#[test]
fn configured_base_is_trimmed() {
    assert_eq!(normalize_api_base(Some(" https://api.example.com/ ")), "https://api.example.com");
}
