use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_parsed_and_base_trimmed() {
    let cfg = Config::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("API_BASE_URL", "https://risk.example.com/"),
        ("SITE_ROOT", "/srv/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.api_base_url, "https://risk.example.com");
    assert_eq!(cfg.site_root.as_deref(), Some("/srv/site"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = Config::from_lookup(lookup(&[("PORT", "  "), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn malformed_values_are_rejected() {
    assert_eq!(
        Config::from_lookup(lookup(&[("PORT", "99999")])),
        Err(ConfigError::InvalidPort("99999".to_owned()))
    );
    assert_eq!(
        Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
        Err(ConfigError::InvalidBindAddr("localhost".to_owned()))
    );
    assert_eq!(
        Config::from_lookup(lookup(&[("API_BASE_URL", "ftp://x")])),
        Err(ConfigError::InvalidApiBase("ftp://x".to_owned()))
    );
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "4321");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("API_BASE_URL");
        std::env::remove_var("SITE_ROOT");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, 4321);

    unsafe { std::env::remove_var("PORT") };
}
