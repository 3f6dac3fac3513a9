use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "  "), ("PORT", "")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn host_and_port_are_read() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "::1"), ("PORT", "4000")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:4000");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 5000\n")])).unwrap();
    assert_eq!(cfg.port, 5000);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));
    assert!(err.to_string().starts_with("invalid PORT \"http\""));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn hostname_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { ref value, .. } if value == "localhost"));
}
