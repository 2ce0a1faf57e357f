use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", " 8081 "), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8081");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn invalid_port_is_an_error() {
    for raw in ["http", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()), "PORT={raw:?}");
    }
}

#[test]
fn invalid_bind_addr_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".to_owned()));
    assert!(err.to_string().contains("BIND_ADDR"));
}

#[test]
fn ipv6_bind_addr_accepted() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "::1"), ("PORT", "4000")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:4000");
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "3456");
        std::env::remove_var("BIND_ADDR");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 3456);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    unsafe { std::env::remove_var("PORT") };
}
