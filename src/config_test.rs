use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_to_loopback() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, PortalConfig::default());
    assert_eq!(cfg.base_url, "http://localhost:3000");
    assert_eq!(cfg.request_timeout, Duration::from_secs(30));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(10));
}

#[test]
fn from_lookup_trims_trailing_slash() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[("PORTAL_API_BASE_URL", "https://api.campus.test/")])).unwrap();
    assert_eq!(cfg.base_url, "https://api.campus.test");
}

#[test]
fn from_lookup_parses_timeouts() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[
        ("PORTAL_REQUEST_TIMEOUT_SECS", "5"),
        ("PORTAL_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.request_timeout, Duration::from_secs(5));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(2));
}

#[test]
fn from_lookup_blank_base_url_uses_default() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[("PORTAL_API_BASE_URL", "   ")])).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_lookup_rejects_non_http_base_url() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_API_BASE_URL", "ftp://files")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://files".to_owned()));
}

#[test]
fn from_lookup_rejects_scheme_without_host() {
    assert!(PortalConfig::from_lookup(lookup_from(&[("PORTAL_API_BASE_URL", "http://")])).is_err());
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_REQUEST_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(err.to_string().contains("PORTAL_REQUEST_TIMEOUT_SECS"));
}

#[test]
fn from_lookup_rejects_garbage_timeout() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_CONNECT_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber { key: "PORTAL_CONNECT_TIMEOUT_SECS", value: "soon".to_owned() }
    );
}

#[test]
fn with_base_url_keeps_timeouts() {
    let cfg = PortalConfig::default().with_base_url("http://10.0.0.5:8000/").unwrap();
    assert_eq!(cfg.base_url, "http://10.0.0.5:8000");
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
}
