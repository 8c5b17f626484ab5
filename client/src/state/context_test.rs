use super::*;

#[test]
fn build_config_uses_baked_base_url() {
    let config = build_config(Some("https://portal.example.edu/"));
    assert_eq!(config.base_url, "https://portal.example.edu");
}

#[test]
fn build_config_falls_back_on_missing_or_invalid_url() {
    assert_eq!(build_config(None), PortalConfig::default());
    assert_eq!(build_config(Some("ftp://nope")), PortalConfig::default());
}
