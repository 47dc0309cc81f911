use super::*;

#[test]
fn default_config_matches_local_backend() {
    let config = SessionConfig::default();
    assert_eq!(config.api_base, "http://localhost:8000/api");
    assert_eq!(config.storage_key, "token");
    assert_eq!(config.expiry, ExpiryPolicy::Ignore);
}

#[test]
fn with_api_base_overrides_root() {
    let config = SessionConfig::with_api_base(Some("https://helpdesk.example.com/api"));
    assert_eq!(config.api_base, "https://helpdesk.example.com/api");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}

#[test]
fn with_api_base_ignores_blank_values() {
    assert_eq!(SessionConfig::with_api_base(Some("   ")).api_base, DEFAULT_API_BASE);
    assert_eq!(SessionConfig::with_api_base(None).api_base, DEFAULT_API_BASE);
}
