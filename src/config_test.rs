use super::*;

#[test]
fn default_points_at_localhost() {
    assert_eq!(PanelConfig::default().api_url, "http://localhost:5000");
}

#[test]
fn set_api_url_strips_one_trailing_slash() {
    let mut config = PanelConfig::default();
    config.set_api_url("https://poc.example.com/").unwrap();
    assert_eq!(config.api_url, "https://poc.example.com");
}

#[test]
fn set_api_url_trims_whitespace() {
    let mut config = PanelConfig::default();
    config.set_api_url("  http://10.0.0.2:5000  ").unwrap();
    assert_eq!(config.api_url, "http://10.0.0.2:5000");
}

#[test]
fn empty_api_url_is_rejected_and_leaves_config_unchanged() {
    let mut config = PanelConfig::default();
    assert_eq!(config.set_api_url("   "), Err(ConfigError::EmptyApiUrl));
    assert_eq!(config.api_url, "http://localhost:5000");
}

#[test]
fn endpoint_joins_base_and_path() {
    let config = PanelConfig::default();
    assert_eq!(
        config.endpoint("/api/status"),
        "http://localhost:5000/api/status"
    );
    assert_eq!(config.endpoint("webhook"), "http://localhost:5000/webhook");
}

#[test]
fn stored_round_trip_uses_camel_case_key() {
    let config = PanelConfig {
        api_url: "http://box:5000".to_owned(),
    };
    let stored = config.to_stored();
    assert_eq!(stored, r#"{"apiUrl":"http://box:5000"}"#);
    assert_eq!(PanelConfig::from_stored(&stored), Some(config));
}

#[test]
fn corrupt_stored_record_is_none() {
    assert_eq!(PanelConfig::from_stored("not json"), None);
    assert_eq!(PanelConfig::from_stored(r#"{"wrong":1}"#), None);
}
