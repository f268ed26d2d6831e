use super::*;

#[test]
fn absent_values_use_defaults() {
    let config = AuthConfig::from_values(None, None).expect("config");
    assert_eq!(config, AuthConfig::default());
    assert_eq!(config.poll_interval(), Duration::from_secs(30));
}

#[test]
fn api_base_is_trimmed_of_trailing_slashes() {
    let config =
        AuthConfig::from_values(Some(" https://auth.example.com/v1/ "), None).expect("config");
    assert_eq!(config.api_base, "https://auth.example.com/v1");
    assert_eq!(config.endpoint("/me"), "https://auth.example.com/v1/me");
}

#[test]
fn blank_api_base_is_rejected() {
    assert_eq!(AuthConfig::from_values(Some("   "), None), Err(ConfigError::EmptyApiBase));
}

#[test]
fn poll_interval_must_be_positive_integer() {
    assert_eq!(
        AuthConfig::from_values(None, Some("0")),
        Err(ConfigError::InvalidPollInterval { value: "0".to_owned() })
    );
    assert!(AuthConfig::from_values(None, Some("soon")).is_err());
    assert_eq!(AuthConfig::from_values(None, Some(" 5 ")).expect("config").poll_interval_secs, 5);
}

#[test]
fn default_endpoint_is_relative_to_api_root() {
    assert_eq!(AuthConfig::default().endpoint("session"), "/api/auth/session");
}

#[test]
fn config_error_messages_name_the_variable() {
    let err = ConfigError::InvalidPollInterval { value: "x".to_owned() };
    assert!(err.to_string().contains("SPENT_SESSION_POLL_SECS"));
}
