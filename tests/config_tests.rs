use anyhow::Result;
use push_bridge::{
    config::{Config, LogFormat},
    models::payload::Payload,
};

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Test: An empty environment yields the defaults
#[test]
fn test_defaults_from_empty_environment() -> Result<()> {
    let config = Config::from_vars(Vec::<(String, String)>::new())?;

    assert_eq!(config.default_title, "Notification");
    assert_eq!(config.default_body, "");
    assert_eq!(config.log_format, LogFormat::Json);

    Ok(())
}

/// Test: Prefixed variables override defaults, unrelated ones are ignored
#[test]
fn test_prefixed_variables_override() -> Result<()> {
    let config = Config::from_vars(vars(&[
        ("PUSH_BRIDGE_DEFAULT_TITLE", "Alert"),
        ("PUSH_BRIDGE_DEFAULT_BODY", "Open the app"),
        ("PUSH_BRIDGE_LOG_FORMAT", "pretty"),
        ("DEFAULT_TITLE", "ignored"),
    ]))?;

    assert_eq!(config.default_title, "Alert");
    assert_eq!(config.default_body, "Open the app");
    assert_eq!(config.log_format, LogFormat::Pretty);

    let record = config.normalizer().normalize(&Payload::new());
    assert_eq!(record.title.as_deref(), Some("Alert"));
    assert_eq!(record.body.as_deref(), Some("Open the app"));

    Ok(())
}

/// Test: Unknown log format is rejected
#[test]
fn test_invalid_log_format_is_rejected() {
    let result = Config::from_vars(vars(&[("PUSH_BRIDGE_LOG_FORMAT", "xml")]));
    assert!(result.is_err());
}
