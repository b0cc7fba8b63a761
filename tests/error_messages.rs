//! Tests to ensure error messages name the stage that failed.
//!
//! These tests go through the public API (`run_export`); all of them fail
//! during validation, before any request could be sent.

use dynamo2csv::{run_export, Config, ConfigError, ScanError};

#[tokio::test]
async fn test_invalid_values_message_is_descriptive() {
    let config = Config {
        table: "users".into(),
        expression_attribute_values: Some(r#"{":v": {"Q": "x"}}"#.into()),
        ..Default::default()
    };

    let err = run_export(config).await.expect_err("bad values should fail");
    let message = format!("{:#}", err);
    assert!(message.starts_with("Invalid configuration: "), "{}", message);
    assert!(message.contains("expression attribute values is invalid"), "{}", message);
    assert!(
        err.downcast_ref::<ConfigError>().is_some(),
        "root cause should be a ConfigError"
    );
}

#[tokio::test]
async fn test_missing_table_message() {
    let err = run_export(Config::default())
        .await
        .expect_err("missing table should fail");
    assert_eq!(
        format!("{:#}", err),
        "Invalid configuration: DynamoDB table is required (--table)"
    );
}

#[test]
fn test_scan_error_messages() {
    assert_eq!(ScanError::Cancelled.to_string(), "scan cancelled");

    let decode = ScanError::Decode {
        attribute: "price".into(),
        reason: "invalid number `abc`".into(),
    };
    assert_eq!(
        decode.to_string(),
        "failed to decode attribute `price`: invalid number `abc`"
    );
}

#[test]
fn test_config_error_messages() {
    assert_eq!(
        ConfigError::InvalidMaxAttempts(0).to_string(),
        "max attempts must be at least 1 (got 0)"
    );
    assert_eq!(
        ConfigError::InvalidAttributeValues(":n: bad".into()).to_string(),
        "expression attribute values is invalid: :n: bad"
    );
}
