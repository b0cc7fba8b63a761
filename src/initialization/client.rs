//! DynamoDB client initialization.
//!
//! The client is built once from the command-line options and handed to
//! [`DynamoDbSource`](crate::source::DynamoDbSource); nothing holds it globally.

use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use log::debug;

use crate::config::Config;

/// Initializes the DynamoDB client.
///
/// Credentials and region come from the standard AWS provider chain
/// (environment, shared config/credentials files, SSO, instance metadata),
/// narrowed by:
/// - `--profile`: shared-config profile name
/// - `--region`: explicit region
/// - `--endpoint-url`: custom endpoint such as DynamoDB Local
/// - `--max-attempts`: SDK retry attempts per request
///
/// Loading the configuration does not contact DynamoDB.
pub async fn init_dynamodb_client(config: &Config) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts));

    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    debug!(
        "DynamoDB client ready (region: {})",
        sdk_config
            .region()
            .map(|r| r.as_ref().to_string())
            .unwrap_or_else(|| "unset".to_string())
    );
    Client::new(&sdk_config)
}
