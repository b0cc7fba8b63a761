//! Configuration constants.

/// Default number of attempts the AWS SDK makes per scan request, counting
/// the first one. Throttled or transiently failing requests are retried by
/// the SDK transport; the exporter itself never retries.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Binary and log target name.
pub const APP_NAME: &str = "dynamo2csv";
