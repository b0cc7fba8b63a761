//! End-to-end export run: validate, connect, scan, write.

use anyhow::{Context, Result};
use log::warn;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::export::{CsvExporter, ExportSummary};
use crate::initialization::{
    cancel_on_ctrl_c, init_dynamodb_client, open_output, shutdown_gracefully,
};
use crate::source::DynamoDbSource;

/// Runs one export as described by `config`.
///
/// The filter flags are validated before the output is opened or any AWS
/// configuration is loaded, so bad input never produces output bytes or
/// network traffic.
///
/// # Errors
///
/// Returns an error naming the failed stage: configuration, output setup,
/// scanning, decoding, or writing.
pub async fn run_export(config: Config) -> Result<ExportSummary> {
    let filter = config.scan_filter().context("Invalid configuration")?;

    if let Some(columns) = &config.columns {
        warn!("--columns is not supported yet, ignoring `{}`", columns);
    }

    let output = open_output(config.output.as_deref())?;
    let client = init_dynamodb_client(&config).await;
    let exporter = CsvExporter::new(DynamoDbSource::new(client), filter)
        .with_header_mode(config.header_from);

    let cancel = CancellationToken::new();
    let signal_task = cancel_on_ctrl_c(cancel.clone());
    let result = exporter.export(output, &cancel).await;
    shutdown_gracefully(cancel, signal_task).await;

    result.context("Export failed")
}
