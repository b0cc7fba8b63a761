//! CSV export functionality.
//!
//! Drives the scan loop against a [`RecordSource`] and streams every record to
//! a CSV writer as soon as its page arrives. The column set is fixed by the
//! first record seen; later records are projected onto it.

use std::io::Write;

use csv::Writer;
use log::{debug, info};
use tokio_util::sync::CancellationToken;

use super::format::format_row;
use super::types::{ExportSummary, HeaderMode};
use crate::error_handling::ExportError;
use crate::source::{RecordSource, ScanFilter};

/// Streams a filtered scan to CSV.
///
/// # Example
///
/// ```no_run
/// use dynamo2csv::export::CsvExporter;
/// use dynamo2csv::source::{DynamoDbSource, ScanFilter};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example(client: aws_sdk_dynamodb::Client) -> Result<(), Box<dyn std::error::Error>> {
/// let exporter = CsvExporter::new(DynamoDbSource::new(client), ScanFilter::new("users"));
/// let summary = exporter
///     .export(std::io::stdout(), &CancellationToken::new())
///     .await?;
/// eprintln!("{} rows", summary.records_written);
/// # Ok(())
/// # }
/// ```
pub struct CsvExporter<S> {
    source: S,
    filter: ScanFilter,
    header_mode: HeaderMode,
}

impl<S: RecordSource> CsvExporter<S> {
    /// Creates an exporter that derives its header from the first record.
    pub fn new(source: S, filter: ScanFilter) -> Self {
        Self {
            source,
            filter,
            header_mode: HeaderMode::default(),
        }
    }

    /// Overrides how the header row is derived.
    pub fn with_header_mode(mut self, header_mode: HeaderMode) -> Self {
        self.header_mode = header_mode;
        self
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Scans every page and writes the CSV to `output`.
    ///
    /// No header is written when the scan yields no records at all. The
    /// writer is flushed before returning, on success and on error alike, so
    /// whatever was written stays well-formed.
    ///
    /// # Errors
    ///
    /// * `ExportError::Scan` if a page cannot be fetched or decoded, or the
    ///   scan is cancelled
    /// * `ExportError::Write` if `output` rejects a write or the final flush
    pub async fn export<W: Write>(
        &self,
        output: W,
        cancel: &CancellationToken,
    ) -> Result<ExportSummary, ExportError> {
        let mut writer = Writer::from_writer(output);
        let mut summary = ExportSummary::default();

        let result = self.write_pages(&mut writer, &mut summary, cancel).await;
        let flushed = writer.flush();
        result?;
        flushed?;

        info!(
            "Exported {} record{} from `{}` in {} page{}",
            summary.records_written,
            if summary.records_written == 1 { "" } else { "s" },
            self.filter.table_name(),
            summary.pages_scanned,
            if summary.pages_scanned == 1 { "" } else { "s" },
        );
        Ok(summary)
    }

    async fn write_pages<W: Write>(
        &self,
        writer: &mut Writer<W>,
        summary: &mut ExportSummary,
        cancel: &CancellationToken,
    ) -> Result<(), ExportError> {
        let mut columns: Option<Vec<String>> = None;
        let mut token = None;

        loop {
            let page = self.source.scan(&self.filter, token, cancel).await?;
            summary.pages_scanned += 1;

            if columns.is_none() {
                if let Some(derived) = self.header_mode.derive_columns(&page.records) {
                    debug!("Header columns: {}", derived.join(","));
                    writer.write_record(&derived)?;
                    summary.columns = derived.clone();
                    columns = Some(derived);
                }
            }

            if let Some(columns) = &columns {
                for record in &page.records {
                    writer.write_record(format_row(columns, record))?;
                    summary.records_written += 1;
                }
            }

            token = page.next;
            if token.is_none() {
                return Ok(());
            }
        }
    }
}
