//! DynamoDB `Scan` as a [`RecordSource`].

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use log::debug;
use tokio_util::sync::CancellationToken;

use super::value::decode_item;
use super::{Page, RecordSource, ScanFilter};
use crate::error_handling::ScanError;

/// Resume position of a DynamoDB scan (its `LastEvaluatedKey`).
///
/// Only this module can build or read one.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuationToken(HashMap<String, AttributeValue>);

impl ContinuationToken {
    /// An absent or empty `LastEvaluatedKey` both mean the scan is finished.
    fn from_last_evaluated_key(key: Option<HashMap<String, AttributeValue>>) -> Option<Self> {
        key.filter(|k| !k.is_empty()).map(Self)
    }
}

/// Scans a DynamoDB table through an injected client.
///
/// # Example
/// ```no_run
/// use dynamo2csv::source::{DynamoDbSource, ScanFilter};
///
/// # async fn example(client: aws_sdk_dynamodb::Client) {
/// let source = DynamoDbSource::new(client);
/// let filter = ScanFilter::new("users");
/// # let _ = (source, filter);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DynamoDbSource {
    client: Client,
}

impl DynamoDbSource {
    /// Wraps an already-configured client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource for DynamoDbSource {
    type Token = ContinuationToken;

    async fn scan(
        &self,
        filter: &ScanFilter,
        token: Option<ContinuationToken>,
        cancel: &CancellationToken,
    ) -> Result<Page<ContinuationToken>, ScanError> {
        debug!(
            "Scanning `{}` ({})",
            filter.table_name(),
            if token.is_some() { "continuing" } else { "from start" }
        );

        let request = self
            .client
            .scan()
            .table_name(filter.table_name())
            .set_filter_expression(filter.filter_expression().map(str::to_string))
            .set_expression_attribute_names(filter.attribute_names().cloned())
            .set_expression_attribute_values(filter.attribute_values().cloned())
            .set_exclusive_start_key(token.map(|t| t.0));

        let output = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ScanError::Cancelled),
            result = request.send() => result.map_err(|err| ScanError::Query {
                table: filter.table_name().to_string(),
                message: DisplayErrorContext(&err).to_string(),
            })?,
        };

        let records = output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(decode_item)
            .collect::<Result<Vec<_>, _>>()?;
        let next = ContinuationToken::from_last_evaluated_key(output.last_evaluated_key);

        debug!(
            "Received {} item(s) from `{}` (more pages: {})",
            records.len(),
            filter.table_name(),
            next.is_some()
        );

        Ok(Page { records, next })
    }
}
