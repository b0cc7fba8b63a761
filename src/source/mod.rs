//! Paginated record sources.
//!
//! A [`RecordSource`] turns one `(filter, continuation token)` pair into one
//! page of decoded records. The exporter threads the returned token back in
//! until the source reports that nothing remains; it never looks inside the
//! token, which is why the token is an associated type rather than a concrete
//! map.

mod dynamodb;
mod filter;
mod value;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error_handling::ScanError;

pub use dynamodb::{ContinuationToken, DynamoDbSource};
pub use filter::ScanFilter;
pub use value::{decode_item, Record, Value};

/// One page of scan results.
#[derive(Debug)]
pub struct Page<T> {
    /// Decoded items, in the order the backend returned them.
    pub records: Vec<Record>,
    /// Resume position for the next call; `None` once the scan is exhausted.
    pub next: Option<T>,
}

/// A store that can be scanned one page at a time.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Opaque resume position handed back to the next [`scan`](Self::scan) call.
    type Token: Send + Sync;

    /// Fetches the page that starts at `token` (or at the beginning when
    /// `token` is `None`).
    ///
    /// Implementations must return `ScanError::Cancelled` promptly once
    /// `cancel` fires.
    async fn scan(
        &self,
        filter: &ScanFilter,
        token: Option<Self::Token>,
        cancel: &CancellationToken,
    ) -> Result<Page<Self::Token>, ScanError>;
}
