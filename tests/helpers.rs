// Shared test helpers: an in-memory record source and record builders.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use dynamo2csv::source::{Page, Record, RecordSource, ScanFilter, Value};
use dynamo2csv::ScanError;
use tokio_util::sync::CancellationToken;

/// Serves a fixed list of pages; the continuation token is the next page index.
pub struct FakeSource {
    pages: Vec<Vec<Record>>,
    failure: Option<(usize, fn() -> ScanError)>,
    calls: AtomicUsize,
    seen_tokens: Mutex<Vec<Option<usize>>>,
}

#[allow(dead_code)] // Used by other test files
impl FakeSource {
    /// A source returning `pages` in order. An empty list behaves like one empty page.
    pub fn new(pages: Vec<Vec<Record>>) -> Self {
        Self {
            pages,
            failure: None,
            calls: AtomicUsize::new(0),
            seen_tokens: Mutex::new(Vec::new()),
        }
    }

    /// Makes the scan for page `index` fail with `make()`.
    pub fn failing_at(mut self, index: usize, make: fn() -> ScanError) -> Self {
        self.failure = Some((index, make));
        self
    }

    /// Number of scan calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Tokens passed to each scan call, in order.
    pub fn seen_tokens(&self) -> Vec<Option<usize>> {
        self.seen_tokens.lock().expect("token log poisoned").clone()
    }
}

#[async_trait]
impl RecordSource for FakeSource {
    type Token = usize;

    async fn scan(
        &self,
        _filter: &ScanFilter,
        token: Option<usize>,
        cancel: &CancellationToken,
    ) -> Result<Page<usize>, ScanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_tokens
            .lock()
            .expect("token log poisoned")
            .push(token);

        if cancel.is_cancelled() {
            return Err(ScanError::Cancelled);
        }

        let index = token.unwrap_or(0);
        if let Some((fail_at, make)) = &self.failure {
            if *fail_at == index {
                return Err(make());
            }
        }

        let records = self.pages.get(index).cloned().unwrap_or_default();
        let next = if index + 1 < self.pages.len() {
            Some(index + 1)
        } else {
            None
        };
        Ok(Page { records, next })
    }
}

/// Builds a record from `(name, value)` pairs.
#[allow(dead_code)]
pub fn record(fields: &[(&str, Value)]) -> Record {
    fields
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// Shorthand for a string value.
#[allow(dead_code)]
pub fn s(text: &str) -> Value {
    Value::String(text.to_string())
}

/// Shorthand for a number value.
#[allow(dead_code)]
pub fn n(number: f64) -> Value {
    Value::Number(number)
}

/// A writer that rejects everything, like a closed pipe.
#[allow(dead_code)]
pub struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

/// Parses CSV output into a header and data rows.
#[allow(dead_code)]
pub fn parse_csv(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(bytes);
    let header = reader
        .headers()
        .expect("header should parse")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| {
            r.expect("row should parse")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (header, rows)
}
