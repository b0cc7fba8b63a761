//! Export types and options.

use std::collections::BTreeSet;

use clap::ValueEnum;

use crate::source::Record;

/// How the header row is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HeaderMode {
    /// Field names of the very first record (default)
    #[default]
    FirstRecord,
    /// Union of field names across the first non-empty page
    FirstPage,
}

impl HeaderMode {
    /// Returns the sorted column names for `page`, or `None` if the page is empty.
    ///
    /// Names are sorted byte-wise, so the result never depends on the order in
    /// which fields were inserted into a record.
    pub fn derive_columns(self, page: &[Record]) -> Option<Vec<String>> {
        let first = page.first()?;
        let columns = match self {
            HeaderMode::FirstRecord => {
                let mut names: Vec<String> = first.keys().cloned().collect();
                names.sort();
                names
            }
            HeaderMode::FirstPage => page
                .iter()
                .flat_map(|record| record.keys())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .cloned()
                .collect(),
        };
        Some(columns)
    }
}

/// Outcome of a completed export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Data rows written (excludes the header)
    pub records_written: usize,
    /// Scan calls made
    pub pages_scanned: usize,
    /// Header columns, empty when no record was seen
    pub columns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Value;

    fn record(names: &[&str]) -> Record {
        names
            .iter()
            .map(|n| (n.to_string(), Value::Bool(true)))
            .collect()
    }

    #[test]
    fn test_empty_page_has_no_columns() {
        assert_eq!(HeaderMode::FirstRecord.derive_columns(&[]), None);
        assert_eq!(HeaderMode::FirstPage.derive_columns(&[]), None);
    }

    #[test]
    fn test_first_record_columns_are_sorted_bytewise() {
        let page = vec![record(&["b", "B", "a", "_id"])];
        assert_eq!(
            HeaderMode::FirstRecord.derive_columns(&page),
            Some(vec!["B".into(), "_id".into(), "a".into(), "b".into()])
        );
    }

    #[test]
    fn test_first_record_ignores_rest_of_page() {
        let page = vec![record(&["a", "b"]), record(&["a", "c"])];
        assert_eq!(
            HeaderMode::FirstRecord.derive_columns(&page),
            Some(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_first_page_takes_union_without_duplicates() {
        let page = vec![record(&["b", "a"]), record(&["a", "c"])];
        assert_eq!(
            HeaderMode::FirstPage.derive_columns(&page),
            Some(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn test_default_header_mode() {
        assert_eq!(HeaderMode::default(), HeaderMode::FirstRecord);
    }
}
