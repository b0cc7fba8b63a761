//! Scan filter specification.
//!
//! Holds the table name and the optional filter expression together with its
//! name aliases and value bindings. The raw JSON flags are parsed exactly once,
//! when the filter is built, so a malformed binding is reported before any
//! request reaches DynamoDB.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;

use super::value::parse_number;
use crate::error_handling::ConfigError;

/// Immutable description of what to scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanFilter {
    table_name: String,
    filter_expression: Option<String>,
    attribute_names: Option<HashMap<String, String>>,
    attribute_values: Option<HashMap<String, AttributeValue>>,
}

impl ScanFilter {
    /// Unfiltered scan of `table_name`.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            filter_expression: None,
            attribute_names: None,
            attribute_values: None,
        }
    }

    /// Builds a filter from raw command-line text.
    ///
    /// Empty strings are treated as absent. `names_json` must be a JSON object
    /// of strings (`{"#n": "name"}`); `values_json` must be a JSON object of
    /// DynamoDB-typed values (`{":v": {"S": "x"}}`).
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingTable` if `table_name` is blank
    /// * `ConfigError::InvalidAttributeNames` if `names_json` does not parse
    /// * `ConfigError::InvalidAttributeValues` if `values_json` does not parse
    ///   or holds an ill-formed number or base64 payload
    pub fn parse(
        table_name: &str,
        filter_expression: Option<&str>,
        names_json: Option<&str>,
        values_json: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if table_name.trim().is_empty() {
            return Err(ConfigError::MissingTable);
        }

        let attribute_values = match non_empty(values_json) {
            Some(raw) => Some(parse_attribute_values(raw)?),
            None => None,
        };

        let attribute_names = match non_empty(names_json) {
            Some(raw) => Some(
                serde_json::from_str::<HashMap<String, String>>(raw)
                    .map_err(ConfigError::InvalidAttributeNames)?,
            ),
            None => None,
        };

        Ok(Self {
            table_name: table_name.to_string(),
            filter_expression: non_empty(filter_expression).map(str::to_string),
            attribute_names,
            attribute_values,
        })
    }

    /// Target table.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Filter predicate text, if any.
    pub fn filter_expression(&self) -> Option<&str> {
        self.filter_expression.as_deref()
    }

    /// Placeholder to attribute-name aliases, if any.
    pub fn attribute_names(&self) -> Option<&HashMap<String, String>> {
        self.attribute_names.as_ref()
    }

    /// Placeholder to value bindings, if any.
    pub fn attribute_values(&self) -> Option<&HashMap<String, AttributeValue>> {
        self.attribute_values.as_ref()
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}

/// DynamoDB JSON as accepted on the command line: an object with exactly one
/// type tag per value.
#[derive(Debug, Deserialize)]
enum WireValue {
    S(String),
    N(String),
    B(String),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "NULL")]
    Null(bool),
    #[serde(rename = "SS")]
    Ss(Vec<String>),
    #[serde(rename = "NS")]
    Ns(Vec<String>),
    #[serde(rename = "BS")]
    Bs(Vec<String>),
    L(Vec<WireValue>),
    M(HashMap<String, WireValue>),
}

fn parse_attribute_values(raw: &str) -> Result<HashMap<String, AttributeValue>, ConfigError> {
    let wire: HashMap<String, WireValue> = serde_json::from_str(raw)
        .map_err(|e| ConfigError::InvalidAttributeValues(e.to_string()))?;

    wire.into_iter()
        .map(|(placeholder, value)| {
            into_attribute_value(value)
                .map(|v| (placeholder.clone(), v))
                .map_err(|reason| {
                    ConfigError::InvalidAttributeValues(format!("{}: {}", placeholder, reason))
                })
        })
        .collect()
}

fn into_attribute_value(value: WireValue) -> Result<AttributeValue, String> {
    Ok(match value {
        WireValue::S(s) => AttributeValue::S(s),
        WireValue::N(n) => {
            parse_number(&n)?;
            AttributeValue::N(n)
        }
        WireValue::B(b) => AttributeValue::B(decode_blob(&b)?),
        WireValue::Bool(b) => AttributeValue::Bool(b),
        WireValue::Null(b) => AttributeValue::Null(b),
        WireValue::Ss(items) => AttributeValue::Ss(items),
        WireValue::Ns(items) => {
            for n in &items {
                parse_number(n)?;
            }
            AttributeValue::Ns(items)
        }
        WireValue::Bs(items) => AttributeValue::Bs(
            items
                .iter()
                .map(|b| decode_blob(b))
                .collect::<Result<_, _>>()?,
        ),
        WireValue::L(items) => AttributeValue::L(
            items
                .into_iter()
                .map(into_attribute_value)
                .collect::<Result<_, _>>()?,
        ),
        WireValue::M(entries) => AttributeValue::M(
            entries
                .into_iter()
                .map(|(k, v)| into_attribute_value(v).map(|v| (k, v)))
                .collect::<Result<_, _>>()?,
        ),
    })
}

fn decode_blob(encoded: &str) -> Result<Blob, String> {
    BASE64
        .decode(encoded)
        .map(Blob::new)
        .map_err(|e| format!("invalid base64 `{}`: {}", encoded, e))
}
