//! Attribute values decoded from scanned items.
//!
//! DynamoDB returns every item as a map of typed `AttributeValue`s. The
//! exporter only needs a small, closed set of shapes, so items are decoded
//! into [`Value`] once, at the source boundary, and the rest of the crate
//! matches on that enum exhaustively.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error_handling::ScanError;

/// One scanned item: attribute name to decoded value.
///
/// Field sets differ freely between records; nothing about the map's
/// iteration order is meaningful.
pub type Record = HashMap<String, Value>;

/// A dynamically-typed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `S`
    String(String),
    /// `N`, held as a double
    Number(f64),
    /// `BOOL`
    Bool(bool),
    /// `NULL`
    Null,
    /// `B`
    Binary(Vec<u8>),
    /// `L`
    List(Vec<Value>),
    /// `M`, keyed in sorted order so rendering is deterministic
    Map(BTreeMap<String, Value>),
    /// `SS`
    StringSet(Vec<String>),
    /// `NS`
    NumberSet(Vec<f64>),
    /// `BS`
    BinarySet(Vec<Vec<u8>>),
}

/// Generic human-readable rendering.
///
/// Numbers use `f64`'s `Display`, which always prints the shortest digit
/// string that round-trips and never switches to exponent notation.
/// Sequences render as `[a b c]`, maps as `map[k:v k2:v2]`, binary as
/// standard base64.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => f.write_str("null"),
            Value::Binary(bytes) => f.write_str(&BASE64.encode(bytes)),
            Value::List(items) => write_seq(f, items.iter()),
            Value::Map(entries) => {
                f.write_str("map[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                f.write_str("]")
            }
            Value::StringSet(items) => write_seq(f, items.iter()),
            Value::NumberSet(items) => write_seq(f, items.iter()),
            Value::BinarySet(items) => write_seq(f, items.iter().map(|b| BASE64.encode(b))),
        }
    }
}

fn write_seq<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: Iterator,
    I::Item: fmt::Display,
{
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

/// Decodes one raw DynamoDB item into a [`Record`].
///
/// # Errors
///
/// Returns `ScanError::Decode` naming the top-level attribute if any value
/// (including nested ones) has a type this crate does not understand, or a
/// number that does not fit in a finite double.
pub fn decode_item(item: HashMap<String, AttributeValue>) -> Result<Record, ScanError> {
    item.into_iter()
        .map(|(name, attr)| match decode_attribute(attr) {
            Ok(value) => Ok((name, value)),
            Err(reason) => Err(ScanError::Decode {
                attribute: name,
                reason,
            }),
        })
        .collect()
}

fn decode_attribute(attr: AttributeValue) -> Result<Value, String> {
    match attr {
        AttributeValue::S(s) => Ok(Value::String(s)),
        AttributeValue::N(n) => parse_number(&n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::B(blob) => Ok(Value::Binary(blob.into_inner())),
        AttributeValue::L(items) => items
            .into_iter()
            .map(decode_attribute)
            .collect::<Result<_, _>>()
            .map(Value::List),
        AttributeValue::M(entries) => entries
            .into_iter()
            .map(|(key, value)| decode_attribute(value).map(|v| (key, v)))
            .collect::<Result<_, _>>()
            .map(Value::Map),
        AttributeValue::Ss(items) => Ok(Value::StringSet(items)),
        AttributeValue::Ns(items) => items
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<_, _>>()
            .map(Value::NumberSet),
        AttributeValue::Bs(items) => Ok(Value::BinarySet(
            items.into_iter().map(Blob::into_inner).collect(),
        )),
        other => Err(format!("unsupported attribute type {:?}", other)),
    }
}

/// Parses a DynamoDB number string as a finite double.
pub(crate) fn parse_number(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        Ok(_) => Err(format!("number `{}` is out of range for a double", raw)),
        Err(e) => Err(format!("invalid number `{}`: {}", raw, e)),
    }
}
