//! Cell formatting.

use crate::source::{Record, Value};

/// Renders one value as CSV cell text.
///
/// Strings are passed through untouched (the CSV writer handles quoting).
/// Numbers use fixed notation with the shortest round-tripping digits; see
/// [`format_number`]. Everything else uses the generic `Display` rendering.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(*n),
        other => other.to_string(),
    }
}

/// Formats a double without ever using exponent notation.
///
/// Spreadsheet tools misread `1.2345678901234e13` as a rounded value, so
/// `f64`'s `Display` is used here: it emits the shortest digits that parse
/// back to the same double and pads with zeros instead of switching to
/// scientific form.
pub fn format_number(n: f64) -> String {
    n.to_string()
}

/// Builds a row in `columns` order; fields missing from `record` are empty.
pub fn format_row(columns: &[String], record: &Record) -> Vec<String> {
    columns
        .iter()
        .map(|name| record.get(name).map(format_cell).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn assert_round_trips(n: f64) {
        let text = format_number(n);
        assert!(
            !text.contains('e') && !text.contains('E'),
            "{:e} formatted with an exponent: {}",
            n,
            text
        );
        let parsed: f64 = text.parse().expect("formatted number should parse");
        assert_eq!(parsed.to_bits(), n.to_bits(), "{} did not round-trip", text);
    }

    #[test]
    fn test_large_number_has_no_exponent() {
        assert_eq!(format_number(12345678901234.5), "12345678901234.5");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_small_number_has_no_exponent() {
        assert_eq!(format_number(0.0000001), "0.0000001");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
    }

    #[test]
    fn test_extreme_values_round_trip() {
        for n in [
            0.0,
            -0.0,
            f64::MAX,
            f64::MIN,
            f64::MIN_POSITIVE,
            f64::EPSILON,
            5e-324,
            -5e-324,
            9007199254740993.0,
            123456789012345678901234567890.0,
        ] {
            assert_round_trips(n);
        }
    }

    #[test]
    fn test_random_doubles_round_trip() {
        let mut rng = rand::rng();
        let mut checked = 0;
        while checked < 10_000 {
            let n = f64::from_bits(rng.random::<u64>());
            if n.is_finite() {
                assert_round_trips(n);
                checked += 1;
            }
        }
    }

    #[test]
    fn test_format_cell_by_type() {
        assert_eq!(format_cell(&Value::String("a,b".into())), "a,b");
        assert_eq!(format_cell(&Value::Number(1e-7)), "0.0000001");
        assert_eq!(format_cell(&Value::Bool(false)), "false");
        assert_eq!(format_cell(&Value::Null), "null");
        assert_eq!(
            format_cell(&Value::StringSet(vec!["x".into(), "y".into()])),
            "[x y]"
        );
    }

    #[test]
    fn test_format_row_missing_and_extra_fields() {
        let columns = vec!["a".to_string(), "b".to_string()];
        let record: Record = [
            ("a".to_string(), Value::Number(1.0)),
            ("c".to_string(), Value::String("dropped".into())),
        ]
        .into_iter()
        .collect();
        assert_eq!(format_row(&columns, &record), vec!["1", ""]);
    }
}
