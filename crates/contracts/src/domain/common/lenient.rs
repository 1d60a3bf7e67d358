//! Tolerant field decoders.
//!
//! The catalog API serializes decimals as strings (`"4.2"`), sometimes sends
//! identifiers as numbers, and uses `null` for empty relations. These helpers
//! are used with `#[serde(default, deserialize_with = "...")]` so a single odd
//! field never fails the whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Number or numeric string, anything else is `None`
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_as_f64))
}

/// Non-negative whole number (counters, volumes)
pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(value_as_f64)
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32))
}

/// Signed whole number (years)
pub fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(value_as_f64)
        .filter(|n| n.fract() == 0.0 && *n >= i32::MIN as f64 && *n <= i32::MAX as f64)
        .map(|n| n as i32))
}

/// String or number rendered as text. Blank strings become `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Required text field that tolerates `null`, numbers and absence.
/// Anything unusable decodes to an empty string.
pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(deserializer)?.unwrap_or_default())
}

/// Sequence where `null` means empty
pub fn vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "opt_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "opt_u32")]
        count: Option<u32>,
        #[serde(default, deserialize_with = "opt_i32")]
        year: Option<i32>,
        #[serde(default, deserialize_with = "opt_text")]
        id: Option<String>,
        #[serde(default, deserialize_with = "vec_or_null")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "text_or_empty")]
        label: String,
    }

    #[test]
    fn test_decimal_strings_and_numbers_decode_alike() {
        let a: Sample = serde_json::from_str(r#"{"price": "89.90", "count": "12"}"#).unwrap();
        let b: Sample = serde_json::from_str(r#"{"price": 89.9, "count": 12}"#).unwrap();
        assert_eq!(a.price, Some(89.9));
        assert_eq!(a.price, b.price);
        assert_eq!(a.count, b.count);
    }

    #[test]
    fn test_missing_null_and_garbage_become_none() {
        let p: Sample = serde_json::from_str(
            r#"{"price": null, "count": -3, "year": "n/a", "id": "  ", "tags": null}"#,
        )
        .unwrap();
        assert_eq!(p.price, None);
        assert_eq!(p.count, None);
        assert_eq!(p.year, None);
        assert_eq!(p.id, None);
        assert!(p.tags.is_empty());

        let empty: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.price, None);
        assert!(empty.tags.is_empty());
    }

    #[test]
    fn test_numeric_identifier_becomes_text() {
        let p: Sample = serde_json::from_str(r#"{"id": 12345, "year": 1998}"#).unwrap();
        assert_eq!(p.id.as_deref(), Some("12345"));
        assert_eq!(p.year, Some(1998));
    }

    #[test]
    fn test_required_text_survives_null_and_absence() {
        let null: Sample = serde_json::from_str(r#"{"label": null}"#).unwrap();
        let absent: Sample = serde_json::from_str("{}").unwrap();
        let number: Sample = serde_json::from_str(r#"{"label": 7}"#).unwrap();
        assert_eq!(null.label, "");
        assert_eq!(absent.label, "");
        assert_eq!(number.label, "7");
    }
}
