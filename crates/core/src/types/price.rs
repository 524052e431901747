//! Price normalization for heterogeneous catalog data.
//!
//! The catalog API is loose about prices: the same field arrives as a
//! JSON number (`1299`), a plain numeric string (`"1299.99"`), or a
//! currency-formatted string (`"$1,299.99"`), and is sometimes null.
//! [`normalize`] coerces all of those into a non-negative `f64` and is
//! total: it never panics and never returns NaN.

use serde::{Deserialize, Serialize};

/// A price as it appears on the wire, before normalization.
///
/// Untagged so that `1299`, `"1299.99"`, and `"$1,299.99"` all
/// deserialize without a wrapper object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// Numeric price, e.g. `1299` or `1299.99`.
    Number(f64),
    /// String price, possibly currency-formatted, e.g. `"$1,299.99"`.
    Text(String),
}

impl From<f64> for RawPrice {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawPrice {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawPrice {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Coerce a raw price into a non-negative float.
///
/// Renders the value to text, strips every character outside `0-9` and
/// `.`, and parses the remainder as `f64`. Anything that still fails to
/// parse (garbage, multiple dots, empty input, null) yields `0.0`.
/// Stripping also drops a leading minus sign, so negative input
/// normalizes to its magnitude rather than a negative price.
#[must_use]
pub fn normalize(raw: Option<&RawPrice>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let text = match raw {
        RawPrice::Number(n) => n.to_string(),
        RawPrice::Text(s) => s.clone(),
    };

    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_currency_string() {
        assert_eq!(normalize(Some(&RawPrice::from("$1,234.56"))), 1234.56);
    }

    #[test]
    fn test_normalize_plain_string() {
        assert_eq!(normalize(Some(&RawPrice::from("1299.99"))), 1299.99);
    }

    #[test]
    fn test_normalize_garbage() {
        assert_eq!(normalize(Some(&RawPrice::from("abc"))), 0.0);
    }

    #[test]
    fn test_normalize_null() {
        assert_eq!(normalize(None), 0.0);
    }

    #[test]
    fn test_normalize_number() {
        assert_eq!(normalize(Some(&RawPrice::from(42.0))), 42.0);
    }

    #[test]
    fn test_normalize_negative_becomes_magnitude() {
        // The minus sign is stripped with the rest of the formatting
        assert_eq!(normalize(Some(&RawPrice::from(-5.0))), 5.0);
        assert_eq!(normalize(Some(&RawPrice::from("-$12.50"))), 12.50);
    }

    #[test]
    fn test_normalize_multiple_dots() {
        assert_eq!(normalize(Some(&RawPrice::from("1.2.3"))), 0.0);
    }

    #[test]
    fn test_normalize_empty_string() {
        assert_eq!(normalize(Some(&RawPrice::from(""))), 0.0);
    }

    #[test]
    fn test_raw_price_untagged_deserialization() {
        let number: RawPrice = serde_json::from_str("1299").unwrap();
        assert_eq!(number, RawPrice::Number(1299.0));

        let text: RawPrice = serde_json::from_str("\"$1,299.99\"").unwrap();
        assert_eq!(text, RawPrice::Text("$1,299.99".to_owned()));
    }
}
