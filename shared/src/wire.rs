//! Lenient number decoding.
//!
//! Decimal columns come back from the backend as JSON strings
//! (`"15000.00"`) while integer columns come back as numbers, and both have
//! been seen for the same field across endpoints.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn into_f64(self) -> Option<f64> {
        match self {
            NumberOrText::Number(value) => Some(value),
            NumberOrText::Text(raw) => raw.trim().parse::<f64>().ok(),
        }
    }
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?
        .into_f64()
        .filter(|value| value.is_finite())
        .ok_or_else(|| D::Error::custom("expected a number or a numeric string"))
}

pub fn lenient_f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(raw.and_then(NumberOrText::into_f64).filter(|value| value.is_finite()))
}

pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_f64(deserializer)?;
    if value.fract() != 0.0 {
        return Err(D::Error::custom(format!("expected a whole number, got {}", value)));
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "lenient_f64")]
        price: f64,
        #[serde(deserialize_with = "lenient_i64")]
        stock: i64,
        #[serde(default, deserialize_with = "lenient_f64_opt")]
        total: Option<f64>,
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let row: Row = serde_json::from_value(json!({ "price": "15000.00", "stock": "12" })).unwrap();
        assert_eq!(row.price, 15000.0);
        assert_eq!(row.stock, 12);
        assert_eq!(row.total, None);
    }

    #[test]
    fn test_fractional_stock_is_rejected() {
        let result = serde_json::from_value::<Row>(json!({ "price": 1, "stock": 1.5 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_garbage_text_is_rejected() {
        let result = serde_json::from_value::<Row>(json!({ "price": "abc", "stock": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_null_total() {
        let row: Row = serde_json::from_value(json!({ "price": 1, "stock": 1, "total": null })).unwrap();
        assert_eq!(row.total, None);
    }
}
