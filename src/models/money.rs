use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Decimal places kept for `order_value` (`NUMERIC(12, 2)`).
pub const ORDER_VALUE_SCALE: u32 = 2;

// NUMERIC(12, 2) leaves ten integer digits.
const ORDER_VALUE_LIMIT: i64 = 10_000_000_000;

/// Accepts a value the `order_value` column stores exactly and returns it
/// with scale 2, the form Postgres hands back.
pub fn check_order_value(value: Decimal) -> Result<Decimal, String> {
    let normalized = value.normalize();
    if normalized.scale() > ORDER_VALUE_SCALE {
        return Err(format!(
            "order value {} has more than {} decimal places",
            value, ORDER_VALUE_SCALE
        ));
    }
    if normalized.abs() >= Decimal::from(ORDER_VALUE_LIMIT) {
        return Err(format!("order value {} is out of range", value));
    }

    let mut scaled = normalized;
    scaled.rescale(ORDER_VALUE_SCALE);
    Ok(scaled)
}

// Accepts JSON numbers and numeric strings.
pub fn deserialize_order_value<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    // f64's Display is the shortest text that round-trips, so 35000.555 stays 35000.555.
    let text = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) if n.is_finite() => n.to_string(),
        NumberOrString::Number(n) => return Err(D::Error::custom(format!("Invalid order value: {}", n))),
        NumberOrString::String(s) => s.trim().to_string(),
    };

    let value = Decimal::from_str(&text)
        .map_err(|e| D::Error::custom(format!("Invalid order value {}: {}", text, e)))?;
    check_order_value(value).map_err(D::Error::custom)
}
