use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

// Accepts plain dates, RFC 3339 timestamps and Unix timestamps in milliseconds.
pub fn deserialize_order_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DateOrTimestamp {
        String(String),
        Number(i64),
    }

    match DateOrTimestamp::deserialize(deserializer)? {
        DateOrTimestamp::String(s) => parse_order_date(&s).map_err(D::Error::custom),
        DateOrTimestamp::Number(ms) => {
            date_from_millis(ms).ok_or_else(|| D::Error::custom(format!("Invalid timestamp: {}", ms)))
        }
    }
}

pub fn parse_order_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    if let Ok(ms) = s.parse::<i64>() {
        if let Some(date) = date_from_millis(ms) {
            return Ok(date);
        }
    }
    Err(format!("Invalid date format: {}", s))
}

fn date_from_millis(ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.date_naive())
}
