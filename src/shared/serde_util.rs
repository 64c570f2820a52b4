//! Custom serde helpers for provider wire formats.

/// Deserializes a Unix-seconds timestamp into `Option<DateTime<Utc>>`.
///
/// Koios sends `block_time` as epoch seconds, not ISO 8601 strings, and omits
/// it on some endpoints.
pub mod opt_timestamp_secs {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<i64>::deserialize(deserializer)?;
        match secs {
            None => Ok(None),
            Some(s) => DateTime::<Utc>::from_timestamp(s, 0)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", s))),
        }
    }
}
