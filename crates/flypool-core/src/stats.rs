//! Upstream `currentStats` payload.
//!
//! Decoding is lenient: any field that is missing or carries the wrong JSON
//! type decodes to its zero value, and a body that is not a JSON object
//! decodes to all zeros. No error is ever returned from here.

use serde::Deserialize;
use serde_json::Value;

/// Status literal reported by a healthy upstream.
pub const STATUS_OK: &str = "OK";

/// Decoded `currentStats` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MinerStatistics {
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::object")]
    pub data: MinerData,
}

/// The `data` object of a `currentStats` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MinerData {
    /// Epoch seconds.
    #[serde(deserialize_with = "lenient::int")]
    pub time: i64,
    /// Epoch seconds.
    #[serde(deserialize_with = "lenient::int")]
    pub last_seen: i64,
    #[serde(deserialize_with = "lenient::float")]
    pub reported_hashrate: f64,
    #[serde(deserialize_with = "lenient::float")]
    pub current_hashrate: f64,
    #[serde(deserialize_with = "lenient::float")]
    pub average_hashrate: f64,
    #[serde(deserialize_with = "lenient::int")]
    pub active_workers: i64,
    /// Base units.
    #[serde(deserialize_with = "lenient::int")]
    pub unpaid: i64,
    /// Base units.
    #[serde(deserialize_with = "lenient::int")]
    pub unconfirmed: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub valid_shares: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub invalid_shares: i64,
    #[serde(deserialize_with = "lenient::int")]
    pub stale_shares: i64,
    #[serde(deserialize_with = "lenient::float")]
    pub coins_per_min: f64,
    #[serde(deserialize_with = "lenient::float")]
    pub usd_per_min: f64,
    #[serde(deserialize_with = "lenient::float")]
    pub btc_per_min: f64,
}

impl MinerStatistics {
    /// Decode a raw response body, falling back to zero values.
    pub fn from_body(body: &str) -> Self {
        let value = match serde_json::from_str::<Value>(body) {
            Ok(v) if v.is_object() => v,
            Ok(_) => {
                tracing::debug!("upstream body is not a JSON object");
                return Self::default();
            }
            Err(e) => {
                tracing::debug!(error = %e, "upstream body is not valid JSON");
                return Self::default();
            }
        };
        Self::deserialize(value).unwrap_or_default()
    }

    /// Whether the upstream reported a healthy status.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        Ok(Value::deserialize(d)?.as_i64().unwrap_or_default())
    }

    pub fn float<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Value::deserialize(d)?.as_f64().unwrap_or_default())
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        match Value::deserialize(d)? {
            Value::String(s) => Ok(s),
            _ => Ok(String::new()),
        }
    }

    pub fn object<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(d)?;
        if !value.is_object() {
            return Ok(T::default());
        }
        Ok(T::deserialize(value).unwrap_or_default())
    }
}
