//! JSON shapes served by the dashboard backend.
//!
//! These types are the validation boundary: anything that does not
//! deserialize into them is a `MalformedResponse`. Unknown extra fields are
//! ignored.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price as served by the backend: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// JSON number.
    Number(f64),
    /// Number encoded as a string, e.g. `"54.32"`.
    Text(String),
}

impl fmt::Display for RawPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RawPrice {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for RawPrice {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One row of `/api/historical_prices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPriceRecord {
    /// Free-form date/time string, e.g. `"2020-04-01 00:00:00"`.
    #[serde(rename = "Date")]
    pub date: String,
    /// Price as served.
    #[serde(rename = "Price")]
    pub price: RawPrice,
}

impl RawPriceRecord {
    /// Convenience constructor.
    pub fn new(date: impl Into<String>, price: impl Into<RawPrice>) -> Self {
        Self {
            date: date.into(),
            price: price.into(),
        }
    }
}

/// One row of `/api/key_events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Event timestamp; may carry a time-of-day component.
    #[serde(rename = "Date")]
    pub timestamp: String,
    /// Short description shown next to the marker.
    #[serde(rename = "Event")]
    pub label: String,
}

impl KeyEvent {
    /// Convenience constructor.
    pub fn new(timestamp: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            label: label.into(),
        }
    }
}

/// Body of `/api/change_point_results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePointResult {
    /// Hypothesized regime boundary.
    pub date: String,
    /// Volatility before the change point.
    pub sigma_before: f64,
    /// Volatility after the change point.
    pub sigma_after: f64,
    /// Posterior probability, in percent, that volatility increased.
    pub prob_sigma_increase: f64,
    /// Mean return before the change point, when the backend provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mu_before: Option<f64>,
    /// Mean return after the change point, when the backend provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mu_after: Option<f64>,
}

impl ChangePointResult {
    /// Ratio `sigma_after / sigma_before`; `None` unless `sigma_before` is positive.
    #[must_use]
    pub fn volatility_ratio(&self) -> Option<f64> {
        (self.sigma_before > 0.0).then(|| self.sigma_after / self.sigma_before)
    }

    /// Whether the post-change volatility is strictly higher.
    #[must_use]
    pub fn sigma_increased(&self) -> bool {
        self.sigma_after > self.sigma_before
    }
}
