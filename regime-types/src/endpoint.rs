use core::fmt;
use serde::{Deserialize, Serialize};

/// The three read-only backend endpoints a dashboard session consumes.
///
/// Used for URL construction, error tagging and telemetry so that every
/// failure can be attributed to exactly one retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// Daily price observations.
    HistoricalPrices,
    /// Dated key events to annotate on the chart.
    KeyEvents,
    /// The single change-point analysis result.
    ChangePointResults,
}

impl Endpoint {
    /// All endpoints in fetch order.
    pub const ALL: [Self; 3] = [
        Self::HistoricalPrices,
        Self::KeyEvents,
        Self::ChangePointResults,
    ];

    /// Absolute request path on the backend.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::HistoricalPrices => "/api/historical_prices",
            Self::KeyEvents => "/api/key_events",
            Self::ChangePointResults => "/api/change_point_results",
        }
    }

    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HistoricalPrices => "historical-prices",
            Self::KeyEvents => "key-events",
            Self::ChangePointResults => "change-point-results",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
