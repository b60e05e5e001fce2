//! Normalized observations, derived markers and the joined raw dataset.

use serde::{Deserialize, Serialize};

use crate::CalendarDay;
use regime_types::{ChangePointResult, KeyEvent, RawPrice, RawPriceRecord};

/// One point of the normalized series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Day-granularity date.
    pub date: CalendarDay,
    /// Price coerced to a finite float.
    pub price: f64,
}

impl From<&PriceObservation> for RawPriceRecord {
    fn from(obs: &PriceObservation) -> Self {
        Self {
            date: obs.date.to_string(),
            price: RawPrice::Number(obs.price),
        }
    }
}

/// A key event placed on the normalized axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedEvent {
    /// Position of the first observation on the event's day.
    pub index: usize,
    /// The event's truncated day (equal to `series[index].date`).
    pub date: CalendarDay,
    /// The source event.
    pub event: KeyEvent,
}

/// Point marker at the change point plus the highlighted post-change range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePointMarker {
    /// Position of the first observation on the change-point day.
    pub index: usize,
    /// The change-point day.
    pub date: CalendarDay,
    /// Position of the last observation; the range is `index..=range_end`.
    pub range_end: usize,
    /// Date of the last observation.
    pub range_end_date: CalendarDay,
    /// Observed price on the change-point day.
    pub price: f64,
}

/// Change-point statistics with their optional placement on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePointOverlay {
    /// `None` when the change-point date has no matching observation.
    pub marker: Option<ChangePointMarker>,
    /// Statistics exactly as served, shown regardless of alignment.
    pub stats: ChangePointResult,
}

/// The three backend payloads, joined. Only ever built when all three succeed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataset {
    /// Rows of `/api/historical_prices`.
    pub prices: Vec<RawPriceRecord>,
    /// Rows of `/api/key_events`.
    pub events: Vec<KeyEvent>,
    /// Body of `/api/change_point_results`; `None` when the backend sent `null`.
    pub change_point: Option<ChangePointResult>,
}
