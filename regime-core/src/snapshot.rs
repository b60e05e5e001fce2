use serde::{Deserialize, Serialize};

use crate::{
    AlignedEvent, ChangePointMarker, ChangePointOverlay, DayIndex, PriceObservation, RawDataset,
    align_events_with, locate_change_point_with, normalize_series,
};
use regime_types::{ChangePointResult, RegimeError};

/// Everything the presentation layer needs to draw the dashboard.
///
/// All positions (`AlignedEvent::index`, `ChangePointMarker::index` and
/// `range_end`) refer into `series`, which is never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Normalized price series; the chart's time axis.
    pub series: Vec<PriceObservation>,
    /// Key events that landed on an observation, in event order.
    pub events: Vec<AlignedEvent>,
    /// Change-point statistics and placement; `None` when the backend had no result.
    pub change_point: Option<ChangePointOverlay>,
}

impl DashboardSnapshot {
    /// Normalize the series, then derive event markers and the change-point overlay.
    ///
    /// The day index is built once and shared by the aligner and the locator.
    ///
    /// # Errors
    /// Propagates normalization failures (`MalformedResponse`, `CoercionFailure`);
    /// alignment misses are never errors.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "regime_core::snapshot::assemble",
            skip(raw),
            fields(
                prices = raw.prices.len(),
                events = raw.events.len(),
                change_point = raw.change_point.is_some(),
            ),
        )
    )]
    pub fn assemble(raw: &RawDataset) -> Result<Self, RegimeError> {
        let series = normalize_series(&raw.prices)?;
        let (events, change_point) = {
            let index = DayIndex::build(&series);
            let events = align_events_with(&index, &raw.events);
            let change_point = raw
                .change_point
                .as_ref()
                .map(|cp| locate_change_point_with(&series, &index, cp));
            (events, change_point)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            observations = series.len(),
            aligned_events = events.len(),
            dropped_events = raw.events.len() - events.len(),
            change_point_aligned = change_point.as_ref().is_some_and(|o| o.marker.is_some()),
            "assembled dashboard snapshot"
        );

        Ok(Self {
            series,
            events,
            change_point,
        })
    }

    /// The change-point marker, when the date aligned.
    #[must_use]
    pub fn marker(&self) -> Option<&ChangePointMarker> {
        self.change_point.as_ref().and_then(|o| o.marker.as_ref())
    }

    /// Change-point statistics as served, whether or not the date aligned.
    #[must_use]
    pub fn stats(&self) -> Option<&ChangePointResult> {
        self.change_point.as_ref().map(|o| &o.stats)
    }

    /// The post-change slice of the series; empty when there is no marker.
    #[must_use]
    pub fn highlighted(&self) -> &[PriceObservation] {
        self.marker()
            .and_then(|m| self.series.get(m.index..=m.range_end))
            .unwrap_or(&[])
    }

    /// Aligned events attached to observation `index`.
    pub fn events_at(&self, index: usize) -> impl Iterator<Item = &AlignedEvent> {
        self.events.iter().filter(move |e| e.index == index)
    }
}
