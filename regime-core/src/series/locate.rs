use crate::{CalendarDay, ChangePointMarker, ChangePointOverlay, DayIndex, PriceObservation};
use regime_types::ChangePointResult;

/// Locate the change point on the normalized axis.
///
/// When the change-point day matches an observation (first match), the
/// overlay carries a marker at that position and a highlighted range running
/// to the last observation inclusive. Otherwise there is no marker. The
/// statistics are passed through untouched in both cases.
#[must_use]
pub fn locate_change_point(
    series: &[PriceObservation],
    result: &ChangePointResult,
) -> ChangePointOverlay {
    locate_change_point_with(series, &DayIndex::build(series), result)
}

/// Same as [`locate_change_point`] against a prebuilt index of `series`.
#[must_use]
pub fn locate_change_point_with(
    series: &[PriceObservation],
    index: &DayIndex<'_>,
    result: &ChangePointResult,
) -> ChangePointOverlay {
    let day = CalendarDay::truncate(&result.date);
    let marker = index.first(&day).and_then(|i| {
        let at = series.get(i)?;
        let range_end = series.len() - 1;
        let end = series.last()?;
        Some(ChangePointMarker {
            index: i,
            date: at.date.clone(),
            range_end,
            range_end_date: end.date.clone(),
            price: at.price,
        })
    });

    #[cfg(feature = "tracing")]
    if marker.is_none() {
        tracing::debug!(day = %day, "change point date has no matching observation");
    }

    ChangePointOverlay {
        marker,
        stats: result.clone(),
    }
}
