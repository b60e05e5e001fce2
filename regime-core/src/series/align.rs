use crate::{AlignedEvent, CalendarDay, DayIndex, PriceObservation};
use regime_types::KeyEvent;

/// Place key events on the normalized axis.
///
/// Each event's timestamp is truncated with the same rule as the series and
/// matched against the first observation on that day. Events without a
/// matching observation (weekends, holidays, out-of-range dates) are dropped.
/// Output follows input event order.
#[must_use]
pub fn align_events(series: &[PriceObservation], events: &[KeyEvent]) -> Vec<AlignedEvent> {
    align_events_with(&DayIndex::build(series), events)
}

/// Same as [`align_events`] against a prebuilt index.
#[must_use]
pub fn align_events_with(index: &DayIndex<'_>, events: &[KeyEvent]) -> Vec<AlignedEvent> {
    events
        .iter()
        .filter_map(|event| {
            let date = CalendarDay::truncate(&event.timestamp);
            let Some(pos) = index.first(&date) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(day = %date, label = %event.label, "dropping key event with no matching observation");
                return None;
            };
            Some(AlignedEvent {
                index: pos,
                date,
                event: event.clone(),
            })
        })
        .collect()
}
