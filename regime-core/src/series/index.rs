use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{CalendarDay, PriceObservation};

/// Day → position map over one normalized series, built once.
///
/// When several observations share a day the earliest position wins, which
/// matches a linear first-match scan.
#[derive(Debug, Clone)]
pub struct DayIndex<'a> {
    positions: HashMap<&'a CalendarDay, usize>,
}

impl<'a> DayIndex<'a> {
    /// Build the index for `series`.
    #[must_use]
    pub fn build(series: &'a [PriceObservation]) -> Self {
        let mut positions = HashMap::with_capacity(series.len());
        for (i, obs) in series.iter().enumerate() {
            if let Entry::Vacant(v) = positions.entry(&obs.date) {
                v.insert(i);
            }
        }
        Self { positions }
    }

    /// Position of the first observation on `day`.
    #[must_use]
    pub fn first(&self, day: &CalendarDay) -> Option<usize> {
        self.positions.get(day).copied()
    }

    /// Number of distinct days in the series.
    #[must_use]
    pub fn distinct_days(&self) -> usize {
        self.positions.len()
    }
}
