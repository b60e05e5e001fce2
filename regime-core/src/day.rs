use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date truncated to day granularity, used as the shared chart axis key.
///
/// Days compare by exact string equality; no calendar normalization is
/// applied beyond truncation, so `"2020-1-2"` and `"2020-01-02"` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(String);

impl CalendarDay {
    /// Truncate a free-form timestamp to its calendar-day component.
    ///
    /// The day is the substring before the first space. A bare ISO-8601
    /// token such as `2020-04-01T09:30:00Z` is cut at the `T` when the prefix
    /// is a valid `YYYY-MM-DD` date. Anything else is kept verbatim.
    #[must_use]
    pub fn truncate(timestamp: &str) -> Self {
        let token = timestamp
            .split_once(' ')
            .map_or(timestamp, |(day, _)| day);
        Self(strip_iso_time(token).to_string())
    }

    /// Borrow the day as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when truncation left nothing (e.g. a leading space).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse as a `YYYY-MM-DD` calendar date, if it has that form.
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

fn strip_iso_time(token: &str) -> &str {
    match token.get(..10) {
        Some(head)
            if token.as_bytes().get(10) == Some(&b'T')
                && NaiveDate::parse_from_str(head, "%Y-%m-%d").is_ok() =>
        {
            head
        }
        _ => token,
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CalendarDay {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CalendarDay> for String {
    fn from(day: CalendarDay) -> Self {
        day.0
    }
}

impl PartialEq<str> for CalendarDay {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CalendarDay {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
