use chrono::{Datelike, NaiveDate, Weekday};
use regime_core::{RawPrice, RawPriceRecord};

/// Brent closes for the 30 weekdays from 2008-08-11 to 2008-09-19.
const CLOSES: [f64; 30] = [
    112.87, 113.18, 114.84, 112.45, 113.77, //
    114.30, 113.12, 114.61, 119.74, 114.59, //
    113.15, 115.64, 117.02, 115.31, 114.05, //
    109.71, 105.61, 108.39, 106.23, 108.23, //
    103.77, 101.62, 99.97, 100.09, 96.86, //
    94.48, 88.67, 90.27, 97.16, 97.25,
];

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2008, 8, 11).expect("valid fixture date")
}

/// Weekday-only price rows with a midnight time component, alternating
/// string and numeric prices the way a CSV-backed backend serves them.
pub fn rows() -> Vec<RawPriceRecord> {
    first_day()
        .iter_days()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .zip(CLOSES)
        .enumerate()
        .map(|(i, (day, close))| {
            let price = if i % 2 == 0 {
                RawPrice::Text(format!("{close:.2}"))
            } else {
                RawPrice::Number(close)
            };
            RawPriceRecord {
                date: day.format("%Y-%m-%d 00:00:00").to_string(),
                price,
            }
        })
        .collect()
}
