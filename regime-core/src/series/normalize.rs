use crate::{CalendarDay, PriceObservation};
use regime_types::{Endpoint, RawPrice, RawPriceRecord, RegimeError};

/// Coerce a served price to a finite `f64`.
///
/// Numeric strings are trimmed before parsing.
///
/// # Errors
/// Returns `CoercionFailure { row, .. }` if the string does not parse or the
/// value is NaN or infinite.
pub fn coerce_price(row: usize, price: &RawPrice) -> Result<f64, RegimeError> {
    let value = match price {
        RawPrice::Number(v) => *v,
        RawPrice::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| RegimeError::coercion(row, s.as_str()))?,
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RegimeError::coercion(row, price.to_string()))
    }
}

/// Normalize a single record at position `row`.
///
/// # Errors
/// - `MalformedResponse` for the historical-prices endpoint if the date
///   truncates to an empty day.
/// - `CoercionFailure` if the price is not numeric.
pub fn normalize_record(row: usize, record: &RawPriceRecord) -> Result<PriceObservation, RegimeError> {
    let date = CalendarDay::truncate(&record.date);
    if date.is_empty() {
        return Err(RegimeError::malformed(
            Endpoint::HistoricalPrices,
            format!("row {row} has no date: {:?}", record.date),
        ));
    }
    let price = coerce_price(row, &record.price)?;
    Ok(PriceObservation { date, price })
}

/// Convert raw price rows into the canonical series.
///
/// - Input order is preserved; rows are never re-sorted.
/// - Rows sharing a day are all kept; day lookups downstream are first-match.
/// - One bad row fails the whole series.
///
/// # Errors
/// Returns the first `MalformedResponse` or `CoercionFailure` encountered.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "regime_core::normalize_series",
        skip(records),
        fields(rows = records.len()),
    )
)]
pub fn normalize_series(records: &[RawPriceRecord]) -> Result<Vec<PriceObservation>, RegimeError> {
    let series = records
        .iter()
        .enumerate()
        .map(|(row, r)| normalize_record(row, r))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "tracing")]
    if !super::is_chronological(&series) {
        tracing::warn!(
            rows = series.len(),
            "price series is not strictly increasing by date; keeping source order"
        );
    }

    Ok(series)
}
