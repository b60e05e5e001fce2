//! Series helpers: normalization, first-match day lookup and marker derivation.

/// Event alignment onto the normalized axis.
pub mod align;
/// First-match day index.
pub mod index;
/// Change-point location and highlighted range.
pub mod locate;
/// Raw record normalization.
pub mod normalize;

use crate::PriceObservation;

/// True when every pair of consecutive observations whose days parse as
/// `YYYY-MM-DD` is strictly increasing.
///
/// Days that do not parse are skipped; the source order is never changed.
#[must_use]
pub fn is_chronological(series: &[PriceObservation]) -> bool {
    let mut prev = None;
    for obs in series {
        if let Some(d) = obs.date.to_naive_date() {
            if let Some(p) = prev
                && d <= p
            {
                return false;
            }
            prev = Some(d);
        }
    }
    true
}
