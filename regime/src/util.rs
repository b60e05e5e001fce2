use std::time::Duration;

use regime_core::RegimeError;

/// Await `fut`, bounded by an optional overall deadline.
///
/// # Errors
/// Returns `RequestTimeout` when the deadline expires first; `fut` is dropped.
pub async fn with_deadline<F, T>(deadline: Option<Duration>, fut: F) -> Result<T, RegimeError>
where
    F: std::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| RegimeError::RequestTimeout),
        None => Ok(fut.await),
    }
}

/// Collapse endpoint failures into a single `RegimeError`.
///
/// Rules:
/// - Nested `FetchFailed` values are flattened first.
/// - Exactly one failure → that error unchanged.
/// - Otherwise → `FetchFailed(errors)` in input order.
#[must_use]
pub fn collapse_errors(errors: Vec<RegimeError>) -> RegimeError {
    let mut flat: Vec<RegimeError> = errors.into_iter().flat_map(RegimeError::flatten).collect();
    if flat.len() == 1
        && let Some(only) = flat.pop()
    {
        return only;
    }
    RegimeError::FetchFailed(flat)
}
