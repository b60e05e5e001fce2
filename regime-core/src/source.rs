use async_trait::async_trait;

use crate::RegimeError;
use regime_types::{ChangePointResult, KeyEvent, RawPriceRecord};

/// A backend serving the three dashboard datasets.
///
/// Implementations map transport problems to `NetworkFailure` and body
/// validation problems to `MalformedResponse`, tagged with the endpoint.
/// They do not retry.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch raw historical price rows in source (chronological) order.
    async fn historical_prices(&self) -> Result<Vec<RawPriceRecord>, RegimeError>;

    /// Fetch the key events.
    async fn key_events(&self) -> Result<Vec<KeyEvent>, RegimeError>;

    /// Fetch the change-point result; `Ok(None)` when the backend has none.
    async fn change_point(&self) -> Result<Option<ChangePointResult>, RegimeError>;
}
