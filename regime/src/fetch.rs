use futures::future::join3;

use regime_core::{DashboardSnapshot, Endpoint, RawDataset, RegimeError};

use crate::core::Regime;
use crate::util::{collapse_errors, with_deadline};

impl Regime {
    /// Fetch all three endpoints concurrently and return the raw tuple.
    ///
    /// Behavior:
    /// - The retrievals are joined on the current task; each is bounded by
    ///   `endpoint_timeout` and the join by `request_timeout`.
    /// - All three must succeed. Any failure discards the other results.
    /// - One failure is returned as-is; several become `FetchFailed`.
    /// - No retries.
    ///
    /// # Errors
    /// Returns the collapsed endpoint failure(s) or `RequestTimeout`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "regime::fetch::fetch_all",
            skip(self),
            fields(source = self.source.name()),
            err,
        )
    )]
    pub async fn fetch_all(&self) -> Result<RawDataset, RegimeError> {
        let timeout = self.cfg.endpoint_timeout;
        let src = &self.source;
        let joined = join3(
            Self::endpoint_call_with_timeout(
                Endpoint::HistoricalPrices,
                timeout,
                src.historical_prices(),
            ),
            Self::endpoint_call_with_timeout(Endpoint::KeyEvents, timeout, src.key_events()),
            Self::endpoint_call_with_timeout(
                Endpoint::ChangePointResults,
                timeout,
                src.change_point(),
            ),
        );

        match with_deadline(self.cfg.request_timeout, joined).await? {
            (Ok(prices), Ok(events), Ok(change_point)) => Ok(RawDataset {
                prices,
                events,
                change_point,
            }),
            (prices, events, change_point) => {
                let errors: Vec<RegimeError> = [prices.err(), events.err(), change_point.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                #[cfg(feature = "tracing")]
                for e in &errors {
                    tracing::warn!(endpoint = ?e.endpoint(), error = %e, "endpoint retrieval failed");
                }
                Err(collapse_errors(errors))
            }
        }
    }

    /// Fetch everything and assemble the render-ready snapshot.
    ///
    /// # Errors
    /// Fetch failures as in [`fetch_all`](Self::fetch_all), plus normalization
    /// failures (`MalformedResponse`, `CoercionFailure`).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "regime::fetch::snapshot", skip(self), err)
    )]
    pub async fn snapshot(&self) -> Result<DashboardSnapshot, RegimeError> {
        let raw = self.fetch_all().await?;
        DashboardSnapshot::assemble(&raw)
    }
}
