//! regime-http
//!
//! [`HttpSource`] implements `DashboardSource` against the analysis backend:
//! three unauthenticated GETs resolved relative to a configured base URL.
//! Bodies are validated against the wire schemas at the boundary; a
//! non-success status becomes `NetworkFailure` and an unparseable or
//! incomplete body becomes `MalformedResponse`.
#![warn(missing_docs)]

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use regime_core::{
    ChangePointResult, DashboardSource, Endpoint, KeyEvent, RawPriceRecord, RegimeConfig,
    RegimeError,
};

/// Dashboard source backed by the HTTP API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    /// Source name reported through `DashboardSource::name`.
    pub const NAME: &'static str = "regime-http";

    /// Build a source for `base_url` with a default `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, RegimeError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Build a source from a caller-provided `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` is not an absolute http(s) URL.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, RegimeError> {
        let mut base = Url::parse(base_url)
            .map_err(|e| RegimeError::InvalidArg(format!("base url {base_url:?}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(RegimeError::InvalidArg(format!(
                "base url {base_url:?}: unsupported scheme {}",
                base.scheme()
            )));
        }
        // Url::join replaces the last path segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    /// Build a source from the shared configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configured base URL is invalid.
    pub fn from_config(cfg: &RegimeConfig) -> Result<Self, RegimeError> {
        Self::new(&cfg.base_url)
    }

    /// The normalized base URL (always ends with `/`).
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Absolute URL of `endpoint` under the base URL.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the join fails.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, RegimeError> {
        self.base
            .join(endpoint.path().trim_start_matches('/'))
            .map_err(|e| RegimeError::InvalidArg(format!("{endpoint} url: {e}")))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "regime_http::get_json",
            skip(self),
            fields(endpoint = %endpoint),
            err,
        )
    )]
    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, RegimeError> {
        let url = self.endpoint_url(endpoint)?;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RegimeError::network(endpoint, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RegimeError::network(
                endpoint,
                format!("HTTP {status}: {}", backend_message(&body)),
            ));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| RegimeError::network(endpoint, e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| RegimeError::malformed(endpoint, e.to_string()))
    }
}

// Prefer the backend's `{"error": "..."}` message over the raw body.
fn backend_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(b) => b.error,
        Err(_) if body.trim().is_empty() => "<empty response>".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl DashboardSource for HttpSource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn historical_prices(&self) -> Result<Vec<RawPriceRecord>, RegimeError> {
        self.get_json(Endpoint::HistoricalPrices).await
    }

    async fn key_events(&self) -> Result<Vec<KeyEvent>, RegimeError> {
        self.get_json(Endpoint::KeyEvents).await
    }

    async fn change_point(&self) -> Result<Option<ChangePointResult>, RegimeError> {
        self.get_json(Endpoint::ChangePointResults).await
    }
}
