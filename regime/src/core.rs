use std::sync::Arc;
use std::time::Duration;

use regime_core::{DashboardSource, Endpoint, RegimeConfig, RegimeError};

/// Orchestrator that fetches and assembles the dashboard from one source.
pub struct Regime {
    pub(crate) source: Arc<dyn DashboardSource>,
    pub(crate) cfg: RegimeConfig,
}

/// Builder for constructing a `Regime` orchestrator with custom configuration.
pub struct RegimeBuilder {
    source: Option<Arc<dyn DashboardSource>>,
    cfg: RegimeConfig,
}

impl Default for RegimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegimeBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts without a source; register one via [`with_source`](Self::with_source).
    /// Defaults: 30s per-endpoint timeout, no overall deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: RegimeConfig::default(),
        }
    }

    /// Register the dashboard source. A later call replaces an earlier one.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn DashboardSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration.
    ///
    /// `base_url` is informational here; sources that need it (the HTTP source)
    /// are constructed from the same config by the caller.
    #[must_use]
    pub fn config(mut self, cfg: RegimeConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Timeout applied to each endpoint retrieval; `None` waits indefinitely.
    ///
    /// An expired endpoint fails the fetch with `EndpointTimeout`.
    #[must_use]
    pub const fn endpoint_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.cfg.endpoint_timeout = timeout;
        self
    }

    /// Deadline for the joined fetch of all endpoints; `None` disables it.
    ///
    /// An expired deadline fails the fetch with `RequestTimeout` and drops the
    /// in-flight retrievals.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.cfg.request_timeout = timeout;
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source was registered or a configured
    /// timeout is zero.
    pub fn build(self) -> Result<Regime, RegimeError> {
        let Some(source) = self.source else {
            return Err(RegimeError::InvalidArg(
                "no dashboard source registered".into(),
            ));
        };
        for (label, t) in [
            ("endpoint_timeout", self.cfg.endpoint_timeout),
            ("request_timeout", self.cfg.request_timeout),
        ] {
            if t.is_some_and(|d| d.is_zero()) {
                return Err(RegimeError::InvalidArg(format!("{label} must be non-zero")));
            }
        }
        Ok(Regime {
            source,
            cfg: self.cfg,
        })
    }
}

impl Regime {
    /// Start building a new `Regime` instance.
    ///
    /// ```rust,ignore
    /// let regime = Regime::builder()
    ///     .with_source(Arc::new(regime_mock::MockSource::new()))
    ///     .request_timeout(Some(Duration::from_secs(60)))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> RegimeBuilder {
        RegimeBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RegimeConfig {
        &self.cfg
    }

    /// Name of the registered source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "regime::core::endpoint_call_with_timeout",
            skip(fut),
            fields(
                endpoint = %endpoint,
                timeout_ms = timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            ),
        )
    )]
    pub(crate) async fn endpoint_call_with_timeout<T, Fut>(
        endpoint: Endpoint,
        timeout: Option<Duration>,
        fut: Fut,
    ) -> Result<T, RegimeError>
    where
        Fut: std::future::Future<Output = Result<T, RegimeError>>,
    {
        match timeout {
            Some(t) => (tokio::time::timeout(t, fut).await)
                .unwrap_or_else(|_| Err(RegimeError::endpoint_timeout(endpoint))),
            None => fut.await,
        }
    }
}
