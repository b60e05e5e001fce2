// Shared fixtures and constructors so tests can `use crate::helpers::*;`
use std::sync::Arc;
use std::time::Duration;

use regime::{DashboardSource, Endpoint, Regime, RegimeError};

/// Position of the fixture change point (2008-08-21 is the ninth weekday).
pub const CHANGE_POINT_INDEX: usize = 8;
/// Positions of the three fixture events that land on an observation.
pub const ALIGNED_EVENT_INDICES: [usize; 3] = [21, 25, 26];
/// Number of fixture observations.
pub const FIXTURE_LEN: usize = 30;

/// Orchestrator over `source` with default timeouts.
pub fn regime_with(source: Arc<dyn DashboardSource>) -> Regime {
    Regime::builder()
        .with_source(source)
        .build()
        .expect("regime builds")
}

/// Orchestrator over `source` with explicit timeouts.
pub fn regime_with_timeouts(
    source: Arc<dyn DashboardSource>,
    endpoint: Option<Duration>,
    request: Option<Duration>,
) -> Regime {
    Regime::builder()
        .with_source(source)
        .endpoint_timeout(endpoint)
        .request_timeout(request)
        .build()
        .expect("regime builds")
}

/// Deterministic per-endpoint network failure.
pub fn down(endpoint: Endpoint) -> RegimeError {
    RegimeError::network(endpoint, format!("HTTP 503: {endpoint} unavailable"))
}
