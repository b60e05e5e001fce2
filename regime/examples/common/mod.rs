use std::sync::Arc;

use regime::{DEFAULT_BASE_URL, DashboardSource, RegimeConfig, RegimeError};

/// Backend config from the environment (`REGIME_API_BASE_URL`), defaults otherwise.
#[must_use]
pub fn config_from_env() -> RegimeConfig {
    RegimeConfig {
        base_url: std::env::var("REGIME_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        ..RegimeConfig::default()
    }
}

/// Mock source in CI when `REGIME_EXAMPLES_USE_MOCK` is set, HTTP otherwise.
pub fn get_source(cfg: &RegimeConfig) -> Result<Arc<dyn DashboardSource>, RegimeError> {
    if std::env::var("REGIME_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        Ok(Arc::new(regime_mock::MockSource::new()))
    } else {
        Ok(Arc::new(regime_http::HttpSource::from_config(cfg)?))
    }
}
