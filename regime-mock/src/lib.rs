//! regime-mock
//!
//! Dashboard sources for CI-safe tests and examples:
//! - [`MockSource`] serves fixed Brent fixtures around the 2008 regime shift.
//! - [`DynamicMockSource`] defers every endpoint to a [`DynamicMockController`]
//!   so tests can inject failures, hangs and delays.

use async_trait::async_trait;
use regime_core::{ChangePointResult, DashboardSource, KeyEvent, RawPriceRecord, RegimeError};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Change-point date of the fixture result; it has a matching observation.
pub const FIXTURE_CHANGE_POINT_DATE: &str = "2008-08-21";

/// Fixture price rows (30 weekdays, mixed string/number prices).
#[must_use]
pub fn fixture_prices() -> Vec<RawPriceRecord> {
    fixtures::prices::rows()
}

/// Fixture key events; three of six fall on days without an observation.
#[must_use]
pub fn fixture_events() -> Vec<KeyEvent> {
    fixtures::events::rows()
}

/// Fixture change-point result.
#[must_use]
pub fn fixture_change_point() -> ChangePointResult {
    fixtures::change_point::result()
}

/// Mock source for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DashboardSource for MockSource {
    fn name(&self) -> &'static str {
        "regime-mock"
    }

    async fn historical_prices(&self) -> Result<Vec<RawPriceRecord>, RegimeError> {
        Ok(fixture_prices())
    }

    async fn key_events(&self) -> Result<Vec<KeyEvent>, RegimeError> {
        Ok(fixture_events())
    }

    async fn change_point(&self) -> Result<Option<ChangePointResult>, RegimeError> {
        Ok(Some(fixture_change_point()))
    }
}
