use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use regime_core::{
    ChangePointResult, DashboardSource, Endpoint, KeyEvent, RawPriceRecord, RegimeError,
};

use crate::{fixture_change_point, fixture_events, fixture_prices};

/// Instruction for how an endpoint should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after sleeping (tokio time).
    ReturnAfter(Duration, T),
    /// Fail immediately with the provided error.
    Fail(RegimeError),
    /// Hang indefinitely (simulate a stalled request).
    Hang,
}

impl<T> MockBehavior<T> {
    async fn resolve(self) -> Result<T, RegimeError> {
        match self {
            Self::Return(v) => Ok(v),
            Self::ReturnAfter(delay, v) => {
                tokio::time::sleep(delay).await;
                Ok(v)
            }
            Self::Fail(e) => Err(e),
            Self::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}

struct InternalState {
    prices: MockBehavior<Vec<RawPriceRecord>>,
    events: MockBehavior<Vec<KeyEvent>>,
    change_point: MockBehavior<Option<ChangePointResult>>,
    calls: HashMap<Endpoint, usize>,
}

impl Default for InternalState {
    fn default() -> Self {
        Self {
            prices: MockBehavior::Return(fixture_prices()),
            events: MockBehavior::Return(fixture_events()),
            change_point: MockBehavior::Return(Some(fixture_change_point())),
            calls: HashMap::new(),
        }
    }
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
///
/// Every endpoint starts out returning the crate fixtures.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `historical_prices`.
    pub async fn set_prices_behavior(&self, behavior: MockBehavior<Vec<RawPriceRecord>>) {
        self.state.lock().await.prices = behavior;
    }

    /// Set the behavior for `key_events`.
    pub async fn set_events_behavior(&self, behavior: MockBehavior<Vec<KeyEvent>>) {
        self.state.lock().await.events = behavior;
    }

    /// Set the behavior for `change_point`.
    pub async fn set_change_point_behavior(
        &self,
        behavior: MockBehavior<Option<ChangePointResult>>,
    ) {
        self.state.lock().await.change_point = behavior;
    }

    /// Make one endpoint fail with `err`, leaving the others untouched.
    pub async fn fail(&self, endpoint: Endpoint, err: RegimeError) {
        let mut guard = self.state.lock().await;
        match endpoint {
            Endpoint::HistoricalPrices => guard.prices = MockBehavior::Fail(err),
            Endpoint::KeyEvents => guard.events = MockBehavior::Fail(err),
            Endpoint::ChangePointResults => guard.change_point = MockBehavior::Fail(err),
        }
    }

    /// Make one endpoint hang forever.
    pub async fn hang(&self, endpoint: Endpoint) {
        let mut guard = self.state.lock().await;
        match endpoint {
            Endpoint::HistoricalPrices => guard.prices = MockBehavior::Hang,
            Endpoint::KeyEvents => guard.events = MockBehavior::Hang,
            Endpoint::ChangePointResults => guard.change_point = MockBehavior::Hang,
        }
    }

    /// Number of times `endpoint` has been requested.
    pub async fn calls(&self, endpoint: Endpoint) -> usize {
        let guard = self.state.lock().await;
        guard.calls.get(&endpoint).copied().unwrap_or(0)
    }

    /// Restore fixture behavior on every endpoint and clear the call log.
    pub async fn reset(&self) {
        *self.state.lock().await = InternalState::default();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn DashboardSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn DashboardSource>, controller)
    }

    // Log the call and snapshot the behavior without holding the lock across awaits.
    async fn take<T: Clone>(
        &self,
        endpoint: Endpoint,
        pick: impl FnOnce(&InternalState) -> &MockBehavior<T>,
    ) -> MockBehavior<T> {
        let mut guard = self.state.lock().await;
        *guard.calls.entry(endpoint).or_default() += 1;
        pick(&guard).clone()
    }
}

#[async_trait]
impl DashboardSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn historical_prices(&self) -> Result<Vec<RawPriceRecord>, RegimeError> {
        self.take(Endpoint::HistoricalPrices, |s| &s.prices)
            .await
            .resolve()
            .await
    }

    async fn key_events(&self) -> Result<Vec<KeyEvent>, RegimeError> {
        self.take(Endpoint::KeyEvents, |s| &s.events)
            .await
            .resolve()
            .await
    }

    async fn change_point(&self) -> Result<Option<ChangePointResult>, RegimeError> {
        self.take(Endpoint::ChangePointResults, |s| &s.change_point)
            .await
            .resolve()
            .await
    }
}
