use std::sync::Arc;

use tokio::sync::watch;

use regime_core::{DashboardSnapshot, RegimeError, SessionState};

use crate::Regime;

/// Drives one dashboard load and publishes its state.
///
/// The current [`SessionState`] lives in a `watch` channel; every accepted
/// transition is a single send, so subscribers never observe a partially
/// built snapshot. A session loads at most once.
pub struct Session {
    state: watch::Sender<SessionState>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an idle session.
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        Self { state }
    }

    /// Subscribe to state changes. The receiver starts at the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Current state (cloned; snapshots are shared through `Arc`).
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Wait until the session reaches `Ready` or `Failed`.
    pub async fn settled(&self) -> SessionState {
        let mut rx = self.subscribe();
        match rx.wait_for(SessionState::is_terminal).await {
            Ok(state) => state.clone(),
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => self.state(),
        }
    }

    /// Load the dashboard: `Idle -> Loading`, then `Ready` or `Failed`.
    ///
    /// # Errors
    /// - `InvalidTransition` if the session already left `Idle`; the state is
    ///   left untouched.
    /// - Any fetch or normalization error, which is also published as `Failed`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "regime::session::load",
            skip(self, regime),
            fields(source = regime.source_name()),
        )
    )]
    pub async fn load(&self, regime: &Regime) -> Result<Arc<DashboardSnapshot>, RegimeError> {
        self.advance(SessionState::Loading)?;
        match regime.snapshot().await {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.advance(SessionState::Ready(Arc::clone(&snapshot)))?;
                Ok(snapshot)
            }
            Err(e) => {
                self.advance(SessionState::Failed(e.clone()))?;
                Err(e)
            }
        }
    }

    // Validate and publish under the channel lock so racing loads cannot both
    // leave Idle.
    fn advance(&self, next: SessionState) -> Result<(), RegimeError> {
        let mut outcome = Ok(());
        self.state.send_if_modified(|current| match current.transition(next) {
            Ok(state) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(from = current.name(), to = state.name(), "session transition");
                *current = state;
                true
            }
            Err(e) => {
                outcome = Err(e);
                false
            }
        });
        outcome
    }
}
