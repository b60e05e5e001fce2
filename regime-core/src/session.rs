use std::sync::Arc;

use crate::DashboardSnapshot;
use regime_types::RegimeError;

/// Lifecycle of one dashboard session.
///
/// ```text
/// Idle -> Loading -> Ready(snapshot)
///                 \-> Failed(error)
/// ```
///
/// `Loading` is entered once. `Ready` and `Failed` are terminal; there is no
/// retry or cancellation path.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// The three retrievals are in flight.
    Loading,
    /// All data fetched and aligned.
    Ready(Arc<DashboardSnapshot>),
    /// Fetch or normalization failed; nothing partial is exposed.
    Failed(RegimeError),
}

impl SessionState {
    /// Short name for logs and transition errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }

    /// Validate a move to `next`, returning the new state.
    ///
    /// Allowed: `Idle -> Loading`, `Loading -> Ready`, `Loading -> Failed`.
    ///
    /// # Errors
    /// Returns `InvalidTransition` for every other pair.
    pub fn transition(&self, next: Self) -> Result<Self, RegimeError> {
        match (self, &next) {
            (Self::Idle, Self::Loading)
            | (Self::Loading, Self::Ready(_) | Self::Failed(_)) => Ok(next),
            _ => Err(RegimeError::InvalidTransition {
                from: self.name().to_string(),
                to: next.name().to_string(),
            }),
        }
    }

    /// True for `Ready` and `Failed`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    /// The snapshot, when `Ready`.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&Arc<DashboardSnapshot>> {
        match self {
            Self::Ready(s) => Some(s),
            _ => None,
        }
    }

    /// The failure, when `Failed`.
    #[must_use]
    pub const fn error(&self) -> Option<&RegimeError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}
