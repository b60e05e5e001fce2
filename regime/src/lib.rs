//! Regime assembles the volatility-regime dashboard from a backend source.
//!
//! Overview
//! - Fetches historical prices, key events and the change-point result
//!   concurrently from one [`DashboardSource`] (a single join, no spawned tasks).
//! - All-or-nothing: any endpoint failure, malformed body or timeout fails the
//!   whole fetch; partial data is never exposed.
//! - Normalizes the price series to calendar days, drops key events that do not
//!   land on an observation, and places the change-point marker with its
//!   highlighted post-change range.
//! - [`Session`] drives the `Idle -> Loading -> Ready | Failed` lifecycle and
//!   publishes each state through a `tokio::sync::watch` channel.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use regime::{Regime, Session};
//! use regime_http::HttpSource;
//!
//! let source = Arc::new(HttpSource::new("http://127.0.0.1:5000")?);
//! let regime = Regime::builder()
//!     .with_source(source)
//!     .endpoint_timeout(Some(std::time::Duration::from_secs(10)))
//!     .build()?;
//!
//! let session = Session::new();
//! let mut states = session.subscribe();
//! let snapshot = session.load(&regime).await?;
//! if let Some(marker) = snapshot.marker() {
//!     println!("regime change at {} (index {})", marker.date, marker.index);
//! }
//! ```
//!
//! See `regime/examples/` for runnable demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod fetch;
mod session;
mod util;

pub use crate::core::{Regime, RegimeBuilder};
pub use session::Session;
pub use util::{collapse_errors, with_deadline};

// Re-export core types for convenience
pub use regime_core::{
    AlignedEvent, CalendarDay, ChangePointMarker, ChangePointOverlay, ChangePointResult,
    DEFAULT_BASE_URL, DashboardSnapshot, DashboardSource, Endpoint, KeyEvent, PriceObservation,
    RawDataset, RawPrice, RawPriceRecord, RegimeConfig, RegimeError, SessionState,
};
