//! Regime-specific data transfer objects, error and configuration primitives.
//!
//! - `wire`: the JSON shapes served by the dashboard backend.
//! - `endpoint`: labels for the three backend endpoints.
//! - `error`: the workspace-wide `RegimeError`.
//! - `config`: `RegimeConfig` (base address and timeouts).
#![warn(missing_docs)]

mod config;
mod endpoint;
mod error;
mod wire;

pub use config::{DEFAULT_BASE_URL, RegimeConfig};
pub use endpoint::Endpoint;
pub use error::RegimeError;
pub use wire::{ChangePointResult, KeyEvent, RawPrice, RawPriceRecord};
