//! regime-core
//!
//! Core types, traits, and utilities shared across the regime workspace.
//!
//! - `day`: the day-granularity `CalendarDay` key and its truncation rule.
//! - `types`: normalized observations and the derived chart markers.
//! - `source`: the `DashboardSource` trait implemented by backends.
//! - `series`: normalizer, day index, event aligner and change-point locator.
//! - `snapshot`: one immutable, render-ready `DashboardSnapshot`.
//! - `session`: the `SessionState` machine governing a dashboard session.
//!
//! Everything here except `DashboardSource` is synchronous: once the three
//! datasets are joined, normalization and alignment run to completion without
//! suspension.
#![warn(missing_docs)]

/// Day-granularity date key.
pub mod day;
/// Session state machine.
pub mod session;
/// Source trait implemented by backends.
pub mod source;
/// Series normalization and alignment.
pub mod series;
/// Render-ready snapshot assembly.
pub mod snapshot;
pub mod types;

pub use day::CalendarDay;
pub use regime_types::{
    ChangePointResult, DEFAULT_BASE_URL, Endpoint, KeyEvent, RawPrice, RawPriceRecord,
    RegimeConfig, RegimeError,
};
pub use series::align::{align_events, align_events_with};
pub use series::index::DayIndex;
pub use series::locate::{locate_change_point, locate_change_point_with};
pub use series::normalize::{coerce_price, normalize_record, normalize_series};
pub use series::is_chronological;
pub use session::SessionState;
pub use snapshot::DashboardSnapshot;
pub use source::DashboardSource;
pub use types::*;
