use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Endpoint;

/// Unified error type for the regime workspace.
///
/// Covers retrieval failures per endpoint, boundary validation of response
/// bodies, price coercion, timeouts, an aggregate for multi-endpoint failures
/// and illegal session transitions.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegimeError {
    /// The request could not be issued or returned a non-success status.
    #[error("{endpoint} request failed: {msg}")]
    NetworkFailure {
        /// Endpoint whose retrieval failed.
        endpoint: Endpoint,
        /// Human-readable error message.
        msg: String,
    },

    /// The body was not valid JSON or lacked required fields.
    #[error("malformed {endpoint} response: {msg}")]
    MalformedResponse {
        /// Endpoint whose body was rejected.
        endpoint: Endpoint,
        /// Description of what was wrong with the body.
        msg: String,
    },

    /// A price field could not be parsed as a finite number.
    #[error("price at row {row} is not numeric: {value:?}")]
    CoercionFailure {
        /// Zero-based position of the offending record in the source order.
        row: usize,
        /// The raw value as received.
        value: String,
    },

    /// A single endpoint exceeded the configured per-endpoint timeout.
    #[error("{endpoint} request timed out")]
    EndpointTimeout {
        /// Endpoint that timed out.
        endpoint: Endpoint,
    },

    /// The joined fetch exceeded the overall request deadline.
    #[error("dashboard fetch timed out")]
    RequestTimeout,

    /// More than one endpoint failed; contains the individual failures.
    #[error("dashboard fetch failed: {0:?}")]
    FetchFailed(Vec<RegimeError>),

    /// Invalid configuration or argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A session state change that the state machine does not allow.
    #[error("invalid session transition: {from} -> {to}")]
    InvalidTransition {
        /// Name of the state the session was in.
        from: String,
        /// Name of the rejected target state.
        to: String,
    },
}

impl RegimeError {
    /// Helper: build a `NetworkFailure` for an endpoint.
    pub fn network(endpoint: Endpoint, msg: impl Into<String>) -> Self {
        Self::NetworkFailure {
            endpoint,
            msg: msg.into(),
        }
    }

    /// Helper: build a `MalformedResponse` for an endpoint.
    pub fn malformed(endpoint: Endpoint, msg: impl Into<String>) -> Self {
        Self::MalformedResponse {
            endpoint,
            msg: msg.into(),
        }
    }

    /// Helper: build a `CoercionFailure` for a record position and raw value.
    pub fn coercion(row: usize, value: impl Into<String>) -> Self {
        Self::CoercionFailure {
            row,
            value: value.into(),
        }
    }

    /// Helper: build an `EndpointTimeout`.
    #[must_use]
    pub const fn endpoint_timeout(endpoint: Endpoint) -> Self {
        Self::EndpointTimeout { endpoint }
    }

    /// Returns true for failures of the transport itself (including timeouts).
    ///
    /// Aggregates are network-class only when every member is.
    #[must_use]
    pub fn is_network(&self) -> bool {
        match self {
            Self::NetworkFailure { .. } | Self::EndpointTimeout { .. } | Self::RequestTimeout => {
                true
            }
            Self::FetchFailed(inner) => !inner.is_empty() && inner.iter().all(Self::is_network),
            _ => false,
        }
    }

    /// Endpoint this error is attributed to, if any.
    #[must_use]
    pub const fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::NetworkFailure { endpoint, .. }
            | Self::MalformedResponse { endpoint, .. }
            | Self::EndpointTimeout { endpoint } => Some(*endpoint),
            Self::CoercionFailure { .. } => Some(Endpoint::HistoricalPrices),
            _ => None,
        }
    }

    /// Flatten nested `FetchFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::FetchFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
