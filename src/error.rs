//! Crate-level error types.
//!
//! Almost every adapter is total. [`AdapterError`] covers the few paths that
//! are not: an intention with no conditional-order equivalent, a ticker
//! request without historical bars, a market name the pair parser rejects,
//! and configuration loading.

use crate::domain::Intention;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The stop intention cannot be expressed as a venue conditional order.
    #[error("stop order intention {0:?} is not supported")]
    UnsupportedIntention(Intention),

    /// The ticker adapter was handed an empty bar list.
    #[error("no historical bars supplied for {market}")]
    EmptyCandles { market: String },

    /// A venue market name could not be split into a currency pair.
    #[error("malformed market name: {0:?}")]
    MalformedMarket(String),

    /// A configuration file could not be read.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
