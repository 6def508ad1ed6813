//! FTX exchange adapters.
//!
//! Translates the venue's REST wire models into venue-agnostic trading
//! objects (order books, tickers, trades, orders, balances, positions and
//! exchange metadata), and generic orders back into request payloads.
//! Transport and JSON decoding of responses are left to the caller.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::VenueConfig;
pub use error::{AdapterError, Result};
