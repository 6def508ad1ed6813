//! Venue configuration.
//!
//! Defaults describe FTX as documented: a single rate-limit tier of 30
//! requests per second shared by trading and market-data calls, and the
//! `margin` / `spot` wallet names. A JSON file may override any field.

use std::path::Path;

use serde::Deserialize;

use crate::domain::RateLimit;

const DEFAULT_CALLS_PER_PERIOD: u32 = 30;
const DEFAULT_PERIOD_SECS: u64 = 1;
const DEFAULT_MARGIN_WALLET_ID: &str = "margin";
const DEFAULT_SPOT_WALLET_ID: &str = "spot";

/// Venue-wide settings consumed by the account and metadata adapters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VenueConfig {
    pub rate_limits: Vec<RateLimit>,
    pub margin_wallet_id: String,
    pub spot_wallet_id: String,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            rate_limits: vec![RateLimit::new(
                DEFAULT_CALLS_PER_PERIOD,
                DEFAULT_PERIOD_SECS,
            )],
            margin_wallet_id: DEFAULT_MARGIN_WALLET_ID.to_string(),
            spot_wallet_id: DEFAULT_SPOT_WALLET_ID.to_string(),
        }
    }
}

impl VenueConfig {
    /// Loads the configuration from a JSON file. Missing fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Config`](crate::AdapterError::Config) if the
    /// file cannot be read and
    /// [`AdapterError::Json`](crate::AdapterError::Json) if it is not valid.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            crate::AdapterError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_venue() {
        let config = VenueConfig::default();
        assert_eq!(config.rate_limits, vec![RateLimit::new(30, 1)]);
        assert_eq!(config.margin_wallet_id, "margin");
        assert_eq!(config.spot_wallet_id, "spot");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: VenueConfig =
            serde_json::from_str(r#"{ "spot_wallet_id": "main" }"#).unwrap();
        assert_eq!(config.spot_wallet_id, "main");
        assert_eq!(config.margin_wallet_id, "margin");
        assert_eq!(config.rate_limits.len(), 1);
    }

    #[test]
    fn override_rate_limits() {
        let config: VenueConfig = serde_json::from_str(
            r#"{ "rate_limits": [ { "calls": 6, "period_secs": 1 }, { "calls": 100, "period_secs": 60 } ] }"#,
        )
        .unwrap();
        assert_eq!(config.rate_limits[1].calls, 100);
        assert_eq!(config.rate_limits[1].period().as_secs(), 60);
    }

    #[test]
    fn bad_json_returns_error() {
        assert!(serde_json::from_str::<VenueConfig>("not json").is_err());
    }
}
