//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{MrpError, MrpResult};

pub const ENV_WINDOW_DAYS: &str = "MILLWORK_WINDOW_DAYS";
pub const ENV_FORECAST_HORIZON_DAYS: &str = "MILLWORK_FORECAST_HORIZON_DAYS";
pub const ENV_DEFAULT_LEAD_TIME_DAYS: &str = "MILLWORK_DEFAULT_LEAD_TIME_DAYS";

/// Tunables for a derivation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrpConfig {
    /// Trailing window used to average both demand streams.
    pub window_days: u32,
    /// Horizon for the usage forecast view.
    pub forecast_horizon_days: u32,
    /// Lead time applied to materials without one.
    pub default_lead_time_days: u32,
}

impl Default for MrpConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            forecast_horizon_days: 30,
            default_lead_time_days: 7,
        }
    }
}

impl MrpConfig {
    pub fn with_window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    pub fn with_forecast_horizon_days(mut self, days: u32) -> Self {
        self.forecast_horizon_days = days;
        self
    }

    pub fn with_default_lead_time_days(mut self, days: u32) -> Self {
        self.default_lead_time_days = days;
        self
    }

    pub fn validate(&self) -> MrpResult<()> {
        if self.window_days == 0 {
            return Err(MrpError::InvalidWindow(self.window_days));
        }
        if self.forecast_horizon_days == 0 {
            return Err(MrpError::invalid_config(
                "forecast_horizon_days must be at least one day",
            ));
        }
        Ok(())
    }

    /// Load from `MILLWORK_*` environment variables; unset variables keep
    /// their defaults.
    pub fn from_env() -> MrpResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`MrpConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MrpResult<Self> {
        let defaults = Self::default();
        let config = Self {
            window_days: read_days(&lookup, ENV_WINDOW_DAYS, defaults.window_days)?,
            forecast_horizon_days: read_days(
                &lookup,
                ENV_FORECAST_HORIZON_DAYS,
                defaults.forecast_horizon_days,
            )?,
            default_lead_time_days: read_days(
                &lookup,
                ENV_DEFAULT_LEAD_TIME_DAYS,
                defaults.default_lead_time_days,
            )?,
        };
        config.validate()?;
        Ok(config)
    }
}

fn read_days(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u32) -> MrpResult<u32> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|e| MrpError::invalid_config(format!("{key}={raw:?}: {e}"))),
    }
}
