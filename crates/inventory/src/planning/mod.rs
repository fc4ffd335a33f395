//! Planning views derived from material profiles.
//!
//! These never look at raw inputs; they re-shape a [`MrpReport`]'s profiles
//! for forecasting, purchasing and alerting screens.
//!
//! [`MrpReport`]: crate::engine::MrpReport

pub mod abc;
pub mod alerts;
pub mod forecast;
pub mod replenishment;

pub use abc::{AbcAnalysis, AbcClass, AbcLine, AbcSummary};
pub use alerts::{AlertSeverity, AlertSummary, StockAlert, StockAlerts};
pub use forecast::{ForecastLine, ForecastSummary, UsageForecast};
pub use replenishment::{
    ReorderPriority, ReplenishmentLine, ReplenishmentSchedule, ReplenishmentSummary,
};
