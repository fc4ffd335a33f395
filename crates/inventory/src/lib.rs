//! Inventory planning module: material requirements derivation.
//!
//! Given raw material records, bill-of-materials entries and two trailing
//! demand signals (continuous production output and accepted made-to-order
//! orders), this crate derives one [`MaterialProfile`] per material:
//! consumption rate, stock-control thresholds, stock status and a stockout
//! estimate. Everything is recomputed from the input snapshot on every call;
//! nothing here performs IO or keeps state between calls.

pub mod bom;
pub mod config;
pub mod demand;
pub mod engine;
pub mod error;
pub mod material;
pub mod planning;
pub mod snapshot;

pub use bom::{BillOfMaterialEntry, BomIndex};
pub use config::MrpConfig;
pub use demand::{
    DemandCategories, DemandStream, OrderDemandRecord, OrderLineItem, ProductionOutputRecord,
};
pub use engine::{
    ConsumptionRate, ConsumptionWindow, DemandClass, MAX_LEVEL_DAYS, MaterialProfile, MrpEngine,
    MrpReport, ProfileSummary, SAFETY_DAYS, StockAssessment, StockStatus, StockThresholds,
    StockoutEstimate, ThresholdOverrides,
};
pub use error::{DerivationWarning, MrpError, MrpResult};
pub use material::Material;
pub use planning::{
    AbcAnalysis, AbcClass, AlertSeverity, ReorderPriority, ReplenishmentSchedule, StockAlerts,
    UsageForecast,
};
pub use snapshot::MrpSnapshot;
