use serde::{Deserialize, Serialize};

use crate::material::Material;

/// Days of consumption held as safety stock.
pub const SAFETY_DAYS: u32 = 14;

/// Days of consumption used for the derived max level.
pub const MAX_LEVEL_DAYS: u32 = 30;

/// Integer stock-control levels. Invariant: `reorder_point >= safety_stock`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockThresholds {
    pub safety_stock: u64,
    pub reorder_point: u64,
    pub max_level: u64,
}

/// Manual levels entered per material. Zero means "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdOverrides {
    pub safety_stock: Option<u64>,
    pub reorder_point: Option<u64>,
    pub max_level: Option<u64>,
}

impl From<&Material> for ThresholdOverrides {
    fn from(material: &Material) -> Self {
        Self {
            safety_stock: material.critical_stock,
            reorder_point: material.reorder_level,
            max_level: material.max_level,
        }
    }
}

/// Derive thresholds from a daily rate and lead time.
///
/// - `safety_stock = ceil(rate * SAFETY_DAYS)`
/// - `reorder_point = safety_stock + ceil(rate * lead_time_days)`
/// - `max_level = ceil(rate * MAX_LEVEL_DAYS)`
///
/// A positive override replaces the derived value; an overridden reorder point
/// is raised to the safety stock if it would fall below it.
pub fn calculate(rate: f64, lead_time_days: u32, overrides: &ThresholdOverrides) -> StockThresholds {
    let safety_stock = positive(overrides.safety_stock)
        .unwrap_or_else(|| ceil_units(rate * f64::from(SAFETY_DAYS)));

    let reorder_point = match positive(overrides.reorder_point) {
        Some(level) => level.max(safety_stock),
        None => safety_stock + ceil_units(rate * f64::from(lead_time_days)),
    };

    let max_level = positive(overrides.max_level)
        .unwrap_or_else(|| ceil_units(rate * f64::from(MAX_LEVEL_DAYS)));

    StockThresholds {
        safety_stock,
        reorder_point,
        max_level,
    }
}

fn positive(value: Option<u64>) -> Option<u64> {
    value.filter(|v| *v > 0)
}

/// Round up to whole units; values within 1e-9 of an integer snap to it so
/// float noise (e.g. `0.1 * 30`) does not add a unit.
fn ceil_units(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let nearest = value.round();
    if (value - nearest).abs() < 1e-9 {
        nearest as u64
    } else {
        value.ceil() as u64
    }
}
