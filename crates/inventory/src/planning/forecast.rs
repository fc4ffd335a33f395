use serde::{Deserialize, Serialize};

use millwork_core::MaterialId;

use crate::engine::{MaterialProfile, StockoutEstimate};

/// Days of cover below which a forecast line counts as critical.
pub const CRITICAL_COVER_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastLine {
    pub material_id: MaterialId,
    pub code: String,
    pub name: String,
    pub current_stock: f64,
    pub avg_daily_consumption: f64,
    pub forecasted_usage: f64,
    pub projected_stock: f64,
    pub reorder_point: u64,
    pub will_need_reorder: bool,
    pub days_until_stockout: StockoutEstimate,
    pub recommended_order_qty: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub items_will_need_reorder: usize,
    pub total_forecasted_usage: f64,
    pub items_critical: usize,
}

/// Projected usage over a fixed horizon at each material's current rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageForecast {
    pub horizon_days: u32,
    pub lines: Vec<ForecastLine>,
    pub summary: ForecastSummary,
}

impl UsageForecast {
    /// Lines are ordered by days until stockout (unbounded last), then code.
    pub fn from_profiles(profiles: &[MaterialProfile], horizon_days: u32) -> Self {
        let horizon = f64::from(horizon_days);

        let mut lines: Vec<ForecastLine> = profiles
            .iter()
            .map(|p| {
                let forecasted_usage = p.avg_daily_consumption * horizon;
                let projected_stock = p.available_quantity - forecasted_usage;
                let reorder_point = p.reorder_point as f64;
                let recommended_order_qty = if projected_stock < reorder_point {
                    (p.max_level as f64 - projected_stock).max(0.0)
                } else {
                    0.0
                };

                ForecastLine {
                    material_id: p.material_id,
                    code: p.code.clone(),
                    name: p.name.clone(),
                    current_stock: p.available_quantity,
                    avg_daily_consumption: p.avg_daily_consumption,
                    forecasted_usage,
                    projected_stock,
                    reorder_point: p.reorder_point,
                    will_need_reorder: projected_stock <= reorder_point,
                    days_until_stockout: p.days_until_stockout,
                    recommended_order_qty,
                }
            })
            .collect();

        lines.sort_by(|a, b| {
            a.days_until_stockout
                .cmp(&b.days_until_stockout)
                .then_with(|| a.code.cmp(&b.code))
        });

        let summary = ForecastSummary {
            items_will_need_reorder: lines.iter().filter(|l| l.will_need_reorder).count(),
            total_forecasted_usage: lines.iter().map(|l| l.forecasted_usage).sum(),
            items_critical: lines
                .iter()
                .filter(|l| {
                    l.days_until_stockout
                        .days()
                        .is_some_and(|d| d < CRITICAL_COVER_DAYS)
                })
                .count(),
        };

        Self {
            horizon_days,
            lines,
            summary,
        }
    }
}
