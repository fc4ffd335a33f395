use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use millwork_core::MaterialId;

use crate::engine::{MaterialProfile, StockoutEstimate};

/// Urgency bucket for a replenishment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl ReorderPriority {
    pub fn from_days_until_reorder(days: StockoutEstimate) -> Self {
        match days {
            StockoutEstimate::Days(0) => ReorderPriority::Urgent,
            StockoutEstimate::Days(d) if d <= 7 => ReorderPriority::High,
            StockoutEstimate::Days(d) if d <= 14 => ReorderPriority::Medium,
            _ => ReorderPriority::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentLine {
    pub material_id: MaterialId,
    pub code: String,
    pub name: String,
    pub current_stock: f64,
    pub reorder_point: u64,
    pub needs_immediate_reorder: bool,
    pub days_until_reorder: StockoutEstimate,
    pub priority: ReorderPriority,
    /// Day the stock is expected to reach the reorder point.
    pub reorder_date: Option<NaiveDate>,
    /// Latest day to place the order given the material's lead time.
    pub order_by_date: Option<NaiveDate>,
    pub lead_time_days: u32,
    pub recommended_order_qty: f64,
    pub recommended_order_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentSummary {
    pub immediate_reorders: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub total_reorder_value: f64,
}

/// When each material must be reordered, and how much.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplenishmentSchedule {
    pub as_of: NaiveDate,
    pub lines: Vec<ReplenishmentLine>,
    pub summary: ReplenishmentSummary,
}

impl ReplenishmentSchedule {
    /// Lines are ordered by days until reorder (unbounded last), then code.
    pub fn from_profiles(profiles: &[MaterialProfile], today: NaiveDate) -> Self {
        let mut lines: Vec<ReplenishmentLine> =
            profiles.iter().map(|p| schedule_line(p, today)).collect();

        lines.sort_by(|a, b| {
            a.days_until_reorder
                .cmp(&b.days_until_reorder)
                .then_with(|| a.code.cmp(&b.code))
        });

        let summary = ReplenishmentSummary {
            immediate_reorders: lines.iter().filter(|l| l.needs_immediate_reorder).count(),
            high_priority: lines
                .iter()
                .filter(|l| l.priority == ReorderPriority::High)
                .count(),
            medium_priority: lines
                .iter()
                .filter(|l| l.priority == ReorderPriority::Medium)
                .count(),
            total_reorder_value: lines.iter().map(|l| l.recommended_order_value).sum(),
        };

        Self {
            as_of: today,
            lines,
            summary,
        }
    }
}

fn days_until_reorder(profile: &MaterialProfile) -> StockoutEstimate {
    if profile.needs_reorder {
        return StockoutEstimate::Days(0);
    }
    let headroom = profile.available_quantity - profile.reorder_point as f64;
    StockoutEstimate::from_rate(headroom, profile.avg_daily_consumption)
}

fn schedule_line(profile: &MaterialProfile, today: NaiveDate) -> ReplenishmentLine {
    let days = days_until_reorder(profile);

    let reorder_date = days
        .days()
        .and_then(|d| today.checked_add_days(Days::new(d)));
    let order_by_date = reorder_date
        .and_then(|d| d.checked_sub_days(Days::new(u64::from(profile.lead_time_days))));

    let recommended_order_qty = if profile.needs_reorder {
        (profile.max_level as f64 - profile.available_quantity).max(0.0)
    } else {
        0.0
    };

    ReplenishmentLine {
        material_id: profile.material_id,
        code: profile.code.clone(),
        name: profile.name.clone(),
        current_stock: profile.available_quantity,
        reorder_point: profile.reorder_point,
        needs_immediate_reorder: profile.needs_reorder,
        days_until_reorder: days,
        priority: ReorderPriority::from_days_until_reorder(days),
        reorder_date,
        order_by_date,
        lead_time_days: profile.lead_time_days,
        recommended_order_qty,
        recommended_order_value: recommended_order_qty * profile.standard_cost,
    }
}
