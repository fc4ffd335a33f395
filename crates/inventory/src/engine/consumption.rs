//! Trailing-window consumption estimate.
//!
//! Both streams use a flat average over the window: total material drawn in
//! `[now - W, now]` divided by `W`. No smoothing or weighting is applied, so
//! short windows and sparse order volume give noisy rates.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use millwork_core::{MaterialId, ProductId};

use crate::bom::BomIndex;
use crate::demand::{DemandCategories, DemandStream, OrderDemandRecord, ProductionOutputRecord};
use crate::error::{DerivationWarning, MrpError, MrpResult};

/// Closed interval `[now - days, now]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumptionWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    days: u32,
}

impl ConsumptionWindow {
    pub fn trailing(now: DateTime<Utc>, days: u32) -> MrpResult<Self> {
        if days == 0 {
            return Err(MrpError::InvalidWindow(days));
        }
        Ok(Self {
            start: now - Duration::days(i64::from(days)),
            end: now,
            days,
        })
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }

    /// Day-granular records are stamped at midnight UTC, so the day of
    /// `now - days` only counts when the window starts exactly at midnight.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(date.and_time(NaiveTime::MIN).and_utc())
    }
}

/// Windowed unit totals per product, collected once per derivation.
#[derive(Debug, Clone, Default)]
pub struct DemandSignals {
    output_by_product: HashMap<ProductId, f64>,
    ordered_by_product: HashMap<ProductId, f64>,
    days: f64,
}

impl DemandSignals {
    /// Untagged output is credited to the only continuous-demand product.
    /// With several continuous products it cannot be attributed, so it is
    /// skipped and reported as a single [`DerivationWarning::UnattributedOutput`].
    pub fn collect(
        window: &ConsumptionWindow,
        output: &[ProductionOutputRecord],
        orders: &[OrderDemandRecord],
        categories: &DemandCategories,
    ) -> (Self, Vec<DerivationWarning>) {
        let mut signals = Self {
            days: f64::from(window.days()),
            ..Self::default()
        };
        let sole_continuous = categories.sole_continuous();
        let mut skipped_records = 0usize;
        let mut skipped_units = 0u64;

        for record in output.iter().filter(|r| window.contains_date(r.output_date)) {
            match record.attributed_to(sole_continuous) {
                Some(product_id) if categories.is_continuous(product_id) => {
                    *signals.output_by_product.entry(product_id).or_default() +=
                        f64::from(record.quantity_produced);
                }
                Some(_) => {}
                None if categories.continuous_count() > 1 => {
                    skipped_records += 1;
                    skipped_units += u64::from(record.quantity_produced);
                }
                None => {}
            }
        }

        for order in orders.iter().filter(|o| window.contains(o.demand_at())) {
            for item in &order.items {
                if !categories.is_discrete(item.product_id) {
                    continue;
                }
                *signals.ordered_by_product.entry(item.product_id).or_default() +=
                    f64::from(item.quantity);
            }
        }

        let mut warnings = Vec::new();
        if skipped_records > 0 {
            warnings.push(DerivationWarning::UnattributedOutput {
                records: skipped_records,
                quantity_produced: skipped_units,
            });
        }

        (signals, warnings)
    }

    /// Average daily units of `product_id` produced in the window.
    pub fn avg_daily_output(&self, product_id: ProductId) -> f64 {
        self.output_by_product.get(&product_id).copied().unwrap_or(0.0) / self.days
    }

    /// Average daily units of `product_id` ordered in the window.
    pub fn avg_daily_orders(&self, product_id: ProductId) -> f64 {
        self.ordered_by_product.get(&product_id).copied().unwrap_or(0.0) / self.days
    }
}

/// Per-stream daily consumption of one material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRate {
    pub continuous: f64,
    pub discrete: f64,
}

impl ConsumptionRate {
    pub fn total(&self) -> f64 {
        self.continuous + self.discrete
    }
}

/// Sum each stream over every BOM link of the material. Each stream is
/// clamped at zero independently.
pub fn estimate(material_id: MaterialId, boms: &BomIndex, signals: &DemandSignals) -> ConsumptionRate {
    let continuous: f64 = boms
        .stream_links(material_id, DemandStream::Continuous)
        .map(|link| signals.avg_daily_output(link.product_id) * link.quantity_per_product)
        .sum();

    let discrete: f64 = boms
        .stream_links(material_id, DemandStream::Discrete)
        .map(|link| signals.avg_daily_orders(link.product_id) * link.quantity_per_product)
        .sum();

    ConsumptionRate {
        continuous: continuous.max(0.0),
        discrete: discrete.max(0.0),
    }
}
