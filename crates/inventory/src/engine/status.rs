use serde::{Deserialize, Serialize};

use super::thresholds::StockThresholds;

/// Stock-status staircase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    Low,
    Critical,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::Low => "low",
            StockStatus::Critical => "critical",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }

    pub fn is_critical_or_out(&self) -> bool {
        matches!(self, StockStatus::Critical | StockStatus::OutOfStock)
    }
}

/// Days of cover left at the current rate.
///
/// `Unbounded` sorts after every finite estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockoutEstimate {
    Days(u64),
    Unbounded,
}

impl StockoutEstimate {
    pub fn days(&self) -> Option<u64> {
        match self {
            StockoutEstimate::Days(d) => Some(*d),
            StockoutEstimate::Unbounded => None,
        }
    }

    /// `floor(quantity / rate)`, or `Unbounded` when nothing is consumed.
    pub fn from_rate(quantity: f64, rate: f64) -> Self {
        if rate > 0.0 {
            StockoutEstimate::Days((quantity.max(0.0) / rate).floor() as u64)
        } else {
            StockoutEstimate::Unbounded
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAssessment {
    pub stock_status: StockStatus,
    pub needs_reorder: bool,
    pub days_until_stockout: StockoutEstimate,
}

/// Classify available quantity against thresholds.
///
/// Checks run in order and the first match wins: out of stock, at or below
/// the reorder point, at or below safety stock, otherwise in stock. Since
/// `reorder_point >= safety_stock`, the critical branch only fires if that
/// invariant is ever relaxed.
pub fn assess(quantity: f64, rate: f64, thresholds: &StockThresholds) -> StockAssessment {
    let reorder_point = thresholds.reorder_point as f64;
    let safety_stock = thresholds.safety_stock as f64;

    let stock_status = if quantity <= 0.0 {
        StockStatus::OutOfStock
    } else if quantity <= reorder_point {
        StockStatus::Low
    } else if quantity <= safety_stock {
        StockStatus::Critical
    } else {
        StockStatus::InStock
    };

    StockAssessment {
        stock_status,
        needs_reorder: quantity <= reorder_point,
        days_until_stockout: StockoutEstimate::from_rate(quantity, rate),
    }
}
