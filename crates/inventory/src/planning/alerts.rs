use serde::{Deserialize, Serialize};

use millwork_core::MaterialId;

use crate::engine::{MaterialProfile, StockStatus};

/// Ordered most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Critical,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlert {
    pub material_id: MaterialId,
    pub code: String,
    pub stock_status: StockStatus,
    pub severity: AlertSeverity,
    pub current_stock: f64,
    pub reorder_point: u64,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub total_alerts: usize,
    pub critical: usize,
    pub high: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlerts {
    pub alerts: Vec<StockAlert>,
    pub summary: AlertSummary,
}

impl StockAlerts {
    pub fn from_profiles(profiles: &[MaterialProfile]) -> Self {
        let mut alerts: Vec<StockAlert> = profiles.iter().filter_map(alert_for).collect();
        alerts.sort_by(|a, b| a.severity.cmp(&b.severity).then_with(|| a.code.cmp(&b.code)));

        let summary = AlertSummary {
            total_alerts: alerts.len(),
            critical: alerts
                .iter()
                .filter(|a| a.severity == AlertSeverity::Critical)
                .count(),
            high: alerts
                .iter()
                .filter(|a| a.severity == AlertSeverity::High)
                .count(),
        };

        Self { alerts, summary }
    }
}

fn alert_for(profile: &MaterialProfile) -> Option<StockAlert> {
    let (severity, message) = match profile.stock_status {
        StockStatus::InStock => return None,
        StockStatus::OutOfStock => (
            AlertSeverity::Critical,
            format!("{} ({}) is out of stock", profile.name, profile.code),
        ),
        StockStatus::Low | StockStatus::Critical => (
            AlertSeverity::High,
            format!(
                "{} ({}) is at or below its reorder point of {} {}",
                profile.name, profile.code, profile.reorder_point, profile.unit_of_measure
            ),
        ),
    };

    Some(StockAlert {
        material_id: profile.material_id,
        code: profile.code.clone(),
        stock_status: profile.stock_status,
        severity,
        current_stock: profile.available_quantity,
        reorder_point: profile.reorder_point,
        message,
    })
}
