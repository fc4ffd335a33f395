use serde::{Deserialize, Serialize};

use millwork_core::MaterialId;

use super::classifier::DemandClass;
use super::consumption::ConsumptionRate;
use super::status::{StockAssessment, StockStatus, StockoutEstimate};
use super::thresholds::StockThresholds;
use crate::material::Material;

/// Derived inventory view of one material. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    pub material_id: MaterialId,
    pub code: String,
    pub name: String,
    pub unit_of_measure: String,
    pub available_quantity: f64,
    pub standard_cost: f64,
    pub lead_time_days: u32,

    pub continuous_consumption: f64,
    pub discrete_consumption: f64,
    pub avg_daily_consumption: f64,

    pub safety_stock: u64,
    pub reorder_point: u64,
    pub max_level: u64,

    pub stock_status: StockStatus,
    pub days_until_stockout: StockoutEstimate,
    pub needs_reorder: bool,

    pub is_continuous_demand_material: bool,
    pub is_discrete_demand_material: bool,

    pub total_value: f64,
}

impl MaterialProfile {
    pub(crate) fn assemble(
        material: &Material,
        lead_time_days: u32,
        class: DemandClass,
        rate: ConsumptionRate,
        thresholds: StockThresholds,
        assessment: StockAssessment,
    ) -> Self {
        Self {
            material_id: material.material_id,
            code: material.code.clone(),
            name: material.name.clone(),
            unit_of_measure: material.unit_of_measure.clone(),
            available_quantity: material.available_quantity,
            standard_cost: material.standard_cost,
            lead_time_days,
            continuous_consumption: rate.continuous,
            discrete_consumption: rate.discrete,
            avg_daily_consumption: rate.total(),
            safety_stock: thresholds.safety_stock,
            reorder_point: thresholds.reorder_point,
            max_level: thresholds.max_level,
            stock_status: assessment.stock_status,
            days_until_stockout: assessment.days_until_stockout,
            needs_reorder: assessment.needs_reorder,
            is_continuous_demand_material: class.is_continuous_demand_material,
            is_discrete_demand_material: class.is_discrete_demand_material,
            total_value: material.total_value(),
        }
    }

    pub fn demand_class(&self) -> DemandClass {
        DemandClass {
            is_continuous_demand_material: self.is_continuous_demand_material,
            is_discrete_demand_material: self.is_discrete_demand_material,
        }
    }

    pub fn thresholds(&self) -> StockThresholds {
        StockThresholds {
            safety_stock: self.safety_stock,
            reorder_point: self.reorder_point,
            max_level: self.max_level,
        }
    }
}

/// Roll-up over a set of profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub total_materials: usize,
    pub needing_reorder: usize,
    pub critical_or_out_of_stock: usize,
    pub continuous_demand_materials: usize,
    pub discrete_demand_materials: usize,
    /// Materials drawn by both streams (also counted in each of the two above).
    pub dual_demand_materials: usize,
    pub unclassified_materials: usize,
    pub total_value: f64,
}

impl ProfileSummary {
    pub fn from_profiles(profiles: &[MaterialProfile]) -> Self {
        profiles.iter().fold(Self::default(), |mut acc, p| {
            let class = p.demand_class();
            acc.total_materials += 1;
            acc.needing_reorder += usize::from(p.needs_reorder);
            acc.critical_or_out_of_stock += usize::from(p.stock_status.is_critical_or_out());
            acc.continuous_demand_materials += usize::from(class.is_continuous_demand_material);
            acc.discrete_demand_materials += usize::from(class.is_discrete_demand_material);
            acc.dual_demand_materials += usize::from(class.is_dual());
            acc.unclassified_materials += usize::from(class.is_unclassified());
            acc.total_value += p.total_value;
            acc
        })
    }
}
