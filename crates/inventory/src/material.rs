use serde::{Deserialize, Serialize};

use millwork_core::{Entity, MaterialId};

use crate::error::{MrpResult, ensure_finite, ensure_non_negative};

/// Raw material record, consumed as a read-only snapshot.
///
/// `available_quantity` is on-hand minus reserved and may go negative when a
/// material is over-reserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub material_id: MaterialId,
    pub code: String,
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit_of_measure: String,
    #[serde(default)]
    pub standard_cost: f64,
    pub available_quantity: f64,
    pub lead_time_days: Option<u32>,
    /// Manual safety-stock override.
    pub critical_stock: Option<u64>,
    /// Manual max-level override.
    pub max_level: Option<u64>,
    /// Manual reorder-point override.
    pub reorder_level: Option<u64>,
}

fn default_unit() -> String {
    "pcs".to_string()
}

impl Material {
    pub fn new(material_id: MaterialId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            material_id,
            code: code.into(),
            name: name.into(),
            unit_of_measure: default_unit(),
            standard_cost: 0.0,
            available_quantity: 0.0,
            lead_time_days: None,
            critical_stock: None,
            max_level: None,
            reorder_level: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit_of_measure = unit.into();
        self
    }

    pub fn with_standard_cost(mut self, cost: f64) -> Self {
        self.standard_cost = cost;
        self
    }

    pub fn with_available_quantity(mut self, quantity: f64) -> Self {
        self.available_quantity = quantity;
        self
    }

    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = Some(days);
        self
    }

    pub fn with_critical_stock(mut self, units: u64) -> Self {
        self.critical_stock = Some(units);
        self
    }

    pub fn with_max_level(mut self, units: u64) -> Self {
        self.max_level = Some(units);
        self
    }

    pub fn with_reorder_level(mut self, units: u64) -> Self {
        self.reorder_level = Some(units);
        self
    }

    /// Lead time in days, falling back to `default_days` when unset.
    pub fn effective_lead_time(&self, default_days: u32) -> u32 {
        self.lead_time_days.unwrap_or(default_days)
    }

    /// Stock value at standard cost.
    pub fn total_value(&self) -> f64 {
        self.available_quantity * self.standard_cost
    }

    pub(crate) fn validate(&self) -> MrpResult<()> {
        ensure_finite("available_quantity", self.available_quantity)?;
        ensure_non_negative("standard_cost", self.standard_cost)?;
        Ok(())
    }
}

impl Entity for Material {
    type Id = MaterialId;

    fn id(&self) -> &Self::Id {
        &self.material_id
    }
}
