//! Input bundle handed to the engine by its callers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use millwork_core::{Entity, ProductId, index_by_id};

use crate::bom::BillOfMaterialEntry;
use crate::demand::{DemandCategories, OrderDemandRecord, ProductionOutputRecord};
use crate::error::{MrpError, MrpResult};
use crate::material::Material;

/// Read-only snapshot of everything a derivation needs.
///
/// Every collection may be empty: a missing stream simply contributes zero
/// consumption.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MrpSnapshot {
    pub materials: Vec<Material>,
    pub boms: Vec<BillOfMaterialEntry>,
    pub continuous_output: Vec<ProductionOutputRecord>,
    pub discrete_orders: Vec<OrderDemandRecord>,
    pub continuous_product_ids: HashSet<ProductId>,
    pub discrete_product_ids: HashSet<ProductId>,
}

impl MrpSnapshot {
    /// Fail fast on malformed primitives and duplicate materials.
    pub fn validate(&self) -> MrpResult<()> {
        for material in &self.materials {
            material.validate()?;
        }

        let index = index_by_id(&self.materials);
        if index.len() != self.materials.len() {
            let mut seen = HashSet::new();
            if let Some(dup) = self.materials.iter().find(|m| !seen.insert(*m.id())) {
                return Err(MrpError::DuplicateMaterial(dup.material_id));
            }
        }

        for entry in &self.boms {
            entry.validate()?;
        }

        Ok(())
    }

    /// Demand-category partition built from the two product id sets.
    pub fn categories(&self) -> MrpResult<DemandCategories> {
        DemandCategories::new(
            self.continuous_product_ids.iter().copied(),
            self.discrete_product_ids.iter().copied(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use millwork_core::MaterialId;

    #[test]
    fn empty_snapshot_is_valid() {
        let snapshot = MrpSnapshot::default();
        assert!(snapshot.validate().is_ok());
        assert!(snapshot.categories().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_materials() {
        let id = MaterialId::new();
        let snapshot = MrpSnapshot {
            materials: vec![
                Material::new(id, "MAT-001", "Pine board"),
                Material::new(MaterialId::new(), "MAT-002", "Wood glue"),
                Material::new(id, "MAT-001", "Pine board (dup)"),
            ],
            ..MrpSnapshot::default()
        };

        assert_eq!(snapshot.validate().unwrap_err(), MrpError::DuplicateMaterial(id));
    }

    #[test]
    fn validate_rejects_negative_bom_quantity() {
        let snapshot = MrpSnapshot {
            boms: vec![BillOfMaterialEntry::new(
                ProductId::new(),
                MaterialId::new(),
                -2.0,
            )],
            ..MrpSnapshot::default()
        };

        assert!(matches!(
            snapshot.validate(),
            Err(MrpError::InvalidQuantity {
                field: "quantity_per_product",
                ..
            })
        ));
    }

    #[test]
    fn deserializes_partial_json() {
        let snapshot: MrpSnapshot = serde_json::from_str(r#"{ "materials": [] }"#).unwrap();
        assert!(snapshot.boms.is_empty());
        assert!(snapshot.discrete_orders.is_empty());
    }
}
