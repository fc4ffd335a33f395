use serde::{Deserialize, Serialize};

use millwork_core::MaterialId;

use crate::bom::BomIndex;
use crate::demand::DemandStream;

/// Which demand streams draw on a material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandClass {
    pub is_continuous_demand_material: bool,
    pub is_discrete_demand_material: bool,
}

impl DemandClass {
    pub fn is_dual(&self) -> bool {
        self.is_continuous_demand_material && self.is_discrete_demand_material
    }

    pub fn is_unclassified(&self) -> bool {
        !self.is_continuous_demand_material && !self.is_discrete_demand_material
    }
}

/// A material belongs to a stream when any categorized BOM link ties it to a
/// product of that stream.
pub fn classify(material_id: MaterialId, boms: &BomIndex) -> DemandClass {
    let mut class = DemandClass::default();
    for link in boms.links_for(material_id) {
        match link.stream {
            DemandStream::Continuous => class.is_continuous_demand_material = true,
            DemandStream::Discrete => class.is_discrete_demand_material = true,
        }
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::BillOfMaterialEntry;
    use crate::demand::DemandCategories;
    use millwork_core::ProductId;

    #[test]
    fn classifies_each_combination() {
        let coin_bank = ProductId::new();
        let table = ProductId::new();
        let categories = DemandCategories::new([coin_bank], [table]).unwrap();

        let stocked_only = MaterialId::new();
        let mto_only = MaterialId::new();
        let both = MaterialId::new();
        let neither = MaterialId::new();

        let entries = vec![
            BillOfMaterialEntry::new(coin_bank, stocked_only, 1.0),
            BillOfMaterialEntry::new(table, mto_only, 1.0),
            BillOfMaterialEntry::new(coin_bank, both, 1.0),
            BillOfMaterialEntry::new(table, both, 1.0),
        ];
        let (index, _) = BomIndex::build(&entries, &categories, |_| true);

        let c = classify(stocked_only, &index);
        assert!(c.is_continuous_demand_material && !c.is_discrete_demand_material);

        let d = classify(mto_only, &index);
        assert!(!d.is_continuous_demand_material && d.is_discrete_demand_material);

        assert!(classify(both, &index).is_dual());
        assert!(classify(neither, &index).is_unclassified());
    }
}
