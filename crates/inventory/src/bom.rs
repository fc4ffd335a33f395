//! Bill-of-materials entries and the per-material lookup built from them.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use millwork_core::{MaterialId, ProductId};

use crate::demand::{DemandCategories, DemandStream};
use crate::error::{DerivationWarning, MrpResult, ensure_non_negative};

/// Units of a material needed to build one unit of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterialEntry {
    pub product_id: ProductId,
    pub material_id: MaterialId,
    pub quantity_per_product: f64,
    #[serde(default)]
    pub unit_of_measure: String,
}

impl BillOfMaterialEntry {
    pub fn new(product_id: ProductId, material_id: MaterialId, quantity_per_product: f64) -> Self {
        Self {
            product_id,
            material_id,
            quantity_per_product,
            unit_of_measure: String::new(),
        }
    }

    pub(crate) fn validate(&self) -> MrpResult<()> {
        ensure_non_negative("quantity_per_product", self.quantity_per_product)
    }
}

/// A BOM entry whose product has been resolved to a demand stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BomLink {
    pub product_id: ProductId,
    pub stream: DemandStream,
    pub quantity_per_product: f64,
}

/// Every categorized BOM link, grouped by material.
///
/// A material may feed several products in the same stream; all of them are
/// kept so that consumption sums across products instead of taking the first
/// match.
#[derive(Debug, Clone, Default)]
pub struct BomIndex {
    by_material: HashMap<MaterialId, Vec<BomLink>>,
}

impl BomIndex {
    /// Build the index, skipping entries that reference a material outside
    /// `is_known_material` or a product outside both demand categories.
    ///
    /// Returns the skipped references as warnings, in BOM order, with one
    /// warning per uncategorized product.
    pub fn build(
        entries: &[BillOfMaterialEntry],
        categories: &DemandCategories,
        is_known_material: impl Fn(&MaterialId) -> bool,
    ) -> (Self, Vec<DerivationWarning>) {
        let mut by_material: HashMap<MaterialId, Vec<BomLink>> = HashMap::new();
        let mut warnings = Vec::new();
        let mut uncategorized: BTreeSet<ProductId> = BTreeSet::new();

        for entry in entries {
            if !is_known_material(&entry.material_id) {
                warnings.push(DerivationWarning::UnknownMaterial {
                    product_id: entry.product_id,
                    material_id: entry.material_id,
                });
                continue;
            }

            let Some(stream) = categories.stream_of(entry.product_id) else {
                if uncategorized.insert(entry.product_id) {
                    warnings.push(DerivationWarning::UncategorizedProduct {
                        product_id: entry.product_id,
                    });
                }
                continue;
            };

            by_material.entry(entry.material_id).or_default().push(BomLink {
                product_id: entry.product_id,
                stream,
                quantity_per_product: entry.quantity_per_product,
            });
        }

        (Self { by_material }, warnings)
    }

    /// All categorized links for a material (empty when it feeds no product).
    pub fn links_for(&self, material_id: MaterialId) -> &[BomLink] {
        self.by_material
            .get(&material_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Links for a material restricted to one demand stream.
    pub fn stream_links(
        &self,
        material_id: MaterialId,
        stream: DemandStream,
    ) -> impl Iterator<Item = &BomLink> {
        self.links_for(material_id)
            .iter()
            .filter(move |link| link.stream == stream)
    }
}
