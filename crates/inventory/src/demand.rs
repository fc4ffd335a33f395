//! Demand signals: production output (continuous) and accepted orders (discrete).

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use millwork_core::ProductId;

use crate::error::{MrpError, MrpResult};

/// Which demand model a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandStream {
    /// Stocked product replenished by daily batch runs.
    Continuous,
    /// Made-to-order product assembled against accepted orders.
    Discrete,
}

/// One day of continuous-product output.
///
/// An untagged record (`product_id: None`) is credited to the only
/// continuous-demand product; it is unattributable when there are several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOutputRecord {
    pub output_date: NaiveDate,
    pub quantity_produced: u32,
    #[serde(default)]
    pub product_id: Option<ProductId>,
}

impl ProductionOutputRecord {
    pub fn new(output_date: NaiveDate, quantity_produced: u32) -> Self {
        Self {
            output_date,
            quantity_produced,
            product_id: None,
        }
    }

    pub fn for_product(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }

    /// Product credited with this output: the tag, else `sole_continuous`.
    pub fn attributed_to(&self, sole_continuous: Option<ProductId>) -> Option<ProductId> {
        self.product_id.or(sole_continuous)
    }
}

/// Order line: product and ordered units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Accepted customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDemandRecord {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub accepted_at: Option<DateTime<Utc>>,
    pub items: Vec<OrderLineItem>,
}

impl OrderDemandRecord {
    pub fn accepted(accepted_at: DateTime<Utc>) -> Self {
        Self {
            created_at: accepted_at,
            accepted_at: Some(accepted_at),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, product_id: ProductId, quantity: u32) -> Self {
        self.items.push(OrderLineItem {
            product_id,
            quantity,
        });
        self
    }

    /// Instant the order starts consuming material: acceptance, else creation.
    pub fn demand_at(&self) -> DateTime<Utc> {
        self.accepted_at.unwrap_or(self.created_at)
    }
}

/// Partition of products into the two demand models.
///
/// Supplied by the caller (derived from product category metadata). The two
/// sets are disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandCategories {
    continuous: HashSet<ProductId>,
    discrete: HashSet<ProductId>,
}

impl DemandCategories {
    pub fn new(
        continuous: impl IntoIterator<Item = ProductId>,
        discrete: impl IntoIterator<Item = ProductId>,
    ) -> MrpResult<Self> {
        let continuous: HashSet<ProductId> = continuous.into_iter().collect();
        let discrete: HashSet<ProductId> = discrete.into_iter().collect();

        if let Some(overlap) = continuous.intersection(&discrete).min() {
            return Err(MrpError::OverlappingCategories(*overlap));
        }

        Ok(Self {
            continuous,
            discrete,
        })
    }

    pub fn stream_of(&self, product_id: ProductId) -> Option<DemandStream> {
        if self.continuous.contains(&product_id) {
            Some(DemandStream::Continuous)
        } else if self.discrete.contains(&product_id) {
            Some(DemandStream::Discrete)
        } else {
            None
        }
    }

    /// The continuous-demand product, when there is exactly one.
    pub fn sole_continuous(&self) -> Option<ProductId> {
        let mut products = self.continuous.iter();
        match (products.next(), products.next()) {
            (Some(only), None) => Some(*only),
            _ => None,
        }
    }

    pub fn continuous_count(&self) -> usize {
        self.continuous.len()
    }

    pub fn is_continuous(&self, product_id: ProductId) -> bool {
        self.continuous.contains(&product_id)
    }

    pub fn is_discrete(&self, product_id: ProductId) -> bool {
        self.discrete.contains(&product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn categories_reject_overlap() {
        let shared = ProductId::new();
        let err = DemandCategories::new([shared, ProductId::new()], [shared]).unwrap_err();
        assert_eq!(err, MrpError::OverlappingCategories(shared));
    }

    #[test]
    fn stream_of_reports_membership() {
        let coin_bank = ProductId::new();
        let dining_table = ProductId::new();
        let unknown = ProductId::new();
        let categories = DemandCategories::new([coin_bank], [dining_table]).unwrap();

        assert_eq!(categories.stream_of(coin_bank), Some(DemandStream::Continuous));
        assert_eq!(categories.stream_of(dining_table), Some(DemandStream::Discrete));
        assert_eq!(categories.stream_of(unknown), None);
    }

    #[test]
    fn demand_at_prefers_acceptance() {
        let created = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let accepted = Utc.with_ymd_and_hms(2026, 3, 4, 15, 30, 0).unwrap();

        let mut order = OrderDemandRecord {
            created_at: created,
            accepted_at: None,
            items: Vec::new(),
        };
        assert_eq!(order.demand_at(), created);

        order.accepted_at = Some(accepted);
        assert_eq!(order.demand_at(), accepted);
    }

    #[test]
    fn untagged_output_goes_to_the_only_stocked_product() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let coin_bank = ProductId::new();
        let pencil_box = ProductId::new();

        let one = DemandCategories::new([coin_bank], []).unwrap();
        let two = DemandCategories::new([coin_bank, pencil_box], []).unwrap();
        assert_eq!(one.sole_continuous(), Some(coin_bank));
        assert_eq!(two.sole_continuous(), None);
        assert_eq!(two.continuous_count(), 2);

        let untagged = ProductionOutputRecord::new(date, 10);
        assert_eq!(untagged.attributed_to(one.sole_continuous()), Some(coin_bank));
        assert_eq!(untagged.attributed_to(two.sole_continuous()), None);

        let tagged = ProductionOutputRecord::new(date, 10).for_product(pencil_box);
        assert_eq!(tagged.attributed_to(one.sole_continuous()), Some(pencil_box));
    }
}
