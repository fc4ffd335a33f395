//! Derivation errors and warnings.
//!
//! Malformed primitive input (non-finite numbers, negative BOM quantities, an
//! empty window, overlapping category sets) fails the whole derivation.
//! Dangling references between records and unattributable output do not:
//! the offending records are skipped and a [`DerivationWarning`] is reported
//! alongside the profiles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use millwork_core::{MaterialId, ProductId};

/// Result type used by the derivation engine.
pub type MrpResult<T> = Result<T, MrpError>;

/// Fail-fast input error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MrpError {
    /// The trailing window must cover at least one day.
    #[error("window length must be at least one day (got {0})")]
    InvalidWindow(u32),

    /// A numeric field was NaN, infinite, or outside its allowed range.
    #[error("invalid {field}: {value}")]
    InvalidQuantity { field: &'static str, value: f64 },

    /// The continuous and discrete product sets must be disjoint.
    #[error("product {0} is listed as both continuous and discrete demand")]
    OverlappingCategories(ProductId),

    /// Each material may appear once per snapshot.
    #[error("material {0} appears more than once in the snapshot")]
    DuplicateMaterial(MaterialId),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MrpError {
    pub fn invalid_quantity(field: &'static str, value: f64) -> Self {
        Self::InvalidQuantity { field, value }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> MrpResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MrpError::invalid_quantity(field, value))
    }
}

/// Reject NaN, infinities and negative values.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> MrpResult<()> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(MrpError::invalid_quantity(field, value));
    }
    Ok(())
}

/// A record that was skipped because it references something outside the
/// snapshot. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DerivationWarning {
    /// A BOM entry points at a material that is not in the snapshot.
    UnknownMaterial {
        product_id: ProductId,
        material_id: MaterialId,
    },

    /// A BOM entry's product is in neither demand category.
    UncategorizedProduct { product_id: ProductId },

    /// Untagged production output in the window, with more than one
    /// continuous-demand product to credit it to.
    UnattributedOutput {
        records: usize,
        quantity_produced: u64,
    },
}

impl core::fmt::Display for DerivationWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DerivationWarning::UnknownMaterial {
                product_id,
                material_id,
            } => write!(
                f,
                "BOM entry for product {product_id} references unknown material {material_id}"
            ),
            DerivationWarning::UncategorizedProduct { product_id } => write!(
                f,
                "product {product_id} is neither continuous nor discrete demand"
            ),
            DerivationWarning::UnattributedOutput {
                records,
                quantity_produced,
            } => write!(
                f,
                "{records} untagged output records ({quantity_produced} units) match no single continuous product"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_rejects_nan_and_negatives() {
        assert!(ensure_non_negative("qty", 0.0).is_ok());
        assert!(ensure_non_negative("qty", 12.5).is_ok());

        match ensure_non_negative("qty", -1.0).unwrap_err() {
            MrpError::InvalidQuantity { field, value } => {
                assert_eq!(field, "qty");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected InvalidQuantity, got {other:?}"),
        }

        assert!(ensure_non_negative("qty", f64::NAN).is_err());
        assert!(ensure_finite("qty", f64::INFINITY).is_err());
        assert!(ensure_finite("qty", -3.0).is_ok());
    }

    #[test]
    fn warnings_serialize_with_kind_tag() {
        let product_id = ProductId::from_uuid(uuid::Uuid::from_u128(7));
        let warning = DerivationWarning::UncategorizedProduct { product_id };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "uncategorized_product");
        assert_eq!(json["product_id"], product_id.to_string());
    }
}
