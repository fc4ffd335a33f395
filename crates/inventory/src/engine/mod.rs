//! Material requirements derivation.
//!
//! One pass per material: classify demand, estimate consumption, derive
//! thresholds, assess stock. [`MrpEngine::derive`] is the single entry point
//! for every caller (initial load, refresh, exports, alerting).

pub mod classifier;
pub mod consumption;
pub mod profile;
pub mod status;
pub mod thresholds;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use millwork_core::index_by_id;

use crate::bom::BomIndex;
use crate::config::MrpConfig;
use crate::error::{DerivationWarning, MrpResult};
use crate::snapshot::MrpSnapshot;

pub use classifier::DemandClass;
pub use consumption::{ConsumptionRate, ConsumptionWindow, DemandSignals};
pub use profile::{MaterialProfile, ProfileSummary};
pub use status::{StockAssessment, StockStatus, StockoutEstimate};
pub use thresholds::{MAX_LEVEL_DAYS, SAFETY_DAYS, StockThresholds, ThresholdOverrides};

/// Output of one derivation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MrpReport {
    pub generated_at: DateTime<Utc>,
    pub window_days: u32,
    /// One profile per input material, in input order.
    pub profiles: Vec<MaterialProfile>,
    pub summary: ProfileSummary,
    /// References skipped while indexing the BOM.
    pub warnings: Vec<DerivationWarning>,
}

/// Stateless derivation engine; holds configuration only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MrpEngine {
    config: MrpConfig,
}

impl MrpEngine {
    pub fn new(config: MrpConfig) -> MrpResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MrpConfig {
        &self.config
    }

    /// Derive every material profile and the roll-up from `snapshot` as of `now`.
    pub fn derive(&self, snapshot: &MrpSnapshot, now: DateTime<Utc>) -> MrpResult<MrpReport> {
        snapshot.validate()?;
        let categories = snapshot.categories()?;
        let window = ConsumptionWindow::trailing(now, self.config.window_days)?;

        let materials = index_by_id(&snapshot.materials);
        let (boms, mut warnings) =
            BomIndex::build(&snapshot.boms, &categories, |id| materials.contains_key(id));
        let (signals, output_warnings) = DemandSignals::collect(
            &window,
            &snapshot.continuous_output,
            &snapshot.discrete_orders,
            &categories,
        );
        warnings.extend(output_warnings);
        for warning in &warnings {
            tracing::warn!(%warning, "skipping input records");
        }

        let profiles: Vec<MaterialProfile> = snapshot
            .materials
            .iter()
            .map(|material| {
                let class = classifier::classify(material.material_id, &boms);
                let rate = consumption::estimate(material.material_id, &boms, &signals);
                let lead_time = material.effective_lead_time(self.config.default_lead_time_days);
                let levels = thresholds::calculate(
                    rate.total(),
                    lead_time,
                    &ThresholdOverrides::from(material),
                );
                let assessment = status::assess(material.available_quantity, rate.total(), &levels);

                tracing::debug!(
                    material = %material.code,
                    rate = rate.total(),
                    safety_stock = levels.safety_stock,
                    reorder_point = levels.reorder_point,
                    status = assessment.stock_status.as_str(),
                    "derived material profile"
                );

                MaterialProfile::assemble(material, lead_time, class, rate, levels, assessment)
            })
            .collect();

        let summary = ProfileSummary::from_profiles(&profiles);
        tracing::info!(
            materials = summary.total_materials,
            needing_reorder = summary.needing_reorder,
            critical_or_out_of_stock = summary.critical_or_out_of_stock,
            warnings = warnings.len(),
            window_days = window.days(),
            "material requirements derived"
        );

        Ok(MrpReport {
            generated_at: now,
            window_days: window.days(),
            profiles,
            summary,
            warnings,
        })
    }
}
