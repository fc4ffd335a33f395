use serde::{Deserialize, Serialize};

use millwork_core::MaterialId;

use crate::engine::MaterialProfile;

/// Cumulative usage-value share (percent) up to which a material is class A.
pub const CLASS_A_CUTOFF: f64 = 80.0;
/// Cumulative usage-value share (percent) up to which a material is class B.
pub const CLASS_B_CUTOFF: f64 = 95.0;

/// Slack on the cutoffs for rounding accumulated while summing shares.
const CUTOFF_TOLERANCE: f64 = 1e-9;

fn within(cumulative_percent: f64, cutoff: f64) -> bool {
    cumulative_percent <= cutoff + CUTOFF_TOLERANCE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcLine {
    pub material_id: MaterialId,
    pub code: String,
    pub name: String,
    pub window_usage: f64,
    pub usage_value: f64,
    pub percent_of_total: f64,
    pub cumulative_percent: f64,
    pub classification: AbcClass,
    pub current_stock: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbcSummary {
    pub class_a_items: usize,
    pub class_b_items: usize,
    pub class_c_items: usize,
    pub total_usage_value: f64,
}

/// Pareto classification by usage value over the derivation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcAnalysis {
    pub window_days: u32,
    pub lines: Vec<AbcLine>,
    pub summary: AbcSummary,
}

impl AbcAnalysis {
    /// Usage value is `rate * window_days * standard_cost`. Lines are ordered
    /// by usage value descending, then code; a zero total makes everything C.
    pub fn from_profiles(profiles: &[MaterialProfile], window_days: u32) -> Self {
        let window = f64::from(window_days);

        let mut ranked: Vec<(&MaterialProfile, f64, f64)> = profiles
            .iter()
            .map(|p| {
                let usage = p.avg_daily_consumption * window;
                (p, usage, usage * p.standard_cost)
            })
            .collect();
        ranked.sort_by(|a, b| b.2.total_cmp(&a.2).then_with(|| a.0.code.cmp(&b.0.code)));

        let total: f64 = ranked.iter().map(|(_, _, value)| value).sum();
        let mut cumulative = 0.0;

        let lines: Vec<AbcLine> = ranked
            .into_iter()
            .map(|(p, usage, value)| {
                cumulative += value;
                let (percent_of_total, cumulative_percent) = if total > 0.0 {
                    (value / total * 100.0, cumulative / total * 100.0)
                } else {
                    (0.0, 0.0)
                };

                let classification = if total <= 0.0 {
                    AbcClass::C
                } else if within(cumulative_percent, CLASS_A_CUTOFF) {
                    AbcClass::A
                } else if within(cumulative_percent, CLASS_B_CUTOFF) {
                    AbcClass::B
                } else {
                    AbcClass::C
                };

                AbcLine {
                    material_id: p.material_id,
                    code: p.code.clone(),
                    name: p.name.clone(),
                    window_usage: usage,
                    usage_value: value,
                    percent_of_total,
                    cumulative_percent,
                    classification,
                    current_stock: p.available_quantity,
                }
            })
            .collect();

        let count = |class: AbcClass| lines.iter().filter(|l| l.classification == class).count();
        let summary = AbcSummary {
            class_a_items: count(AbcClass::A),
            class_b_items: count(AbcClass::B),
            class_c_items: count(AbcClass::C),
            total_usage_value: total,
        };

        Self {
            window_days,
            lines,
            summary,
        }
    }
}
