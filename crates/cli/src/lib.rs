//! Command-line front end for the material requirements engine.
//!
//! Loads an [`MrpSnapshot`] from JSON, derives profiles and bundles them with
//! the planning views into a single [`PlanningReport`].

use std::path::Path;

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use millwork_inventory::{
    AbcAnalysis, MrpConfig, MrpEngine, MrpReport, MrpSnapshot, ReplenishmentSchedule,
    StockAlerts, UsageForecast,
};

pub const ENV_SNAPSHOT: &str = "MILLWORK_SNAPSHOT";
pub const ENV_NOW: &str = "MILLWORK_NOW";

/// Everything the CLI prints: the derived profiles and the views built on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningReport {
    pub requirements: MrpReport,
    pub forecast: UsageForecast,
    pub replenishment: ReplenishmentSchedule,
    pub abc: AbcAnalysis,
    pub alerts: StockAlerts,
}

impl PlanningReport {
    pub fn build(
        config: MrpConfig,
        snapshot: &MrpSnapshot,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Self> {
        let engine = MrpEngine::new(config).context("invalid engine configuration")?;
        let requirements = engine
            .derive(snapshot, now)
            .context("failed to derive material requirements")?;

        let profiles = &requirements.profiles;
        let forecast = UsageForecast::from_profiles(profiles, config.forecast_horizon_days);
        let replenishment = ReplenishmentSchedule::from_profiles(profiles, now.date_naive());
        let abc = AbcAnalysis::from_profiles(profiles, requirements.window_days);
        let alerts = StockAlerts::from_profiles(profiles);

        Ok(Self {
            requirements,
            forecast,
            replenishment,
            abc,
            alerts,
        })
    }
}

pub fn parse_snapshot(json: &str) -> anyhow::Result<MrpSnapshot> {
    serde_json::from_str(json).context("snapshot is not valid JSON")
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<MrpSnapshot> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    parse_snapshot(&json).with_context(|| format!("failed to parse {}", path.display()))
}

/// First positional argument, else `MILLWORK_SNAPSHOT`.
pub fn snapshot_path(
    arg: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<String> {
    match arg.or_else(|| lookup(ENV_SNAPSHOT)) {
        Some(path) if !path.trim().is_empty() => Ok(path),
        _ => bail!("no snapshot given; pass a path or set {ENV_SNAPSHOT}"),
    }
}

/// `MILLWORK_NOW` as RFC 3339, else the system clock.
pub fn resolve_now(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<DateTime<Utc>> {
    match lookup(ENV_NOW) {
        Some(raw) => DateTime::parse_from_rfc3339(raw.trim())
            .map(|at| at.with_timezone(&Utc))
            .with_context(|| format!("{ENV_NOW} is not an RFC 3339 timestamp: {raw}")),
        None => Ok(Utc::now()),
    }
}

pub fn run(
    arg: Option<String>,
    lookup: impl Fn(&str) -> Option<String> + Copy,
) -> anyhow::Result<PlanningReport> {
    let config = MrpConfig::from_lookup(lookup).context("invalid configuration")?;
    let path = snapshot_path(arg, lookup)?;
    let now = resolve_now(lookup)?;
    let snapshot = load_snapshot(Path::new(&path))?;

    tracing::info!(
        snapshot = %path,
        materials = snapshot.materials.len(),
        %now,
        "loaded snapshot"
    );

    PlanningReport::build(config, &snapshot, now)
}
