use std::path::PathBuf;

use millwork_cli::{ENV_NOW, ENV_SNAPSHOT, PlanningReport, load_snapshot, run};
use millwork_inventory::{
    AbcClass, AlertSeverity, DerivationWarning, MrpConfig, ReorderPriority, StockStatus,
    StockoutEstimate,
};

const NOW: &str = "2026-10-18T08:00:00Z";

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/sample_snapshot.json")
}

fn sample_report() -> PlanningReport {
    millwork_observability::init_test();
    let path = fixture().display().to_string();
    let path = path.as_str();
    run(None, move |key| match key {
        ENV_SNAPSHOT => Some(path.to_string()),
        ENV_NOW => Some(NOW.to_string()),
        _ => None,
    })
    .unwrap()
}

#[test]
fn fixture_derives_expected_statuses() {
    let report = sample_report();
    let profiles = &report.requirements.profiles;

    let statuses: Vec<(&str, StockStatus)> = profiles
        .iter()
        .map(|p| (p.code.as_str(), p.stock_status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("MAT-001", StockStatus::Low),
            ("MAT-002", StockStatus::Low),
            ("MAT-003", StockStatus::OutOfStock),
            ("MAT-004", StockStatus::InStock),
            ("MAT-005", StockStatus::InStock),
        ]
    );

    let board = &profiles[0];
    assert!((board.avg_daily_consumption - 8.0).abs() < 1e-9);
    assert_eq!(board.safety_stock, 112);
    assert_eq!(board.reorder_point, 152);
    assert_eq!(board.max_level, 240);
    assert_eq!(board.days_until_stockout, StockoutEstimate::Days(15));
    assert!(board.is_continuous_demand_material && !board.is_discrete_demand_material);

    let glue = &profiles[1];
    assert!(glue.is_continuous_demand_material && glue.is_discrete_demand_material);
    assert!((glue.discrete_consumption - 200.0 / 30.0).abs() < 1e-9);

    let oak = &profiles[2];
    assert!((oak.discrete_consumption - 128.0 / 30.0).abs() < 1e-9);
    assert_eq!(oak.max_level, 200);

    let varnish = &profiles[3];
    assert_eq!(varnish.safety_stock, 2);
    assert_eq!(varnish.reorder_point, 3);

    let hinge = &profiles[4];
    assert_eq!(hinge.avg_daily_consumption, 0.0);
    assert_eq!(hinge.days_until_stockout, StockoutEstimate::Unbounded);
}

#[test]
fn fixture_rolls_up_and_reports_dangling_references() {
    let report = sample_report();
    let summary = &report.requirements.summary;

    assert_eq!(summary.total_materials, 5);
    assert_eq!(summary.needing_reorder, 3);
    assert_eq!(summary.critical_or_out_of_stock, 1);
    assert_eq!(summary.dual_demand_materials, 1);
    assert_eq!(summary.unclassified_materials, 1);

    let warnings = &report.requirements.warnings;
    assert_eq!(warnings.len(), 2);
    assert!(
        warnings
            .iter()
            .any(|w| matches!(w, DerivationWarning::UnknownMaterial { .. }))
    );
    assert!(
        warnings
            .iter()
            .any(|w| matches!(w, DerivationWarning::UncategorizedProduct { .. }))
    );
}

#[test]
fn fixture_planning_views_agree_with_profiles() {
    let report = sample_report();

    let alerts: Vec<(&str, AlertSeverity)> = report
        .alerts
        .alerts
        .iter()
        .map(|a| (a.code.as_str(), a.severity))
        .collect();
    assert_eq!(
        alerts,
        vec![
            ("MAT-003", AlertSeverity::Critical),
            ("MAT-001", AlertSeverity::High),
            ("MAT-002", AlertSeverity::High),
        ]
    );

    assert_eq!(report.abc.lines[0].code, "MAT-003");
    assert_eq!(report.abc.lines[0].classification, AbcClass::A);
    assert_eq!(report.abc.lines[1].code, "MAT-001");
    assert_eq!(report.abc.lines[1].classification, AbcClass::B);

    let oak = report
        .replenishment
        .lines
        .iter()
        .find(|l| l.code == "MAT-003")
        .unwrap();
    assert!(oak.needs_immediate_reorder);
    assert_eq!(oak.priority, ReorderPriority::Urgent);

    assert_eq!(report.forecast.horizon_days, 30);
    assert_eq!(report.replenishment.as_of.to_string(), "2026-10-18");
}

#[test]
fn narrower_window_drops_older_demand() {
    let snapshot = load_snapshot(&fixture()).unwrap();
    let now = NOW.parse().unwrap();

    let wide = PlanningReport::build(MrpConfig::default(), &snapshot, now).unwrap();
    let narrow =
        PlanningReport::build(MrpConfig::default().with_window_days(7), &snapshot, now).unwrap();

    // The made-to-order chair order from late September falls out of a week.
    let oak = |r: &PlanningReport| r.requirements.profiles[2].discrete_consumption;
    assert!((oak(&narrow) - (48.0 + 48.0) / 7.0).abs() < 1e-9);
    assert!(oak(&narrow) > oak(&wide));
    assert_eq!(narrow.abc.window_days, 7);
}

#[test]
fn missing_snapshot_file_is_an_error() {
    let err = run(Some("/nonexistent/snapshot.json".into()), |key| match key {
        ENV_NOW => Some(NOW.to_string()),
        _ => None,
    })
    .unwrap_err();

    assert!(format!("{err:#}").contains("failed to read snapshot"));
}
