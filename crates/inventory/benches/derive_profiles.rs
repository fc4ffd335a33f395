use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{DateTime, Duration, TimeZone, Utc};
use millwork_core::{MaterialId, ProductId};
use millwork_inventory::{
    BillOfMaterialEntry, Material, MrpEngine, MrpSnapshot, OrderDemandRecord,
    ProductionOutputRecord, ReplenishmentSchedule, UsageForecast,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap()
}

/// Synthetic catalogue: `materials` raw materials, 4 stocked products and 40
/// made-to-order products, each product using 6 materials, 90 days of output
/// and 5 orders a day.
fn synthetic_snapshot(materials: usize) -> MrpSnapshot {
    let material_ids: Vec<MaterialId> = (0..materials).map(|_| MaterialId::new()).collect();
    let stocked: Vec<ProductId> = (0..4).map(|_| ProductId::new()).collect();
    let made_to_order: Vec<ProductId> = (0..40).map(|_| ProductId::new()).collect();

    let mut boms = Vec::new();
    for (p, product) in stocked.iter().chain(&made_to_order).enumerate() {
        for k in 0..6 {
            let material = material_ids[(p * 7 + k * 13) % materials];
            boms.push(BillOfMaterialEntry::new(*product, material, 0.5 + k as f64));
        }
    }

    let continuous_output = (0..90)
        .flat_map(|d| {
            let date = (now() - Duration::days(d)).date_naive();
            stocked
                .iter()
                .map(move |p| ProductionOutputRecord::new(date, 20 + (d as u32 % 7)).for_product(*p))
        })
        .collect();

    let discrete_orders = (0..90 * 5)
        .map(|i| {
            let at = now() - Duration::hours(i as i64 * 5);
            OrderDemandRecord::accepted(at)
                .with_item(made_to_order[i % made_to_order.len()], 1 + (i as u32 % 4))
                .with_item(made_to_order[(i * 3) % made_to_order.len()], 2)
        })
        .collect();

    MrpSnapshot {
        materials: material_ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                Material::new(*id, format!("MAT-{i:04}"), format!("Material {i}"))
                    .with_available_quantity((i % 250) as f64)
                    .with_standard_cost(1.0 + (i % 17) as f64)
            })
            .collect(),
        boms,
        continuous_output,
        discrete_orders,
        continuous_product_ids: stocked.into_iter().collect(),
        discrete_product_ids: made_to_order.into_iter().collect(),
    }
}

fn bench_derive(c: &mut Criterion) {
    let engine = MrpEngine::default();
    let mut group = c.benchmark_group("derive_profiles");

    for size in [50usize, 500, 5_000] {
        let snapshot = synthetic_snapshot(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &snapshot, |b, snapshot| {
            b.iter(|| engine.derive(black_box(snapshot), now()).unwrap());
        });
    }

    group.finish();
}

fn bench_planning_views(c: &mut Criterion) {
    let report = MrpEngine::default()
        .derive(&synthetic_snapshot(5_000), now())
        .unwrap();

    c.bench_function("usage_forecast_5000", |b| {
        b.iter(|| UsageForecast::from_profiles(black_box(&report.profiles), 30));
    });
    c.bench_function("replenishment_schedule_5000", |b| {
        b.iter(|| ReplenishmentSchedule::from_profiles(black_box(&report.profiles), now().date_naive()));
    });
}

criterion_group!(benches, bench_derive, bench_planning_views);
criterion_main!(benches);
