use std::{fs, sync::Arc};

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rentbook_core::{DatePolicy, FiscalYearResolver, FixedClock, PortfolioService, ProfitService};
use rentbook_domain::{Payer, Property, PropertyStatus, Snapshot, Transaction};
use rentbook_storage_json::{JsonSnapshotStore, PROPERTIES_FILE, TRANSACTIONS_FILE};
use tempfile::tempdir;

fn build_sample_snapshot(property_count: usize, txn_count: usize) -> Snapshot {
    let properties: Vec<Property> = (0..property_count)
        .map(|idx| {
            let property = Property::new(format!("P{idx}"))
                .with_ibi(300.0 + idx as f64, Payer::Owner)
                .with_garbage_tax(90.0, if idx % 2 == 0 { Payer::Owner } else { Payer::Tenant });
            if idx % 4 == 0 {
                property.with_status(PropertyStatus::Vacant)
            } else {
                property.with_status(PropertyStatus::Rented)
            }
        })
        .collect();

    let start_date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let transactions = (0..txn_count)
        .map(|idx| {
            let date = start_date + Duration::days((idx % (365 * 3)) as i64);
            let amount = 50.0 + (idx % 100) as f64;
            let txn = if idx % 3 == 0 {
                Transaction::expense(format!("t{idx}"), amount, date)
            } else {
                Transaction::income(format!("t{idx}"), amount, date)
            };
            txn.for_property(format!("P{}", idx % property_count))
        })
        .collect();

    Snapshot::new(properties, transactions, Vec::new())
}

fn fixed_service() -> ProfitService {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    ProfitService::new(FiscalYearResolver::new(
        Arc::new(FixedClock::new(today)),
        DatePolicy::Lenient,
    ))
}

fn bench_profit(c: &mut Criterion) {
    let snapshot = build_sample_snapshot(50, black_box(20_000));
    let service = fixed_service();

    c.bench_function("annual_profit_20k", |b| {
        b.iter(|| {
            let profit =
                service.annual_profit(&snapshot.properties, &snapshot.transactions, Some(2023));
            black_box(profit);
        })
    });

    c.bench_function("property_breakdown_50x20k", |b| {
        b.iter(|| {
            let rows =
                service.property_breakdown(&snapshot.properties, &snapshot.transactions, Some(2023));
            black_box(rows);
        })
    });

    c.bench_function("portfolio_stats_20k", |b| {
        b.iter(|| black_box(PortfolioService::stats(&snapshot)))
    });
}

fn bench_snapshot_load(c: &mut Criterion) {
    let snapshot = build_sample_snapshot(50, 20_000);
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join(PROPERTIES_FILE),
        serde_json::to_string(&snapshot.properties).expect("encode properties"),
    )
    .expect("write properties");
    fs::write(
        dir.path().join(TRANSACTIONS_FILE),
        serde_json::to_string(&snapshot.transactions).expect("encode transactions"),
    )
    .expect("write transactions");

    c.bench_function("json_snapshot_open_20k", |b| {
        b.iter(|| {
            let store = JsonSnapshotStore::open(dir.path()).expect("open store");
            black_box(store);
        })
    });
}

criterion_group!(benches, bench_profit, bench_snapshot_load);
criterion_main!(benches);
