//! Performance benchmarks for the allowance engine.
//!
//! Covers the calculators over growing employee lists, the work-day
//! counter, and a full HTTP round trip through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use allowance_engine::api::{AppState, create_router};
use allowance_engine::calculation::{
    SpecialAssistOptions, calculate_company_trip, calculate_special_assist, calculate_travel,
    calculate_work_days,
};
use allowance_engine::config::ConfigLoader;
use allowance_engine::models::{Employee, RateTable};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config").expect("Failed to load config")
}

/// Builds `count` employees spread over the configured levels and tenures.
fn create_employees(count: usize) -> Vec<Employee> {
    let levels = ["O1", "C5", "C7", "M1"];
    let provinces = ["เชียงใหม่", "ขอนแก่น", "ชลบุรี", "สงขลา"];

    (0..count)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "id": format!("emp_{:05}", i),
                "name": format!("พนักงาน {}", i),
                "level": levels[i % levels.len()],
                "start_year": 2528 + (i % 40),
                "status": if i % 2 == 0 { "มีสิทธิ์" } else { "ไม่มีสิทธิ์" },
                "visit_province": provinces[i % provinces.len()],
                "bus_fare": 300 + (i % 10) * 50,
                "working_days": 1 + i % 5
            }))
            .expect("Failed to build employee")
        })
        .collect()
}

/// Benchmark: calculators over 10 to 10,000 employees.
fn bench_calculators(c: &mut Criterion) {
    let config = load_config();
    let rates: &RateTable = config.rates();
    let options = SpecialAssistOptions::default();

    let mut group = c.benchmark_group("calculators");

    for count in [10usize, 100, 1_000, 10_000] {
        let employees = create_employees(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("travel", count), &employees, |b, e| {
            b.iter(|| black_box(calculate_travel(e, rates, 2568)))
        });
        group.bench_with_input(
            BenchmarkId::new("special_assist", count),
            &employees,
            |b, e| b.iter(|| black_box(calculate_special_assist(e, rates, 2568, &options))),
        );
        group.bench_with_input(
            BenchmarkId::new("company_trip", count),
            &employees,
            |b, e| b.iter(|| black_box(calculate_company_trip(e, rates, "ชลบุรี", "M1", 2569))),
        );
    }

    group.finish();
}

/// Benchmark: work-day count for one year with the configured holidays.
fn bench_work_days(c: &mut Criterion) {
    let config = load_config();
    let holidays = config.config().holidays().to_vec();

    c.bench_function("work_days_2568", |b| {
        b.iter(|| black_box(calculate_work_days(2568, &holidays)))
    });
}

/// Benchmark: travel calculation through the HTTP layer with 1,000
/// stored employees.
fn bench_http_travel(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(load_config()).expect("Failed to seed store");
    let result = state.store().insert_many(create_employees(1_000));
    assert!(result.failed.is_empty());
    let router = create_router(state);

    c.bench_function("http_travel_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/calculate/travel")
                        .header("Content-Type", "application/json")
                        .body(Body::from(r#"{"year": 2568}"#))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_calculators, bench_work_days, bench_http_travel);
criterion_main!(benches);
