//! Performance benchmarks for the service score engine.
//!
//! Covers calendar resolution, business day counting over long spans and the
//! HTTP endpoints end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Datelike, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hizmet_puani::api::{AppState, create_router};
use hizmet_puani::calendar::{BusinessDayCounter, CalendarRuleSet};
use hizmet_puani::config::ConfigLoader;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/hizmet_puani").expect("Failed to load config");
    AppState::new(config)
}

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Builds a rule set with the seed calendar repeated over several academic years.
fn multi_year_rules(years: i32) -> CalendarRuleSet {
    let config = ConfigLoader::load("./config/hizmet_puani").expect("Failed to load config");
    let seed = config.default_calendar().expect("Missing default calendar");

    let mut rules = CalendarRuleSet::new();
    for shift in 0..years {
        for range in &seed {
            let mut range = range.clone();
            range.start = range.start.with_year_offset(shift);
            range.end = range.end.with_year_offset(shift);
            rules.add(range);
        }
    }
    rules
}

trait YearOffset {
    fn with_year_offset(self, years: i32) -> Self;
}

impl YearOffset for NaiveDate {
    fn with_year_offset(self, years: i32) -> Self {
        self.with_year(self.year() + years).unwrap_or(self)
    }
}

/// Benchmark: Resolving the seed calendar.
fn bench_resolve_seed(c: &mut Criterion) {
    let rules = multi_year_rules(1);

    c.bench_function("resolve_seed_calendar", |b| {
        b.iter(|| black_box(rules.resolve()))
    });
}

/// Benchmark: Counting one academic year against the seed calendar.
fn bench_count_academic_year(c: &mut Criterion) {
    let resolved = multi_year_rules(1).resolve();
    let counter = BusinessDayCounter::default();
    let start = make_date("2025-09-08");
    let end = make_date("2026-06-26");

    c.bench_function("count_academic_year", |b| {
        b.iter(|| black_box(counter.count(black_box(start), black_box(end), &resolved)))
    });
}

/// Benchmark: Resolve and count over growing multi-year spans.
fn bench_scaling(c: &mut Criterion) {
    let counter = BusinessDayCounter::default();
    let start = make_date("2025-09-01");

    let mut group = c.benchmark_group("scaling");

    for years in [1, 5, 10, 20].iter() {
        let rules = multi_year_rules(*years);
        let end = start.with_year_offset(*years);

        group.throughput(Throughput::Elements(*years as u64));
        group.bench_with_input(BenchmarkId::new("years", years), years, |b, _| {
            b.iter(|| {
                let resolved = rules.resolve();
                black_box(counter.count(start, end, &resolved))
            })
        });
    }

    group.finish();
}

/// Benchmark: POST /business-days with the default calendar.
fn bench_business_days_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "queries": [
            {"start": "2025-09-08", "end": "2025-12-31"},
            {"start": "2026-01-01", "end": "2026-06-26"}
        ],
        "include_breakdown": true
    })
    .to_string();

    c.bench_function("business_days_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/business-days")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: POST /score with a few range assignments and bonuses.
fn bench_score_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let assignments: Vec<serde_json::Value> = (0..5)
        .map(|i| {
            serde_json::json!({
                "year": 2025,
                "school": format!("Okul {}", i),
                "region": 1 + i % 3,
                "area": 1 + i % 6,
                "period": {"mode": "range", "start": "2025-09-08", "end": "2026-06-26"}
            })
        })
        .collect();
    let body = serde_json::json!({
        "assignments": assignments,
        "bonuses": {"support_course_months": 6, "eba_contents": 12}
    })
    .to_string();

    c.bench_function("score_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/score")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_seed,
    bench_count_academic_year,
    bench_scaling,
    bench_business_days_endpoint,
    bench_score_endpoint,
);
criterion_main!(benches);
