//! Score report aggregation.
//!
//! [`compute_report`] is the main entry point of the calculation layer. It
//! resolves the session calendar once, scores each assignment against it,
//! summarises the base points per year, adds the bonus lines and totals.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::calendar::CalendarRuleSet;
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{
    Assignment, BonusInputs, ReportWarning, ScoreReport, ScoreTotals, YearSummary,
};

use super::base_points::calculate_assignment_points;
use super::bonus::calculate_bonuses;

/// Warning code raised when a year's business day total differs from the expected count.
pub const EXPECTED_DAYS_MISMATCH: &str = "EXPECTED_DAYS_MISMATCH";

/// Largest difference from the expected day count that is not reported.
fn expected_days_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Builds a complete score report.
///
/// `expected_days` enables the per-year sanity check: when it is positive, any
/// year whose business day total differs from it by more than 0.01 raises an
/// [`EXPECTED_DAYS_MISMATCH`] warning. Pass zero to disable the check.
///
/// # Errors
///
/// Only configuration gaps are errors
/// ([`EngineError::AwardNotConfigured`](crate::error::EngineError::AwardNotConfigured)).
/// Unreadable assignment input is reported through warnings.
///
/// # Example
///
/// ```no_run
/// use hizmet_puani::calculation::compute_report;
/// use hizmet_puani::config::ConfigLoader;
/// use hizmet_puani::models::{Assignment, BonusInputs};
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/hizmet_puani").unwrap();
/// let rules = loader.default_rule_set().unwrap();
/// let assignments = vec![Assignment::with_range(2025, "Okul", 2, 4, "2025-09-08", "2026-06-26")];
///
/// let bonuses = BonusInputs::default();
/// let report = compute_report(&assignments, &bonuses, &rules, &loader, Decimal::ZERO).unwrap();
/// println!("Grand total: {}", report.totals.grand_total);
/// ```
pub fn compute_report(
    assignments: &[Assignment],
    bonuses: &BonusInputs,
    rules: &CalendarRuleSet,
    config: &ConfigLoader,
    expected_days: Decimal,
) -> EngineResult<ScoreReport> {
    let started = Instant::now();
    let calendar = rules.resolve();
    let counter = config.counter();

    let mut warnings: Vec<ReportWarning> = Vec::new();
    let mut lines = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let result = calculate_assignment_points(assignment, config, &calendar, &counter);
        warnings.extend(result.warnings);
        lines.push(result.line);
    }

    let mut by_year: BTreeMap<i32, YearSummary> = BTreeMap::new();
    for line in &lines {
        let summary = by_year.entry(line.year).or_insert_with(|| YearSummary {
            year: line.year,
            business_days: Decimal::ZERO,
            base_points: Decimal::ZERO,
        });
        summary.business_days += line.business_days;
        summary.base_points += line.base_points;
    }
    let years: Vec<YearSummary> = by_year.into_values().collect();

    if expected_days > Decimal::ZERO {
        for summary in &years {
            if (summary.business_days - expected_days).abs() > expected_days_tolerance() {
                warnings.push(ReportWarning::new(
                    EXPECTED_DAYS_MISMATCH,
                    format!(
                        "{}: {} business days counted, {} expected",
                        summary.year,
                        summary.business_days.normalize(),
                        expected_days.normalize()
                    ),
                ));
            }
        }
    }

    let bonus_result = calculate_bonuses(bonuses, config.bonus_rates())?;
    warnings.extend(bonus_result.warnings.iter().cloned());

    let base_total: Decimal = years.iter().map(|y| y.base_points).sum();
    let bonus_total = bonus_result.total();
    let totals = ScoreTotals {
        base_total,
        bonus_total,
        grand_total: base_total + bonus_total,
    };

    let report = ScoreReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        assignments: lines,
        years,
        bonuses: bonus_result.lines,
        totals,
        warnings,
        calendar: rules.ranges().to_vec(),
        duration_us: started.elapsed().as_micros() as u64,
    };

    info!(
        report_id = %report.report_id,
        assignments = report.assignments.len(),
        grand_total = %report.totals.grand_total,
        warnings = report.warnings.len(),
        "Score report computed"
    );

    Ok(report)
}
