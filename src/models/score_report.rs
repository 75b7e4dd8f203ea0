//! Score report models.
//!
//! This module contains the [`ScoreReport`] type and its associated structures
//! that capture every output of a score calculation: per-assignment lines,
//! per-year summaries, bonus lines, totals and warnings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ExceptionRange, ServicePeriod};

/// Base points earned at one assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentLine {
    /// The year the service is reported under.
    pub year: i32,
    /// The school or institution name.
    pub school: String,
    /// Development region.
    pub region: u8,
    /// Service area.
    pub area: u8,
    /// The daily point rate for the region/area pair (zero if unknown).
    pub daily_points: Decimal,
    /// Business days served (zero if the range could not be read).
    pub business_days: Decimal,
    /// `daily_points × business_days`.
    pub base_points: Decimal,
    /// The service length as entered.
    pub period: ServicePeriod,
}

/// Base points aggregated over all assignments of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// The year.
    pub year: i32,
    /// Total business days in the year.
    pub business_days: Decimal,
    /// Total base points in the year.
    pub base_points: Decimal,
}

/// The bonus categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusCategory {
    /// Boarding duty (belletici).
    BoardingDuty,
    /// Support and training courses (DYK/İYEP).
    SupportCourse,
    /// Remedial/support training (telafi/destek).
    RemedialTraining,
    /// Student competition award.
    StudentAward,
    /// The teacher's own award.
    TeacherAward,
    /// EBA/İÇYS digital content.
    DigitalContent,
    /// Provincial subject committee chair (il zümre).
    SubjectCommittee,
    /// Manually entered extra points.
    ManualExtra,
}

impl BonusCategory {
    /// Returns the Turkish display label.
    pub fn label(&self) -> &'static str {
        match self {
            BonusCategory::BoardingDuty => "Belletici",
            BonusCategory::SupportCourse => "DYK/İYEP",
            BonusCategory::RemedialTraining => "Telafi/Destek",
            BonusCategory::StudentAward => "Öğrenci Yarışması",
            BonusCategory::TeacherAward => "Öğretmen Derecesi",
            BonusCategory::DigitalContent => "EBA/İÇYS",
            BonusCategory::SubjectCommittee => "İl Zümre",
            BonusCategory::ManualExtra => "Manuel Ek",
        }
    }
}

/// Points awarded in one bonus category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusLine {
    /// The category.
    pub category: BonusCategory,
    /// The display label of the category.
    pub label: String,
    /// The points awarded (after caps).
    pub amount: Decimal,
    /// Whether a regulatory cap reduced the amount.
    pub cap_applied: bool,
    /// Human-readable explanation of the amount.
    pub reasoning: String,
}

/// A warning generated while building a report.
///
/// Warnings flag inputs that were capped, ignored or defaulted; they never stop
/// the report from being produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

impl ReportWarning {
    /// Creates a warning.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Report totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTotals {
    /// Sum of all base points.
    pub base_total: Decimal,
    /// Sum of all bonus lines.
    pub bonus_total: Decimal,
    /// `base_total + bonus_total`.
    pub grand_total: Decimal,
}

/// The complete result of a score calculation.
///
/// # Example
///
/// ```
/// use hizmet_puani::models::{ScoreReport, ScoreTotals};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let report = ScoreReport {
///     report_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     assignments: vec![],
///     years: vec![],
///     bonuses: vec![],
///     totals: ScoreTotals {
///         base_total: Decimal::ZERO,
///         bonus_total: Decimal::ZERO,
///         grand_total: Decimal::ZERO,
///     },
///     warnings: vec![],
///     calendar: vec![],
///     duration_us: 0,
/// };
/// assert!(report.warning_codes().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the report.
    pub engine_version: String,
    /// One line per assignment, in input order.
    pub assignments: Vec<AssignmentLine>,
    /// One summary per year, ascending.
    pub years: Vec<YearSummary>,
    /// One line per bonus category.
    pub bonuses: Vec<BonusLine>,
    /// Totals.
    pub totals: ScoreTotals,
    /// Warnings in the order they were raised.
    pub warnings: Vec<ReportWarning>,
    /// The calendar exceptions the business days were counted with.
    pub calendar: Vec<ExceptionRange>,
    /// Time taken to build the report in microseconds.
    pub duration_us: u64,
}

impl ScoreReport {
    /// Returns the warning codes in order.
    pub fn warning_codes(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.code.as_str()).collect()
    }
}
