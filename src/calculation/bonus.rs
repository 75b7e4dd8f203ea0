//! Additive bonus point calculation.
//!
//! Each bonus category is evaluated by its own function returning a
//! [`BonusResult`]; [`calculate_bonuses`] runs all of them in report order.

use rust_decimal::Decimal;

use crate::config::{BonusRates, SubjectCommitteeRates};
use crate::error::EngineResult;
use crate::models::{BonusCategory, BonusInputs, BonusLine, ReportWarning};

use super::awards::{calculate_student_award, calculate_teacher_award};
use super::digital_content::calculate_digital_content;

/// Warning code raised whenever remedial training months are claimed.
pub const REMEDIAL_SINGLE_TRAINING: &str = "REMEDIAL_SINGLE_TRAINING";

/// Warning code raised when subject committee years exceed the cap.
pub const SUBJECT_COMMITTEE_CAPPED: &str = "SUBJECT_COMMITTEE_CAPPED";

/// The outcome of one bonus category.
#[derive(Debug, Clone)]
pub struct BonusResult {
    /// The bonus line for the report.
    pub line: BonusLine,
    /// Warnings raised while evaluating the category.
    pub warnings: Vec<ReportWarning>,
}

impl BonusResult {
    pub(crate) fn new(
        category: BonusCategory,
        amount: Decimal,
        cap_applied: bool,
        reasoning: String,
    ) -> Self {
        Self {
            line: BonusLine {
                category,
                label: category.label().to_string(),
                amount,
                cap_applied,
                reasoning,
            },
            warnings: Vec::new(),
        }
    }

    pub(crate) fn with_warning(mut self, code: &str, message: impl Into<String>) -> Self {
        self.warnings.push(ReportWarning::new(code, message));
        self
    }
}

/// All bonus lines and warnings for one set of inputs.
#[derive(Debug, Clone)]
pub struct BonusesResult {
    /// One line per category, in report order.
    pub lines: Vec<BonusLine>,
    /// Warnings from every category, in report order.
    pub warnings: Vec<ReportWarning>,
}

impl BonusesResult {
    /// Returns the sum of all bonus lines.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.amount).sum()
    }
}

/// Limits `count` to `max`, reporting whether the limit applied.
pub(crate) fn cap_count(count: u32, max: u32) -> (u32, bool) {
    if count > max { (max, true) } else { (count, false) }
}

/// Calculates boarding duty points: special duties × special rate + other duties × other rate.
///
/// # Example
///
/// ```
/// use hizmet_puani::calculation::calculate_boarding_duty;
/// use hizmet_puani::config::BoardingDutyRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = BoardingDutyRates {
///     special: Decimal::from_str("0.2").unwrap(),
///     other: Decimal::from_str("0.1").unwrap(),
/// };
/// let result = calculate_boarding_duty(3, 2, &rates);
/// assert_eq!(result.line.amount, Decimal::from_str("0.8").unwrap());
/// ```
pub fn calculate_boarding_duty(
    special: u32,
    other: u32,
    rates: &crate::config::BoardingDutyRates,
) -> BonusResult {
    let amount = Decimal::from(special) * rates.special + Decimal::from(other) * rates.other;
    BonusResult::new(
        BonusCategory::BoardingDuty,
        amount,
        false,
        format!(
            "{} special × {} + {} other × {} = {}",
            special,
            rates.special.normalize(),
            other,
            rates.other.normalize(),
            amount.normalize()
        ),
    )
}

/// Calculates support course (DYK/İYEP) points: months × rate.
pub fn calculate_support_courses(months: u32, per_month: Decimal) -> BonusResult {
    let amount = Decimal::from(months) * per_month;
    BonusResult::new(
        BonusCategory::SupportCourse,
        amount,
        false,
        format!(
            "{} months × {} = {}",
            months,
            per_month.normalize(),
            amount.normalize()
        ),
    )
}

/// Calculates remedial training points: months × rate.
///
/// Only one training per month counts, which the caller enforces by entering
/// months rather than trainings; a reminder warning is raised whenever months
/// are claimed.
pub fn calculate_remedial_training(months: u32, per_month: Decimal) -> BonusResult {
    let amount = Decimal::from(months) * per_month;
    let result = BonusResult::new(
        BonusCategory::RemedialTraining,
        amount,
        false,
        format!(
            "{} months × {} = {}",
            months,
            per_month.normalize(),
            amount.normalize()
        ),
    );
    if months > 0 {
        result.with_warning(
            REMEDIAL_SINGLE_TRAINING,
            "Remedial training: only one training per month counts, even when several were given",
        )
    } else {
        result
    }
}

/// Calculates subject committee points: `min(years, max_years) × per_year`.
pub fn calculate_subject_committee(years: u32, rates: &SubjectCommitteeRates) -> BonusResult {
    let (counted, cap_applied) = cap_count(years, rates.max_years);
    let amount = Decimal::from(counted) * rates.per_year;

    let reasoning = if cap_applied {
        format!(
            "{} years × {} = {} (capped at {} years)",
            years,
            rates.per_year.normalize(),
            amount.normalize(),
            rates.max_years
        )
    } else {
        format!(
            "{} years × {} = {}",
            years,
            rates.per_year.normalize(),
            amount.normalize()
        )
    };

    let result = BonusResult::new(BonusCategory::SubjectCommittee, amount, cap_applied, reasoning);
    if cap_applied {
        result.with_warning(
            SUBJECT_COMMITTEE_CAPPED,
            format!(
                "Subject committee: at most {} years count; {} entered",
                rates.max_years, years
            ),
        )
    } else {
        result
    }
}

/// Passes manually entered extra points through as a bonus line.
pub fn calculate_manual_extra(amount: Decimal) -> BonusResult {
    BonusResult::new(
        BonusCategory::ManualExtra,
        amount,
        false,
        format!("Entered manually: {}", amount.normalize()),
    )
}

/// Calculates every bonus category in report order.
///
/// # Errors
///
/// [`EngineError::AwardNotConfigured`](crate::error::EngineError::AwardNotConfigured)
/// if a claimed award rank is missing from the configured tables.
pub fn calculate_bonuses(inputs: &BonusInputs, rates: &BonusRates) -> EngineResult<BonusesResult> {
    let results = vec![
        calculate_boarding_duty(
            inputs.boarding_duty_special,
            inputs.boarding_duty_other,
            &rates.boarding_duty,
        ),
        calculate_support_courses(inputs.support_course_months, rates.support_course_per_month),
        calculate_remedial_training(inputs.remedial_months, rates.remedial_per_month),
        calculate_student_award(inputs.student_award, inputs.area_group, &rates.student_award)?,
        calculate_teacher_award(inputs.teacher_award, &rates.teacher_award)?,
        calculate_digital_content(
            inputs.eba_scenarios,
            inputs.eba_contents,
            inputs.eba_ministry_assignment,
            &rates.digital_content,
        ),
        calculate_subject_committee(inputs.subject_committee_years, &rates.subject_committee),
        calculate_manual_extra(inputs.manual_extra),
    ];

    let mut lines = Vec::with_capacity(results.len());
    let mut warnings = Vec::new();
    for result in results {
        lines.push(result.line);
        warnings.extend(result.warnings);
    }

    Ok(BonusesResult { lines, warnings })
}
