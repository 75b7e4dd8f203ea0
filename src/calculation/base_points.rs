//! Base point calculation for a single assignment.
//!
//! Base points are the daily point rate for the assignment's region and
//! service area multiplied by the business days served there.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calendar::{BusinessDayCounter, ResolvedCalendar};
use crate::config::ConfigLoader;
use crate::models::{Assignment, AssignmentLine, ReportWarning, ServicePeriod};

/// Warning code raised when an assignment's date range cannot be read.
pub const MALFORMED_DATE: &str = "MALFORMED_DATE";

/// Warning code raised when no daily rate exists for an assignment's region and area.
pub const POINT_RATE_NOT_FOUND: &str = "POINT_RATE_NOT_FOUND";

/// The result of scoring one assignment.
#[derive(Debug, Clone)]
pub struct AssignmentPointsResult {
    /// The report line for the assignment.
    pub line: AssignmentLine,
    /// Warnings for values that were defaulted to zero.
    pub warnings: Vec<ReportWarning>,
}

/// Calculates base points for one assignment.
///
/// A `range` period is counted with `counter` against `calendar`; a `days`
/// period is used as entered. Lookup failures do not abort the report:
///
/// - a malformed range date counts as 0 days with a [`MALFORMED_DATE`] warning
/// - an unknown region/area pair uses a rate of 0 with a [`POINT_RATE_NOT_FOUND`] warning
///
/// # Example
///
/// ```no_run
/// use hizmet_puani::calculation::calculate_assignment_points;
/// use hizmet_puani::config::ConfigLoader;
/// use hizmet_puani::models::Assignment;
///
/// let loader = ConfigLoader::load("./config/hizmet_puani").unwrap();
/// let calendar = loader.default_rule_set().unwrap().resolve();
/// let assignment = Assignment::with_range(2025, "Okul", 1, 1, "2025-10-27", "2025-11-14");
///
/// let result = calculate_assignment_points(&assignment, &loader, &calendar, &loader.counter());
/// println!("{} days, {} points", result.line.business_days, result.line.base_points);
/// ```
pub fn calculate_assignment_points(
    assignment: &Assignment,
    config: &ConfigLoader,
    calendar: &ResolvedCalendar,
    counter: &BusinessDayCounter,
) -> AssignmentPointsResult {
    let mut warnings = Vec::new();

    let business_days = match &assignment.period {
        ServicePeriod::Days { days } => *days,
        ServicePeriod::Range { start, end } => {
            match counter.count_parsed(start, end, calendar) {
                Ok(days) => days,
                Err(e) => {
                    warn!(
                        school = %assignment.school,
                        error = %e,
                        "Assignment range unreadable, counting 0 days"
                    );
                    warnings.push(ReportWarning::new(
                        MALFORMED_DATE,
                        format!("{}: {}; counted as 0 days", assignment.school, e),
                    ));
                    Decimal::ZERO
                }
            }
        }
    };

    let daily_points = match config.get_daily_points(assignment.region, assignment.area) {
        Ok(rate) => rate,
        Err(e) => {
            warn!(
                school = %assignment.school,
                region = assignment.region,
                area = assignment.area,
                "No daily point rate, using 0"
            );
            warnings.push(ReportWarning::new(
                POINT_RATE_NOT_FOUND,
                format!("{}: {}; rate set to 0", assignment.school, e),
            ));
            Decimal::ZERO
        }
    };

    AssignmentPointsResult {
        line: AssignmentLine {
            year: assignment.year,
            school: assignment.school.clone(),
            region: assignment.region,
            area: assignment.area,
            daily_points,
            business_days,
            base_points: daily_points * business_days,
            period: assignment.period.clone(),
        },
        warnings,
    }
}
