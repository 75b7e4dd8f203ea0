//! Competition award points.
//!
//! Both award categories take a single rank: the highest one earned. The
//! student award additionally depends on the service area group.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::StudentAwardPoints;
use crate::error::{EngineError, EngineResult};
use crate::models::{AreaGroup, AwardRank, BonusCategory};

use super::bonus::BonusResult;

/// Warning code raised when a student award is claimed.
pub const STUDENT_AWARD_SINGLE: &str = "STUDENT_AWARD_SINGLE";

/// Warning code raised when a teacher award is claimed.
pub const TEACHER_AWARD_SINGLE: &str = "TEACHER_AWARD_SINGLE";

/// Looks up student competition award points for a rank and area group.
///
/// # Errors
///
/// [`EngineError::AwardNotConfigured`] if the table has no entry for `rank`.
pub fn calculate_student_award(
    rank: AwardRank,
    group: AreaGroup,
    table: &HashMap<AwardRank, StudentAwardPoints>,
) -> EngineResult<BonusResult> {
    let points = table
        .get(&rank)
        .ok_or_else(|| EngineError::AwardNotConfigured {
            table: "student".to_string(),
            rank: rank.as_str().to_string(),
        })?;

    let (amount, group_label) = match group {
        AreaGroup::Areas1To3 => (points.areas_1_3, "1-3"),
        AreaGroup::Areas4To6 => (points.areas_4_6, "4-6"),
    };

    let result = BonusResult::new(
        BonusCategory::StudentAward,
        amount,
        false,
        format!(
            "{} in service areas {} = {}",
            rank.label(),
            group_label,
            amount.normalize()
        ),
    );

    Ok(if rank != AwardRank::None {
        result.with_warning(
            STUDENT_AWARD_SINGLE,
            "Student competition: counted once, for the single highest award",
        )
    } else {
        result
    })
}

/// Looks up points for the teacher's own award.
///
/// # Errors
///
/// [`EngineError::AwardNotConfigured`] if the table has no entry for `rank`.
pub fn calculate_teacher_award(
    rank: AwardRank,
    table: &HashMap<AwardRank, Decimal>,
) -> EngineResult<BonusResult> {
    let amount = table
        .get(&rank)
        .copied()
        .ok_or_else(|| EngineError::AwardNotConfigured {
            table: "teacher".to_string(),
            rank: rank.as_str().to_string(),
        })?;

    let result = BonusResult::new(
        BonusCategory::TeacherAward,
        amount,
        false,
        format!("{} = {}", rank.label(), amount.normalize()),
    );

    Ok(if rank != AwardRank::None {
        result.with_warning(
            TEACHER_AWARD_SINGLE,
            "Teacher award: only one award counts, the single highest",
        )
    } else {
        result
    })
}
