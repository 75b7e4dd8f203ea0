//! Score calculation logic.
//!
//! This module turns assignments and bonus inputs into a [`ScoreReport`]:
//! base points per assignment from the daily point table and the business
//! day counter, capped bonus categories, and the aggregated report.
//!
//! [`ScoreReport`]: crate::models::ScoreReport

mod awards;
mod base_points;
mod bonus;
mod digital_content;
mod report;

pub use awards::{
    STUDENT_AWARD_SINGLE, TEACHER_AWARD_SINGLE, calculate_student_award, calculate_teacher_award,
};
pub use base_points::{
    AssignmentPointsResult, MALFORMED_DATE, POINT_RATE_NOT_FOUND, calculate_assignment_points,
};
pub use bonus::{
    BonusResult, BonusesResult, REMEDIAL_SINGLE_TRAINING, SUBJECT_COMMITTEE_CAPPED,
    calculate_boarding_duty, calculate_bonuses, calculate_manual_extra,
    calculate_remedial_training, calculate_subject_committee, calculate_support_courses,
};
pub use digital_content::{
    DIGITAL_CONTENT_CAPPED, DIGITAL_CONTENT_MINISTRY_ASSIGNMENT, calculate_digital_content,
};
pub use report::{EXPECTED_DAYS_MISMATCH, compute_report};
