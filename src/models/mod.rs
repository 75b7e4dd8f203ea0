//! Core data models for the service score engine.
//!
//! This module contains all the domain models used throughout the engine.

mod assignment;
mod bonus;
mod exception_range;
mod score_report;

pub use assignment::{Assignment, ServicePeriod};
pub use bonus::{AreaGroup, AwardRank, BonusInputs};
pub use exception_range::{ExceptionKind, ExceptionRange};
pub use score_report::{
    AssignmentLine, BonusCategory, BonusLine, ReportWarning, ScoreReport, ScoreTotals, YearSummary,
};
