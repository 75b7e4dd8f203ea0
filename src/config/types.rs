//! Configuration types for the service score engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::{BTreeMap, HashMap};

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{AwardRank, ExceptionRange};

/// Engine-wide settings from `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// The human-readable name of the engine configuration.
    pub name: String,
    /// The version or academic year of the configuration.
    pub version: String,
    /// The regulation the point tables follow.
    pub regulation: String,
    /// The weekly non-working days.
    pub weekend: Vec<Weekday>,
    /// Target business days per year used for the sanity-check warning.
    pub expected_days_per_year: Decimal,
    /// The academic year whose calendar is used when a request has none.
    pub default_calendar: String,
}

/// Daily point table from `points.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PointsConfig {
    /// Map of region → service area → daily point rate.
    pub daily_points: BTreeMap<u8, BTreeMap<u8, Decimal>>,
}

/// Boarding duty rates per duty.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardingDutyRates {
    /// Regional boarding or special education schools.
    pub special: Decimal,
    /// Other dormitories.
    pub other: Decimal,
}

/// EBA/İÇYS digital content rates.
#[derive(Debug, Clone, Deserialize)]
pub struct DigitalContentRates {
    /// Points per scenario turned into e-content.
    pub scenario: Decimal,
    /// Points per e-content produced.
    pub content: Decimal,
    /// Maximum count of each kind per calendar year.
    pub yearly_cap: u32,
}

/// Provincial subject committee rates.
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectCommitteeRates {
    /// Points per year served.
    pub per_year: Decimal,
    /// Maximum number of years counted.
    pub max_years: u32,
}

/// Student award points by service area group.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentAwardPoints {
    /// Points in service areas 1–3.
    pub areas_1_3: Decimal,
    /// Points in service areas 4–6.
    pub areas_4_6: Decimal,
}

/// Bonus rates and caps from `bonuses.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusRates {
    /// Boarding duty rates.
    pub boarding_duty: BoardingDutyRates,
    /// Points per month of support courses.
    pub support_course_per_month: Decimal,
    /// Points per month of remedial training.
    pub remedial_per_month: Decimal,
    /// Digital content rates.
    pub digital_content: DigitalContentRates,
    /// Subject committee rates.
    pub subject_committee: SubjectCommitteeRates,
    /// Student award table.
    pub student_award: HashMap<AwardRank, StudentAwardPoints>,
    /// Teacher award table.
    pub teacher_award: HashMap<AwardRank, Decimal>,
}

/// A seed calendar file under `calendars/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// The academic year label (e.g. "2025-2026").
    pub academic_year: String,
    /// The exception ranges, in order.
    pub ranges: Vec<ExceptionRange>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    settings: EngineSettings,
    points: PointsConfig,
    bonuses: BonusRates,
    /// Seed calendars keyed by academic year.
    calendars: BTreeMap<String, CalendarConfig>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        settings: EngineSettings,
        points: PointsConfig,
        bonuses: BonusRates,
        calendars: Vec<CalendarConfig>,
    ) -> Self {
        let calendars = calendars
            .into_iter()
            .map(|c| (c.academic_year.clone(), c))
            .collect();
        Self {
            settings,
            points,
            bonuses,
            calendars,
        }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the daily point table.
    pub fn points(&self) -> &PointsConfig {
        &self.points
    }

    /// Returns the bonus rates.
    pub fn bonuses(&self) -> &BonusRates {
        &self.bonuses
    }

    /// Returns all seed calendars keyed by academic year.
    pub fn calendars(&self) -> &BTreeMap<String, CalendarConfig> {
        &self.calendars
    }
}
