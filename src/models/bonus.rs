//! Bonus point inputs.
//!
//! [`BonusInputs`] collects the counts and selections for every additive bonus
//! category. All fields default to "nothing claimed".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The rank of a competition award.
///
/// Only one rank is claimed per award category: the single highest one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardRank {
    /// No award.
    #[default]
    None,
    /// National first place.
    NationalFirst,
    /// National second place.
    NationalSecond,
    /// National third place or honourable mention.
    NationalThird,
    /// International first place.
    InternationalFirst,
    /// International second place.
    InternationalSecond,
    /// International third place or honourable mention.
    InternationalThird,
}

impl AwardRank {
    /// Returns the snake_case tag used in requests and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            AwardRank::None => "none",
            AwardRank::NationalFirst => "national_first",
            AwardRank::NationalSecond => "national_second",
            AwardRank::NationalThird => "national_third",
            AwardRank::InternationalFirst => "international_first",
            AwardRank::InternationalSecond => "international_second",
            AwardRank::InternationalThird => "international_third",
        }
    }

    /// Returns the Turkish display label.
    pub fn label(&self) -> &'static str {
        match self {
            AwardRank::None => "Yok",
            AwardRank::NationalFirst => "Ulusal 1.",
            AwardRank::NationalSecond => "Ulusal 2.",
            AwardRank::NationalThird => "Ulusal 3./Mansiyon",
            AwardRank::InternationalFirst => "Uluslararası 1.",
            AwardRank::InternationalSecond => "Uluslararası 2.",
            AwardRank::InternationalThird => "Uluslararası 3./Mansiyon",
        }
    }
}

/// The service area group used by the student award table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaGroup {
    /// Service areas 1 to 3.
    #[default]
    #[serde(rename = "1-3")]
    Areas1To3,
    /// Service areas 4 to 6.
    #[serde(rename = "4-6")]
    Areas4To6,
}

/// Inputs for the additive bonus categories.
///
/// # Example
///
/// ```
/// use hizmet_puani::models::{AwardRank, BonusInputs};
///
/// let inputs: BonusInputs = serde_json::from_str(r#"{
///     "support_course_months": 4,
///     "teacher_award": "national_second"
/// }"#).unwrap();
/// assert_eq!(inputs.support_course_months, 4);
/// assert_eq!(inputs.teacher_award, AwardRank::NationalSecond);
/// assert_eq!(inputs.eba_contents, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusInputs {
    /// Boarding duties at regional boarding or special education schools.
    pub boarding_duty_special: u32,
    /// Boarding duties at other dormitories.
    pub boarding_duty_other: u32,
    /// Months of support and training courses (DYK/İYEP).
    pub support_course_months: u32,
    /// Months of remedial/support training. One training per month is counted.
    pub remedial_months: u32,
    /// Highest student competition award the teacher coached.
    pub student_award: AwardRank,
    /// Service area group for the student award table.
    pub area_group: AreaGroup,
    /// Highest award the teacher won personally.
    pub teacher_award: AwardRank,
    /// EBA scenarios turned into e-content this calendar year.
    pub eba_scenarios: u32,
    /// EBA e-contents produced this calendar year.
    pub eba_contents: u32,
    /// EBA content was produced under a ministry assignment (earns nothing).
    pub eba_ministry_assignment: bool,
    /// Years served as provincial subject committee chair.
    pub subject_committee_years: u32,
    /// Free-form extra points.
    pub manual_extra: Decimal,
}
