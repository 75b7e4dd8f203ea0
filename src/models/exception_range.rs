//! Calendar exception models.
//!
//! This module contains the [`ExceptionKind`] tag and the [`ExceptionRange`] entry
//! that callers add to a [`CalendarRuleSet`](crate::calendar::CalendarRuleSet).

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{DateRange, parse_iso_date};
use crate::error::{EngineError, EngineResult};

/// The effect an exception range has on the dates it covers.
///
/// The set of kinds is closed: unknown tags are rejected when parsed, never
/// mapped onto one of these variants. The legacy tags `OFF_FULL`, `OFF_HALF`
/// and `COUNT_AS_WORKDAY` are accepted as aliases. Tags are matched
/// case-insensitively after trimming, both by [`FromStr`] and by serde.
///
/// # Example
///
/// ```
/// use hizmet_puani::models::ExceptionKind;
///
/// let kind: ExceptionKind = "OFF_HALF".parse().unwrap();
/// assert_eq!(kind, ExceptionKind::HalfDayOff);
/// assert!("HOLIDAY".parse::<ExceptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ExceptionKind {
    /// The date does not count at all.
    #[serde(rename = "FULL_DAY_OFF")]
    FullDayOff,
    /// The date counts as half a day.
    #[serde(rename = "HALF_DAY_OFF")]
    HalfDayOff,
    /// The date counts as a full day even inside a holiday block (e.g. a ceremony).
    #[serde(rename = "FORCED_WORKDAY")]
    ForcedWorkday,
}

impl ExceptionKind {
    /// Returns the canonical tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExceptionKind::FullDayOff => "FULL_DAY_OFF",
            ExceptionKind::HalfDayOff => "HALF_DAY_OFF",
            ExceptionKind::ForcedWorkday => "FORCED_WORKDAY",
        }
    }

    /// Returns the Turkish display label shown to end users.
    pub fn label(&self) -> &'static str {
        match self {
            ExceptionKind::FullDayOff => "İş günü sayılmayan (tam gün)",
            ExceptionKind::HalfDayOff => "İş günü sayılmayan (yarım gün)",
            ExceptionKind::ForcedWorkday => "İş günü sayılır (tören vb.)",
        }
    }
}

impl std::fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExceptionKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FULL_DAY_OFF" | "OFF_FULL" => Ok(ExceptionKind::FullDayOff),
            "HALF_DAY_OFF" | "OFF_HALF" => Ok(ExceptionKind::HalfDayOff),
            "FORCED_WORKDAY" | "COUNT_AS_WORKDAY" => Ok(ExceptionKind::ForcedWorkday),
            _ => Err(EngineError::InvalidKind { tag: s.to_string() }),
        }
    }
}

impl TryFrom<String> for ExceptionKind {
    type Error = EngineError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

/// A user-defined calendar exception covering an inclusive date range.
///
/// If `end` is before `start` the range is treated as if the two were swapped.
/// The `note` is descriptive only. Entries are replaced, never edited in place.
///
/// # Example
///
/// ```
/// use hizmet_puani::models::{ExceptionKind, ExceptionRange};
///
/// let range = ExceptionRange::parse("2025-11-14", "2025-11-10", "OFF_FULL", "Ara tatil").unwrap();
/// assert_eq!(range.kind, ExceptionKind::FullDayOff);
/// assert_eq!(range.dates().count(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExceptionRange {
    /// First date of the range as entered.
    pub start: NaiveDate,
    /// Last date of the range as entered (inclusive).
    pub end: NaiveDate,
    /// The effect on the covered dates.
    pub kind: ExceptionKind,
    /// Free-text description.
    #[serde(default)]
    pub note: String,
}

impl ExceptionRange {
    /// Creates a range from already-parsed dates.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        kind: ExceptionKind,
        note: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            kind,
            note: note.into(),
        }
    }

    /// Creates a range from raw `YYYY-MM-DD` strings and a kind tag.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MalformedDate`] naming `start` or `end` if a date does not parse
    /// - [`EngineError::InvalidKind`] if the tag is not a known kind
    pub fn parse(
        start: &str,
        end: &str,
        kind: &str,
        note: impl Into<String>,
    ) -> EngineResult<Self> {
        let start = parse_iso_date("start", start)?;
        let end = parse_iso_date("end", end)?;
        let kind = kind.parse()?;
        Ok(Self::new(start, end, kind, note))
    }

    /// Iterates every covered date in ascending order.
    pub fn dates(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}
