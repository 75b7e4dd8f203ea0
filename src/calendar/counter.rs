//! Business day counting over a resolved calendar.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::{DateRange, ResolvedCalendar, parse_iso_date};

/// How a single date is treated when counting.
///
/// Classification checks the weekend first, so a weekend date is always
/// [`DayClass::Weekend`] even when it is tagged as a forced workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// A weekly non-working day. Contributes 0.
    Weekend,
    /// A weekday forced to count. Contributes 1.
    ForcedWorkday,
    /// A weekday inside a full-day-off range. Contributes 0.
    FullDayOff,
    /// A weekday inside a half-day-off range. Contributes 0.5.
    HalfDayOff,
    /// A weekday with no exception. Contributes 1.
    Ordinary,
}

impl DayClass {
    /// Returns the number of business days this class contributes.
    pub fn value(&self) -> Decimal {
        match self {
            DayClass::Weekend | DayClass::FullDayOff => Decimal::ZERO,
            DayClass::HalfDayOff => Decimal::new(5, 1),
            DayClass::ForcedWorkday | DayClass::Ordinary => Decimal::ONE,
        }
    }
}

/// Per-class breakdown of a counted interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDayTally {
    /// Number of calendar days in the interval.
    pub calendar_days: u32,
    /// Weekend days (including weekend dates tagged as forced workdays).
    pub weekend_days: u32,
    /// Weekdays counted because of a forced-workday exception.
    pub forced_workdays: u32,
    /// Weekdays dropped by a full-day-off exception.
    pub full_days_off: u32,
    /// Weekdays counted as half days.
    pub half_days_off: u32,
    /// Weekdays without any exception.
    pub ordinary_days: u32,
    /// The business day total.
    pub business_days: Decimal,
}

impl BusinessDayTally {
    fn record(&mut self, class: DayClass) {
        self.calendar_days += 1;
        match class {
            DayClass::Weekend => self.weekend_days += 1,
            DayClass::ForcedWorkday => self.forced_workdays += 1,
            DayClass::FullDayOff => self.full_days_off += 1,
            DayClass::HalfDayOff => self.half_days_off += 1,
            DayClass::Ordinary => self.ordinary_days += 1,
        }
        self.business_days += class.value();
    }
}

/// Counts business days against a [`ResolvedCalendar`].
///
/// The counter only carries the weekend definition; the calendar is passed to
/// every call so one counter can serve any number of independent calendars.
///
/// # Example
///
/// ```
/// use hizmet_puani::calendar::{BusinessDayCounter, CalendarRuleSet};
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
///
/// let mut rules = CalendarRuleSet::new();
/// rules.add_parsed("2025-11-10", "2025-11-14", "FULL_DAY_OFF", "Ara tatil").unwrap();
/// let resolved = rules.resolve();
///
/// let counter = BusinessDayCounter::default();
/// let start = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 11, 16).unwrap();
/// assert_eq!(counter.count(start, end, &resolved), Decimal::from(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessDayCounter {
    weekend: HashSet<Weekday>,
}

impl Default for BusinessDayCounter {
    fn default() -> Self {
        Self::new([Weekday::Sat, Weekday::Sun])
    }
}

impl BusinessDayCounter {
    /// Creates a counter with the given weekly non-working days.
    pub fn new(weekend: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            weekend: weekend.into_iter().collect(),
        }
    }

    /// Returns `true` if `date` falls on a weekly non-working day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday())
    }

    /// Classifies a single date.
    pub fn classify(&self, date: NaiveDate, calendar: &ResolvedCalendar) -> DayClass {
        if self.is_weekend(date) {
            DayClass::Weekend
        } else if calendar.forced_work.contains(&date) {
            DayClass::ForcedWorkday
        } else if calendar.full_off.contains(&date) {
            DayClass::FullDayOff
        } else if calendar.half_off.contains(&date) {
            DayClass::HalfDayOff
        } else {
            DayClass::Ordinary
        }
    }

    /// Counts business days in `[min(start, end), max(start, end)]`.
    ///
    /// The result is always a multiple of 0.5.
    pub fn count(&self, start: NaiveDate, end: NaiveDate, calendar: &ResolvedCalendar) -> Decimal {
        DateRange::new(start, end)
            .map(|date| self.classify(date, calendar).value())
            .sum()
    }

    /// Counts business days between two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// [`EngineError::MalformedDate`](crate::error::EngineError::MalformedDate)
    /// naming `start` or `end`. No partial count is returned.
    pub fn count_parsed(
        &self,
        start: &str,
        end: &str,
        calendar: &ResolvedCalendar,
    ) -> EngineResult<Decimal> {
        let start = parse_iso_date("start", start)?;
        let end = parse_iso_date("end", end)?;
        Ok(self.count(start, end, calendar))
    }

    /// Counts business days and reports how each date was classified.
    pub fn tally(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        calendar: &ResolvedCalendar,
    ) -> BusinessDayTally {
        let mut tally = BusinessDayTally::default();
        for date in DateRange::new(start, end) {
            tally.record(self.classify(date, calendar));
        }
        tally
    }
}
