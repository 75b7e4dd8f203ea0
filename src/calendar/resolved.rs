//! The resolved, disjoint view of a calendar's exceptions.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ExceptionKind;

/// Three pairwise-disjoint date sets produced by
/// [`CalendarRuleSet::resolve`](super::CalendarRuleSet::resolve).
///
/// A value is a snapshot: mutating the rule set afterwards does not update it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCalendar {
    pub(crate) full_off: BTreeSet<NaiveDate>,
    pub(crate) half_off: BTreeSet<NaiveDate>,
    pub(crate) forced_work: BTreeSet<NaiveDate>,
}

impl ResolvedCalendar {
    /// Dates that do not count at all (unless they are weekends, which never count).
    pub fn full_off(&self) -> &BTreeSet<NaiveDate> {
        &self.full_off
    }

    /// Dates that count as half a day.
    pub fn half_off(&self) -> &BTreeSet<NaiveDate> {
        &self.half_off
    }

    /// Dates that count as a full day regardless of holiday ranges.
    pub fn forced_work(&self) -> &BTreeSet<NaiveDate> {
        &self.forced_work
    }

    /// Returns the winning exception kind for a date, if any.
    pub fn kind_of(&self, date: NaiveDate) -> Option<ExceptionKind> {
        if self.forced_work.contains(&date) {
            Some(ExceptionKind::ForcedWorkday)
        } else if self.full_off.contains(&date) {
            Some(ExceptionKind::FullDayOff)
        } else if self.half_off.contains(&date) {
            Some(ExceptionKind::HalfDayOff)
        } else {
            None
        }
    }

    /// Returns `true` when no date carries an exception.
    pub fn is_empty(&self) -> bool {
        self.full_off.is_empty() && self.half_off.is_empty() && self.forced_work.is_empty()
    }
}
