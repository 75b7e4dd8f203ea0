//! The calendar exception collection and its resolution algorithm.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ExceptionKind, ExceptionRange};

use super::ResolvedCalendar;

/// An ordered collection of calendar exceptions owned by one session.
///
/// Entries have no identity beyond their position. Nothing is cached: every call
/// to [`resolve`](Self::resolve) recomputes the disjoint sets from the current
/// entries, so a previously returned [`ResolvedCalendar`] goes stale as soon as
/// the collection changes.
///
/// # Example
///
/// ```
/// use hizmet_puani::calendar::CalendarRuleSet;
/// use hizmet_puani::models::ExceptionKind;
/// use chrono::NaiveDate;
///
/// let mut rules = CalendarRuleSet::new();
/// rules.add_parsed("2025-11-10", "2025-11-14", "FULL_DAY_OFF", "Ara tatil").unwrap();
/// rules.add_parsed("2025-11-12", "2025-11-12", "FORCED_WORKDAY", "Tören").unwrap();
///
/// let resolved = rules.resolve();
/// let wednesday = NaiveDate::from_ymd_opt(2025, 11, 12).unwrap();
/// assert_eq!(resolved.kind_of(wednesday), Some(ExceptionKind::ForcedWorkday));
/// assert_eq!(resolved.full_off().len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarRuleSet {
    ranges: Vec<ExceptionRange>,
}

impl CalendarRuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rule set seeded with the given ranges, in order.
    pub fn with_ranges(ranges: Vec<ExceptionRange>) -> Self {
        Self { ranges }
    }

    /// Appends a range.
    pub fn add(&mut self, range: ExceptionRange) {
        debug!(
            start = %range.start,
            end = %range.end,
            kind = %range.kind,
            "Adding calendar exception"
        );
        self.ranges.push(range);
    }

    /// Parses and appends a range given as raw strings.
    ///
    /// Nothing is appended when parsing fails.
    ///
    /// # Errors
    ///
    /// [`EngineError::MalformedDate`] or [`EngineError::InvalidKind`].
    pub fn add_parsed(
        &mut self,
        start: &str,
        end: &str,
        kind: &str,
        note: impl Into<String>,
    ) -> EngineResult<()> {
        let range = ExceptionRange::parse(start, end, kind, note)?;
        self.add(range);
        Ok(())
    }

    /// Removes and returns the entry at `index`.
    ///
    /// # Errors
    ///
    /// [`EngineError::IndexOutOfRange`] if no entry exists at `index`; the
    /// collection is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> EngineResult<ExceptionRange> {
        if index >= self.ranges.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.ranges.len(),
            });
        }
        let removed = self.ranges.remove(index);
        debug!(index, kind = %removed.kind, "Removed calendar exception");
        Ok(removed)
    }

    /// Replaces every entry with `ranges` (e.g. a default seed calendar).
    pub fn reset(&mut self, ranges: Vec<ExceptionRange>) {
        debug!(count = ranges.len(), "Resetting calendar exceptions");
        self.ranges = ranges;
    }

    /// Returns the entries in insertion order.
    pub fn ranges(&self) -> &[ExceptionRange] {
        &self.ranges
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Resolves the entries into three disjoint date sets.
    ///
    /// Every date of every range is first collected per kind, then precedence is
    /// applied: forced workdays beat full days off, which beat half days off. The
    /// result does not depend on insertion order or on how ranges overlap.
    pub fn resolve(&self) -> ResolvedCalendar {
        let mut raw_full_off: BTreeSet<NaiveDate> = BTreeSet::new();
        let mut raw_half_off: BTreeSet<NaiveDate> = BTreeSet::new();
        let mut raw_forced_work: BTreeSet<NaiveDate> = BTreeSet::new();

        for range in &self.ranges {
            let target = match range.kind {
                ExceptionKind::FullDayOff => &mut raw_full_off,
                ExceptionKind::HalfDayOff => &mut raw_half_off,
                ExceptionKind::ForcedWorkday => &mut raw_forced_work,
            };
            target.extend(range.dates());
        }

        let full_off: BTreeSet<NaiveDate> =
            raw_full_off.difference(&raw_forced_work).copied().collect();
        let half_off: BTreeSet<NaiveDate> = raw_half_off
            .iter()
            .filter(|d| !raw_forced_work.contains(d) && !full_off.contains(d))
            .copied()
            .collect();

        debug!(
            entries = self.ranges.len(),
            full_off = full_off.len(),
            half_off = half_off.len(),
            forced_work = raw_forced_work.len(),
            "Resolved calendar exceptions"
        );

        ResolvedCalendar {
            full_off,
            half_off,
            forced_work: raw_forced_work,
        }
    }
}
