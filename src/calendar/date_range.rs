//! Date parsing and inclusive date iteration.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// The only accepted textual date form.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date, ignoring surrounding whitespace.
///
/// The value must be exactly four year digits, two month digits and two day
/// digits. Unpadded fields and signed or extended years are rejected.
///
/// # Errors
///
/// Returns [`EngineError::MalformedDate`] carrying `field` and the raw value.
///
/// # Example
///
/// ```
/// use hizmet_puani::calendar::parse_iso_date;
///
/// let date = parse_iso_date("start", " 2025-09-08 ").unwrap();
/// assert_eq!(date.to_string(), "2025-09-08");
/// assert!(parse_iso_date("start", "08.09.2025").is_err());
/// ```
pub fn parse_iso_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    let malformed = || EngineError::MalformedDate {
        field: field.to_string(),
        value: value.to_string(),
    };

    let trimmed = value.trim();
    if !is_iso_date_shape(trimmed) {
        return Err(malformed());
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|_| malformed())
}

/// Checks for the `dddd-dd-dd` layout without validating the calendar date.
fn is_iso_date_shape(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// An inclusive range of calendar dates, always iterated in ascending order.
///
/// Constructing with `end < start` swaps the bounds.
///
/// # Example
///
/// ```
/// use hizmet_puani::calendar::DateRange;
/// use chrono::NaiveDate;
///
/// let a = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let b = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
/// let days: Vec<NaiveDate> = DateRange::new(a, b).collect();
/// assert_eq!(days.len(), 3); // 28th, 29th (leap day), 1st
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `[min(a, b), max(a, b)]`.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        let (first, last) = if b < a { (b, a) } else { (a, b) };
        Self {
            next: Some(first),
            last,
        }
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if current > self.last {
            self.next = None;
            return None;
        }
        self.next = if current == self.last {
            None
        } else {
            current.succ_opt()
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) if current <= self.last => {
                let remaining = (self.last - current).num_days() as usize + 1;
                (remaining, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DateRange {}
