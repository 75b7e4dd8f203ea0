//! The work-calendar engine.
//!
//! Callers collect [`ExceptionRange`](crate::models::ExceptionRange) entries in a
//! [`CalendarRuleSet`], resolve them into a [`ResolvedCalendar`] of three disjoint
//! date sets, and count business days over any interval with a
//! [`BusinessDayCounter`]. Every value here is owned by its caller; there is no
//! shared or global calendar state.
//!
//! # Example
//!
//! ```
//! use hizmet_puani::calendar::{BusinessDayCounter, CalendarRuleSet};
//! use rust_decimal::Decimal;
//!
//! let mut rules = CalendarRuleSet::new();
//! rules.add_parsed("2025-11-10", "2025-11-14", "FULL_DAY_OFF", "Ara tatil").unwrap();
//! rules.add_parsed("2025-10-29", "2025-10-29", "FORCED_WORKDAY", "29 Ekim").unwrap();
//!
//! let counter = BusinessDayCounter::default();
//! let days = counter
//!     .count_parsed("2025-10-27", "2025-11-14", &rules.resolve())
//!     .unwrap();
//! assert_eq!(days, Decimal::from(10));
//! ```

mod counter;
mod date_range;
mod resolved;
mod rule_set;

pub use counter::{BusinessDayCounter, BusinessDayTally, DayClass};
pub use date_range::{DateRange, ISO_DATE_FORMAT, parse_iso_date};
pub use resolved::ResolvedCalendar;
pub use rule_set::CalendarRuleSet;
