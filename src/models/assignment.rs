//! Assignment records.
//!
//! An [`Assignment`] is one school/institution a person served at during a year.
//! Its length is either a manually entered day count or a date range that is
//! counted against the session calendar.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the service length of an assignment is given.
///
/// Range dates are kept as entered; they are parsed when the report is built so
/// a malformed value can be reported against the assignment it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ServicePeriod {
    /// A manually entered business day count.
    Days {
        /// Number of business days.
        days: Decimal,
    },
    /// An inclusive date range in `YYYY-MM-DD` form.
    Range {
        /// First day of service.
        start: String,
        /// Last day of service.
        end: String,
    },
}

/// One school/institution record.
///
/// # Example
///
/// ```
/// use hizmet_puani::models::{Assignment, ServicePeriod};
///
/// let json = r#"{
///     "year": 2025,
///     "school": "Atatürk Ortaokulu",
///     "region": 1,
///     "area": 1,
///     "period": {"mode": "range", "start": "2025-09-08", "end": "2026-06-26"}
/// }"#;
/// let assignment: Assignment = serde_json::from_str(json).unwrap();
/// assert!(matches!(assignment.period, ServicePeriod::Range { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The year the service is reported under.
    pub year: i32,
    /// The school or institution name.
    pub school: String,
    /// Development region (1–3).
    pub region: u8,
    /// Service area (1–6).
    pub area: u8,
    /// The service length.
    pub period: ServicePeriod,
}

impl Assignment {
    /// Creates an assignment counted over a date range.
    pub fn with_range(
        year: i32,
        school: impl Into<String>,
        region: u8,
        area: u8,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            year,
            school: school.into(),
            region,
            area,
            period: ServicePeriod::Range {
                start: start.into(),
                end: end.into(),
            },
        }
    }

    /// Creates an assignment with a manual day count.
    pub fn with_days(
        year: i32,
        school: impl Into<String>,
        region: u8,
        area: u8,
        days: Decimal,
    ) -> Self {
        Self {
            year,
            school: school.into(),
            region,
            area,
            period: ServicePeriod::Days { days },
        }
    }
}
