//! Error types for the service score engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving calendars,
//! counting business days and aggregating scores.

use thiserror::Error;

/// The main error type for the service score engine.
///
/// Calendar operations never swallow these errors; only the report layer
/// may downgrade selected ones into warnings.
///
/// # Example
///
/// ```
/// use hizmet_puani::error::EngineError;
///
/// let error = EngineError::MalformedDate {
///     field: "start".to_string(),
///     value: "2025-13-01".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Malformed date for 'start': '2025-13-01' (expected YYYY-MM-DD)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date value could not be parsed as a calendar date.
    #[error("Malformed date for '{field}': '{value}' (expected YYYY-MM-DD)")]
    MalformedDate {
        /// The name of the field holding the value (e.g. "start", "end").
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// An exception kind tag was not one of the known kinds.
    #[error("Invalid exception kind: '{tag}'")]
    InvalidKind {
        /// The rejected tag.
        tag: String,
    },

    /// A removal index did not address an existing exception range.
    #[error("Exception index {index} is out of range (calendar has {len} entries)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of entries in the collection.
        len: usize,
    },

    /// No daily point rate exists for the region/area pair.
    #[error("Daily point rate not found for region {region}, area {area}")]
    PointRateNotFound {
        /// The region number.
        region: u8,
        /// The service area number.
        area: u8,
    },

    /// An award table has no entry for the claimed rank.
    #[error("Award rank '{rank}' is not configured in the {table} award table")]
    AwardNotConfigured {
        /// The table name ("student" or "teacher").
        table: String,
        /// The rank that has no entry.
        rank: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No seed calendar is configured for the academic year.
    #[error("Calendar not found for academic year: {academic_year}")]
    CalendarNotFound {
        /// The academic year label (e.g. "2025-2026").
        academic_year: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
