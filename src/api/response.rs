//! Response types for the service score API.
//!
//! This module defines the success bodies for the calendar endpoints and the
//! error response structures used by every endpoint.

use std::collections::BTreeSet;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{BusinessDayTally, ResolvedCalendar};
use crate::error::EngineError;
use crate::models::ExceptionRange;

/// Response body for `GET /calendar/default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultCalendarResponse {
    /// The academic year the seed calendar covers.
    pub academic_year: String,
    /// The seed exception ranges in order.
    pub ranges: Vec<ExceptionRange>,
}

/// Response body for `POST /calendar/resolve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    /// Number of exception ranges that were resolved.
    pub entries: usize,
    /// Dates that do not count.
    pub full_day_off: BTreeSet<NaiveDate>,
    /// Dates that count as half a day.
    pub half_day_off: BTreeSet<NaiveDate>,
    /// Dates that count as a full day regardless of holiday ranges.
    pub forced_workday: BTreeSet<NaiveDate>,
}

impl ResolveResponse {
    /// Builds the response from a resolved calendar.
    pub fn new(entries: usize, calendar: ResolvedCalendar) -> Self {
        Self {
            entries,
            full_day_off: calendar.full_off,
            half_day_off: calendar.half_off,
            forced_workday: calendar.forced_work,
        }
    }
}

/// The count for one business day query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDaysResult {
    /// The query start as entered.
    pub start: NaiveDate,
    /// The query end as entered.
    pub end: NaiveDate,
    /// Business days in the inclusive interval.
    pub business_days: Decimal,
    /// Per-class breakdown, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<BusinessDayTally>,
}

/// Response body for `POST /business-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDaysResponse {
    /// One result per query, in request order.
    pub results: Vec<BusinessDaysResult>,
    /// Sum over all queries.
    pub total: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::MalformedDate { field, .. } => Self::bad_request(ApiError::with_details(
                "MALFORMED_DATE",
                message,
                format!("Field '{}' must be a calendar date in YYYY-MM-DD form", field),
            )),
            EngineError::InvalidKind { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_KIND",
                message,
                "Expected one of FULL_DAY_OFF, HALF_DAY_OFF, FORCED_WORKDAY",
            )),
            EngineError::IndexOutOfRange { .. } => {
                Self::bad_request(ApiError::new("INDEX_OUT_OF_RANGE", message))
            }
            EngineError::PointRateNotFound { .. } => {
                Self::bad_request(ApiError::new("POINT_RATE_NOT_FOUND", message))
            }
            EngineError::CalendarNotFound { .. } => {
                Self::bad_request(ApiError::new("CALENDAR_NOT_FOUND", message))
            }
            EngineError::AwardNotConfigured { .. } => Self::internal(ApiError::with_details(
                "CONFIG_ERROR",
                "Award table incomplete",
                message,
            )),
            EngineError::ConfigNotFound { .. } => Self::internal(ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration error",
                message,
            )),
            EngineError::ConfigParseError { .. } => Self::internal(ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration parse error",
                message,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_malformed_date_maps_to_400() {
        let response: ApiErrorResponse = EngineError::MalformedDate {
            field: "end".to_string(),
            value: "2025-02-30".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "MALFORMED_DATE");
        assert!(response.error.message.contains("2025-02-30"));
    }

    #[test]
    fn test_invalid_kind_maps_to_400() {
        let response: ApiErrorResponse = EngineError::InvalidKind {
            tag: "HOLIDAY".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_KIND");
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let response: ApiErrorResponse = EngineError::AwardNotConfigured {
            table: "student".to_string(),
            rank: "national_first".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
        assert!(response.error.details.unwrap().contains("national_first"));
    }

    #[test]
    fn test_resolve_response_renames_sets() {
        let mut rules = crate::calendar::CalendarRuleSet::new();
        rules
            .add_parsed("2025-11-10", "2025-11-11", "HALF_DAY_OFF", "")
            .unwrap();
        let response = ResolveResponse::new(rules.len(), rules.resolve());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["entries"], 1);
        assert_eq!(json["half_day_off"][0], "2025-11-10");
        assert!(json["full_day_off"].as_array().unwrap().is_empty());
    }
}
