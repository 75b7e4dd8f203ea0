//! Request types for the service score API.
//!
//! Calendar entries arrive as raw strings so that bad dates and unknown kind
//! tags surface as `MALFORMED_DATE` / `INVALID_KIND` errors instead of generic
//! JSON rejections.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarRuleSet;
use crate::error::{EngineError, EngineResult};
use crate::models::{Assignment, BonusInputs, ExceptionRange};

/// One exception range in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionRangeRequest {
    /// First date, `YYYY-MM-DD`.
    pub start: String,
    /// Last date, `YYYY-MM-DD`. May precede `start`.
    pub end: String,
    /// Kind tag (`FULL_DAY_OFF`, `HALF_DAY_OFF`, `FORCED_WORKDAY` or a legacy alias).
    pub kind: String,
    /// Free-form note.
    #[serde(default)]
    pub note: String,
}

impl TryFrom<ExceptionRangeRequest> for ExceptionRange {
    type Error = EngineError;

    fn try_from(req: ExceptionRangeRequest) -> Result<Self, Self::Error> {
        ExceptionRange::parse(&req.start, &req.end, &req.kind, req.note)
    }
}

/// Builds the rule set for a request.
///
/// `None` means the configured default seed calendar; `Some(vec![])` is an
/// empty calendar.
pub(crate) fn build_rule_set(
    calendar: Option<Vec<ExceptionRangeRequest>>,
    default: impl FnOnce() -> EngineResult<CalendarRuleSet>,
) -> EngineResult<CalendarRuleSet> {
    match calendar {
        None => default(),
        Some(entries) => {
            let ranges = entries
                .into_iter()
                .map(ExceptionRange::try_from)
                .collect::<EngineResult<Vec<_>>>()?;
            Ok(CalendarRuleSet::with_ranges(ranges))
        }
    }
}

/// Request body for `POST /calendar/resolve`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// The calendar to resolve; the default seed when omitted.
    #[serde(default)]
    pub calendar: Option<Vec<ExceptionRangeRequest>>,
}

/// One interval to count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateQuery {
    /// First date, `YYYY-MM-DD`.
    pub start: String,
    /// Last date, `YYYY-MM-DD`. May precede `start`.
    pub end: String,
}

/// Request body for `POST /business-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDaysRequest {
    /// The calendar to count against; the default seed when omitted.
    #[serde(default)]
    pub calendar: Option<Vec<ExceptionRangeRequest>>,
    /// Intervals to count, each independently.
    pub queries: Vec<DateQuery>,
    /// Include a per-class breakdown for every query.
    #[serde(default)]
    pub include_breakdown: bool,
}

/// Request body for `POST /score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// The assignments to score.
    pub assignments: Vec<Assignment>,
    /// Bonus inputs; nothing claimed when omitted.
    #[serde(default)]
    pub bonuses: BonusInputs,
    /// The calendar to count range assignments against; the default seed when omitted.
    #[serde(default)]
    pub calendar: Option<Vec<ExceptionRangeRequest>>,
    /// Expected business days per year. Falls back to the configured value
    /// when omitted; zero disables the check.
    #[serde(default)]
    pub expected_days: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExceptionKind;

    fn range_request(start: &str, end: &str, kind: &str) -> ExceptionRangeRequest {
        ExceptionRangeRequest {
            start: start.to_string(),
            end: end.to_string(),
            kind: kind.to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_exception_range_request_converts() {
        let request = range_request("2025-10-29", "2025-10-29", "count_as_workday");
        let range = ExceptionRange::try_from(request).unwrap();
        assert_eq!(range.kind, ExceptionKind::ForcedWorkday);
    }

    #[test]
    fn test_exception_range_request_rejects_unknown_kind() {
        let result = ExceptionRange::try_from(range_request("2025-10-29", "2025-10-29", "HOLIDAY"));
        assert!(matches!(result, Err(EngineError::InvalidKind { .. })));
    }

    #[test]
    fn test_build_rule_set_uses_default_when_omitted() {
        let rules = build_rule_set(None, || {
            let mut rules = CalendarRuleSet::new();
            rules.add_parsed("2025-11-10", "2025-11-14", "FULL_DAY_OFF", "")?;
            Ok(rules)
        })
        .unwrap();
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_build_rule_set_explicit_empty_calendar() {
        let rules = build_rule_set(Some(vec![]), || panic!("default must not be used")).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_build_rule_set_stops_at_first_bad_entry() {
        let result = build_rule_set(
            Some(vec![
                range_request("2025-11-10", "2025-11-14", "FULL_DAY_OFF"),
                range_request("2025-11-31", "2025-12-01", "FULL_DAY_OFF"),
            ]),
            || Ok(CalendarRuleSet::new()),
        );
        match result {
            Err(EngineError::MalformedDate { field, value }) => {
                assert_eq!(field, "start");
                assert_eq!(value, "2025-11-31");
            }
            other => panic!("Expected MalformedDate error, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_deserialize_score_request_minimal() {
        let json = r#"{
            "assignments": [
                {
                    "year": 2025,
                    "school": "Okul",
                    "region": 1,
                    "area": 1,
                    "period": {"mode": "days", "days": "10"}
                }
            ]
        }"#;
        let request: ScoreRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.assignments.len(), 1);
        assert!(request.calendar.is_none());
        assert!(request.expected_days.is_none());
        assert_eq!(request.bonuses, BonusInputs::default());
    }

    #[test]
    fn test_deserialize_business_days_request() {
        let json = r#"{
            "calendar": [{"start": "2025-11-10", "end": "2025-11-14", "kind": "OFF_FULL"}],
            "queries": [{"start": "2025-11-03", "end": "2025-11-16"}],
            "include_breakdown": true
        }"#;
        let request: BusinessDaysRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.calendar.as_ref().map(Vec::len), Some(1));
        assert_eq!(request.queries.len(), 1);
        assert!(request.include_breakdown);
    }
}
