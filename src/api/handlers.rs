//! HTTP request handlers for the service score API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_report;
use crate::calendar::parse_iso_date;
use crate::error::EngineError;

use super::request::{BusinessDaysRequest, ResolveRequest, ScoreRequest, build_rule_set};
use super::response::{
    ApiError, ApiErrorResponse, BusinessDaysResponse, BusinessDaysResult, DefaultCalendarResponse,
    ResolveResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calendar/default", get(default_calendar_handler))
        .route("/calendar/resolve", post(resolve_handler))
        .route("/business-days", post(business_days_handler))
        .route("/score", post(score_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for GET /calendar/default.
///
/// Returns the configured seed calendar.
async fn default_calendar_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let config = state.config();

    match config.default_calendar() {
        Ok(ranges) => {
            info!(
                correlation_id = %correlation_id,
                entries = ranges.len(),
                "Serving default calendar"
            );
            json_response(
                StatusCode::OK,
                DefaultCalendarResponse {
                    academic_year: config.settings().default_calendar.clone(),
                    ranges,
                },
            )
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /calendar/resolve.
///
/// Resolves the given calendar, or the default seed, into its three date sets.
async fn resolve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing resolve request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    match build_rule_set(request.calendar, || config.default_rule_set()) {
        Ok(rules) => json_response(
            StatusCode::OK,
            ResolveResponse::new(rules.len(), rules.resolve()),
        ),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /business-days.
///
/// Counts every query against one resolved calendar.
async fn business_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<BusinessDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing business days request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let rules = match build_rule_set(request.calendar, || config.default_rule_set()) {
        Ok(rules) => rules,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    let calendar = rules.resolve();
    let counter = config.counter();

    let mut results = Vec::with_capacity(request.queries.len());
    for query in &request.queries {
        let parsed = parse_iso_date("start", &query.start)
            .and_then(|start| Ok((start, parse_iso_date("end", &query.end)?)));
        let (start, end) = match parsed {
            Ok(bounds) => bounds,
            Err(err) => return engine_error_response(correlation_id, err),
        };

        let result = if request.include_breakdown {
            let tally = counter.tally(start, end, &calendar);
            BusinessDaysResult {
                start,
                end,
                business_days: tally.business_days,
                breakdown: Some(tally),
            }
        } else {
            BusinessDaysResult {
                start,
                end,
                business_days: counter.count(start, end, &calendar),
                breakdown: None,
            }
        };
        results.push(result);
    }

    let total: Decimal = results.iter().map(|r| r.business_days).sum();
    info!(
        correlation_id = %correlation_id,
        queries = results.len(),
        total = %total,
        "Business days counted"
    );

    json_response(StatusCode::OK, BusinessDaysResponse { results, total })
}

/// Handler for POST /score.
///
/// Accepts assignments and bonus inputs and returns the full score report.
async fn score_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing score request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let rules = match build_rule_set(request.calendar, || config.default_rule_set()) {
        Ok(rules) => rules,
        Err(err) => return engine_error_response(correlation_id, err),
    };
    let expected_days = request
        .expected_days
        .unwrap_or(config.settings().expected_days_per_year);

    match compute_report(
        &request.assignments,
        &request.bonuses,
        &rules,
        config,
        expected_days,
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                grand_total = %report.totals.grand_total,
                duration_us = report.duration_us,
                "Score calculation completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::ScoreReport;
    use axum::body::Body;
    use axum::http::Request;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::load("./config/hizmet_puani").unwrap())
    }

    fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.into()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_default_calendar_returns_seed() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/calendar/default")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let json = body_json(response).await;
        assert_eq!(json["academic_year"], "2025-2026");
        assert_eq!(json["ranges"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_business_days_with_explicit_calendar() {
        let router = create_router(create_test_state());
        let body = r#"{
            "calendar": [
                {"start": "2025-11-10", "end": "2025-11-14", "kind": "FULL_DAY_OFF"},
                {"start": "2025-11-12", "end": "2025-11-12", "kind": "FORCED_WORKDAY"}
            ],
            "queries": [{"start": "2025-11-03", "end": "2025-11-16"}],
            "include_breakdown": true
        }"#;

        let response = router.oneshot(post_json("/business-days", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let result: BusinessDaysResponse = serde_json::from_value(json).unwrap();
        assert_eq!(result.total, Decimal::from(6));
        let breakdown = result.results[0].breakdown.as_ref().unwrap();
        assert_eq!(breakdown.calendar_days, 14);
        assert_eq!(breakdown.weekend_days, 4);
        assert_eq!(breakdown.forced_workdays, 1);
        assert_eq!(breakdown.full_days_off, 4);
    }

    #[tokio::test]
    async fn test_business_days_bad_query_date_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{"calendar": [], "queries": [{"start": "2025-11-03", "end": "2025-02-30"}]}"#;

        let response = router.oneshot(post_json("/business-days", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_DATE");
    }

    #[tokio::test]
    async fn test_resolve_unknown_kind_returns_400() {
        let router = create_router(create_test_state());
        let body =
            r#"{"calendar": [{"start": "2025-11-10", "end": "2025-11-14", "kind": "HOLIDAY"}]}"#;

        let response = router.oneshot(post_json("/calendar/resolve", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(error.code, "INVALID_KIND");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/score", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_queries_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/business-days", r#"{"calendar": []}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_score_with_manual_days() {
        let router = create_router(create_test_state());
        let body = r#"{
            "assignments": [
                {"year": 2024, "school": "Okul", "region": 2, "area": 4,
                 "period": {"mode": "days", "days": "180"}}
            ],
            "bonuses": {"subject_committee_years": 2}
        }"#;

        let response = router.oneshot(post_json("/score", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let report: ScoreReport = serde_json::from_value(body_json(response).await).unwrap();
        // 180 × 0.060 + 2 × 1
        assert_eq!(report.totals.grand_total, Decimal::from_str("12.8").unwrap());
        assert!(report.warnings.is_empty());
    }
}
