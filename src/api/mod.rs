//! HTTP API module for the service score engine.
//!
//! This module provides the REST endpoints for reading the seed calendar,
//! resolving calendars, counting business days and computing score reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BusinessDaysRequest, DateQuery, ExceptionRangeRequest, ResolveRequest, ScoreRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, BusinessDaysResponse, BusinessDaysResult, DefaultCalendarResponse,
    ResolveResponse,
};
pub use state::AppState;
