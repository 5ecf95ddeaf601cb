//! # REST API Interface Layer
//!
//! HTTP endpoints for the reminder service. This layer handles request
//! deserialization, error translation from domain to HTTP status codes,
//! and request logging; business logic stays in the domain layer.

pub mod dispatch_apis;
pub mod reminder_apis;
pub mod stats_apis;

pub use dispatch_apis::*;
pub use reminder_apis::*;
pub use stats_apis::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::NaiveDate;
use serde_json::json;

use crate::backend::domain::{parse_strict_date, DomainError};

/// Service banner with the endpoint catalog
pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "message": "Vehicle inspection reminder API is running",
        "available_endpoints": {
            "POST /api/reminders": "Add a new reminder",
            "GET /api/reminders": "List reminders with due status (as_of=YYYY-MM-DD)",
            "PUT /api/reminders/{id}": "Replace a reminder",
            "DELETE /api/reminders/{id}": "Delete a reminder",
            "DELETE /api/reminders": "Clear all reminders and reset ids",
            "POST /api/reminders/run-now": "Dispatch notifications for all due reminders",
            "POST /api/reminders/{id}/send": "Dispatch one reminder regardless of due date",
            "GET /api/stats": "Message and reminder counts",
            "GET /api/messages/timeseries": "Outbound message timeseries (period=day|month)"
        }
    }))
}

/// Translate a domain error into its HTTP shape
pub(super) fn error_response(e: DomainError) -> Response {
    let status = match &e {
        DomainError::InvalidDueDate(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": e.to_string() }))).into_response()
}

/// Parse an optional `as_of` parameter, rejecting divergent formats
pub(super) fn parse_as_of(raw: Option<&str>) -> Result<Option<NaiveDate>, Response> {
    match raw {
        None => Ok(None),
        Some(value) => parse_strict_date(value)
            .map(Some)
            .map_err(error_response),
    }
}
