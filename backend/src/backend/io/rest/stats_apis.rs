//! # REST API for Statistics
//!
//! Message-traffic counters and the outbound timeseries used by
//! dashboards.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{error, info};
use serde::Deserialize;
use serde_json::json;

use crate::backend::domain::TimeseriesPeriod;
use crate::backend::AppState;

use super::error_response;

/// Query parameters for the timeseries API
#[derive(Debug, Deserialize)]
pub struct TimeseriesQuery {
    pub period: Option<String>,
    pub days: Option<u32>,
    pub months: Option<u32>,
}

/// Today's message traffic and the reminder count
pub async fn get_stats(State(state): State<AppState>) -> Response {
    info!("GET /api/stats");

    match state.stats_service.stats().await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => {
            error!("Failed to compute stats: {}", e);
            error_response(e)
        }
    }
}

/// Outbound message counts over time
pub async fn get_message_timeseries(
    State(state): State<AppState>,
    Query(query): Query<TimeseriesQuery>,
) -> Response {
    info!("GET /api/messages/timeseries - query: {:?}", query);

    let period = match query.period.as_deref().unwrap_or("day") {
        "day" => TimeseriesPeriod::Day {
            days: query.days.unwrap_or(30),
        },
        "month" => TimeseriesPeriod::Month {
            months: query.months.unwrap_or(12),
        },
        other => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("unknown period '{}': expected day or month", other)
                })),
            )
                .into_response()
        }
    };

    match state.stats_service.outbound_timeseries(period).await {
        Ok(series) => (StatusCode::OK, Json(series)).into_response(),
        Err(e) => {
            error!("Failed to build timeseries: {}", e);
            error_response(e)
        }
    }
}
