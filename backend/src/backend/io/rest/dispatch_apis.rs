//! # REST API for Notification Dispatch
//!
//! Endpoints triggering the batch run and on-demand single sends.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{error, info};

use crate::backend::AppState;
use shared::RunNowRequest;

use super::{error_response, parse_as_of};

/// Run the batch dispatch for every due reminder
pub async fn run_now(
    State(state): State<AppState>,
    body: Option<Json<RunNowRequest>>,
) -> Response {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    info!("POST /api/reminders/run-now - as_of: {:?}", request.as_of);

    let as_of = match parse_as_of(request.as_of.as_deref()) {
        Ok(value) => value,
        Err(rejection) => return rejection,
    };

    match state.dispatch_service.run_now(as_of).await {
        Ok(actions) => {
            info!("Batch dispatch finished with {} actions", actions.len());
            (StatusCode::OK, Json(actions)).into_response()
        }
        Err(e) => {
            error!("Batch dispatch failed: {}", e);
            error_response(e)
        }
    }
}

/// Dispatch one reminder on demand, regardless of its due date
pub async fn send_one(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    info!("POST /api/reminders/{}/send", id);

    match state.dispatch_service.send_one(id, None).await {
        Ok(action) => (StatusCode::OK, Json(action)).into_response(),
        Err(e) => {
            error!("Failed to send reminder {}: {}", id, e);
            error_response(e)
        }
    }
}
