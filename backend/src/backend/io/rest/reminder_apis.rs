//! # REST API for Reminder Management
//!
//! Endpoints for creating, listing, updating, and deleting inspection
//! reminders.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{error, info};
use serde::Deserialize;

use crate::backend::AppState;
use shared::{ClearRemindersResponse, ReminderInput, ReminderListResponse, ReminderResponse};

use super::{error_response, parse_as_of};

/// Query parameters for the reminder listing API
#[derive(Debug, Deserialize)]
pub struct ReminderListQuery {
    pub as_of: Option<String>,
}

/// Create a new reminder
pub async fn create_reminder(
    State(state): State<AppState>,
    Json(request): Json<ReminderInput>,
) -> Response {
    info!("POST /api/reminders - request: {:?}", request);

    match state.reminder_service.add_reminder(request).await {
        Ok(reminder) => (
            StatusCode::CREATED,
            Json(ReminderResponse {
                reminder,
                success_message: "Reminder created successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create reminder: {}", e);
            error_response(e)
        }
    }
}

/// List reminders annotated with their due status
pub async fn list_reminders(
    State(state): State<AppState>,
    Query(query): Query<ReminderListQuery>,
) -> Response {
    info!("GET /api/reminders - query: {:?}", query);

    let as_of = match parse_as_of(query.as_of.as_deref()) {
        Ok(value) => value,
        Err(rejection) => return rejection,
    };

    match state.reminder_service.list_reminders(as_of).await {
        Ok(reminders) => {
            (StatusCode::OK, Json(ReminderListResponse { reminders })).into_response()
        }
        Err(e) => {
            error!("Failed to list reminders: {}", e);
            error_response(e)
        }
    }
}

/// Replace a reminder
pub async fn update_reminder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<ReminderInput>,
) -> Response {
    info!("PUT /api/reminders/{} - request: {:?}", id, request);

    match state.reminder_service.update_reminder(id, request).await {
        Ok(reminder) => (
            StatusCode::OK,
            Json(ReminderResponse {
                reminder,
                success_message: "Reminder updated successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update reminder {}: {}", id, e);
            error_response(e)
        }
    }
}

/// Delete a reminder
pub async fn delete_reminder(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    info!("DELETE /api/reminders/{}", id);

    match state.reminder_service.delete_reminder(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete reminder {}: {}", id, e);
            error_response(e)
        }
    }
}

/// Delete every reminder and reset the id sequence
pub async fn clear_reminders(State(state): State<AppState>) -> Response {
    info!("DELETE /api/reminders - clearing all");

    match state.reminder_service.clear_reminders().await {
        Ok(removed) => (
            StatusCode::OK,
            Json(ClearRemindersResponse {
                removed,
                message: "All reminders deleted and id sequence reset".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to clear reminders: {}", e);
            error_response(e)
        }
    }
}
