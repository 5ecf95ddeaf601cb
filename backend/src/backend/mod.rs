//! # Backend Module
//!
//! Contains all non-HTTP logic for the inspection reminder service.
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (reminder lifecycle, classification, dispatch)
//!     ↓
//! Storage Layer (SQLite persistence)  +  Relay Gateway (outbound HTTP)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize and configure the application state
//! - Set up the REST API router with CORS configuration
//! - Coordinate domain logic, persistence, and the messaging relay

pub mod config;
pub mod domain;
pub mod io;
pub mod relay;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    routing::{get, post, put},
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::config::AppConfig;
use crate::backend::domain::{DispatchService, ReminderService, StatsService};
use crate::backend::relay::HttpRelay;
use crate::backend::storage::{DbConnection, MessageLogRepository, ReminderRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub reminder_service: ReminderService,
    pub dispatch_service: DispatchService,
    pub stats_service: StatsService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(&config.database_url).await?;

    let reminders = ReminderRepository::new(db.clone());
    let messages = MessageLogRepository::new(db);

    info!("Setting up domain services");
    let relay = Arc::new(HttpRelay::new(config.relay_url.clone()));
    let reminder_service = ReminderService::new(reminders.clone());
    let dispatch_service =
        DispatchService::new(reminders.clone(), messages.clone(), relay);
    let stats_service = StatsService::new(reminders, messages);

    Ok(AppState {
        reminder_service,
        dispatch_service,
        stats_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // Browser dashboards are served from other origins, so CORS stays open
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .route(
            "/reminders",
            get(io::list_reminders)
                .post(io::create_reminder)
                .delete(io::clear_reminders),
        )
        .route("/reminders/run-now", post(io::run_now))
        .route(
            "/reminders/:id",
            put(io::update_reminder).delete(io::delete_reminder),
        )
        .route("/reminders/:id/send", post(io::send_one))
        .route("/stats", get(io::get_stats))
        .route("/messages/timeseries", get(io::get_message_timeseries));

    Router::new()
        .route("/", get(io::service_info))
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
