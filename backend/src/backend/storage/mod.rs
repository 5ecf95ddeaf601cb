//! # Storage Module
//!
//! Handles all data persistence for the reminder service.
//!
//! ## Key Responsibilities
//!
//! - **Connection Management**: SQLite pool setup and schema creation
//! - **Reminder Records**: CRUD over the reminders table, including the
//!   id-sequence reset performed by clear-all
//! - **Delivery Log**: append-only message log and its aggregate queries
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: domain services never touch SQL directly
//! - **Testability**: every test runs against its own in-memory database

pub mod connection;
pub mod repositories;

pub use connection::DbConnection;
pub use repositories::{MessageLogRepository, ReminderRepository};
