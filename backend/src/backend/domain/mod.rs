//! # Domain Module
//!
//! Contains all business logic for the inspection reminder service.
//!
//! ## Module Organization
//!
//! - **classification**: days-until-due arithmetic and status tiers
//! - **phone**: dialing-code normalization for the relay
//! - **message**: the fixed WhatsApp notification template
//! - **reminder_service**: reminder CRUD with due-date validation
//! - **dispatch_service**: the classify → format → relay → log pipeline
//! - **stats_service**: message traffic and reminder counts
//!
//! ## Business Rules
//!
//! - Due dates are stored strictly as `YYYY-MM-DD`; anything else is
//!   rejected before it reaches storage
//! - Listing computes days-until-due fresh on every read; nothing derived
//!   is ever persisted
//! - Batch dispatch notifies only records that are not yet expired;
//!   single dispatch is always allowed on demand
//! - Every relay attempt leaves exactly one delivery-log entry, whatever
//!   its outcome

pub mod classification;
pub mod dispatch_service;
pub mod error;
pub mod message;
pub mod phone;
pub mod reminder_service;
pub mod stats_service;

pub use classification::*;
pub use dispatch_service::*;
pub use error::*;
pub use message::*;
pub use phone::*;
pub use reminder_service::*;
pub use stats_service::*;
