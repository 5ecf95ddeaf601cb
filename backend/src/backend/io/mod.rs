//! # IO Module
//!
//! Interface layer between HTTP callers and the domain services.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: REST interfaces for every reminder operation
//! - **Error Translation**: domain errors become proper HTTP status codes
//! - **Serialization**: JSON request/response handling via the shared DTOs

pub mod rest;

pub use rest::*;
