use thiserror::Error;

/// Failure categories surfaced by the domain services.
///
/// Validation errors are raised before any mutation; not-found is kept
/// distinct so callers can answer 404 instead of a generic failure.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDueDate(String),
    #[error("reminder not found: {0}")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
