//! Due-date arithmetic: strict date parsing, day offsets, and the status
//! partition applied to every reminder read.

use chrono::NaiveDate;

use crate::backend::domain::error::DomainError;
use shared::{DueStatus, Reminder, ReminderWithStatus};

/// Canonical storage format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Map a day offset to its due status.
///
/// The arms partition every integer: 0 and 1 are exact matches, the guard
/// takes the whole range above 1, so the final arm is reached only for
/// negative offsets. Keep it that way.
pub fn classify_by_days(days_until: i64) -> DueStatus {
    match days_until {
        0 => DueStatus::DueToday,
        1 => DueStatus::DueTomorrow,
        d if d >= 2 => DueStatus::Upcoming,
        _ => DueStatus::Expired,
    }
}

/// Parse a date that must read exactly `YYYY-MM-DD`.
///
/// A plain chrono parse is not enough: `%Y-%m-%d` accepts unpadded fields
/// like `2024-6-15`, so the reformatted value must match the input.
pub fn parse_strict_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let parsed = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDueDate(raw.to_string()))?;
    if parsed.format(DATE_FORMAT).to_string() != raw {
        return Err(DomainError::InvalidDueDate(raw.to_string()));
    }
    Ok(parsed)
}

/// Attach the derived due-status view to a reminder.
///
/// Returns `None` when the stored date no longer parses; the caller
/// decides whether that means skip (listing, batch runs) or reject
/// (single dispatch).
pub fn annotate(reminder: Reminder, as_of: NaiveDate) -> Option<ReminderWithStatus> {
    let due = NaiveDate::parse_from_str(&reminder.test_date, DATE_FORMAT).ok()?;
    let days_until = (due - as_of).num_days();
    let status = classify_by_days(days_until);
    Some(ReminderWithStatus {
        reminder,
        days_until,
        status,
        severity: status.severity(),
    })
}
