use serde::{Deserialize, Serialize};

/// A tracked vehicle inspection due-date record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Store-assigned identifier
    pub id: i64,
    /// Owner name as registered on the vehicle papers
    pub name: String,
    /// Vehicle plate number
    pub vehicle_number: String,
    /// Inspection certificate number, if known
    pub test_number: Option<String>,
    /// Vehicle class (truck, bus, ...), if known
    pub vehicle_class: Option<String>,
    /// Inspection due date, always stored as YYYY-MM-DD
    pub test_date: String,
    /// Contact phone, free-form as entered
    pub phone: Option<String>,
    /// RFC 3339 creation timestamp (UTC)
    pub created_at: String,
}

/// Input for creating a reminder or fully replacing an existing one.
///
/// Update has no partial-patch semantics: all six mutable fields are
/// written as given, so create and update share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderInput {
    pub name: String,
    pub vehicle_number: String,
    #[serde(default)]
    pub test_number: Option<String>,
    #[serde(default)]
    pub vehicle_class: Option<String>,
    pub test_date: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Coarse urgency tier derived from days-until-due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Ok,
    Neutral,
}

/// Due-date classification of a reminder relative to an as-of date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DueStatus {
    #[serde(rename = "due today")]
    DueToday,
    #[serde(rename = "due tomorrow")]
    DueTomorrow,
    #[serde(rename = "upcoming")]
    Upcoming,
    #[serde(rename = "expired")]
    Expired,
}

impl DueStatus {
    /// Human-readable status label, as rendered in messages and API output
    pub fn label(&self) -> &'static str {
        match self {
            DueStatus::DueToday => "due today",
            DueStatus::DueTomorrow => "due tomorrow",
            DueStatus::Upcoming => "upcoming",
            DueStatus::Expired => "expired",
        }
    }

    /// Severity tier attached to this status
    pub fn severity(&self) -> Severity {
        match self {
            DueStatus::DueToday => Severity::Critical,
            DueStatus::DueTomorrow => Severity::Warning,
            DueStatus::Upcoming => Severity::Ok,
            DueStatus::Expired => Severity::Neutral,
        }
    }
}

/// A reminder annotated with its derived due-status view.
///
/// The derived fields are computed fresh on every read against an as-of
/// date and are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderWithStatus {
    #[serde(flatten)]
    pub reminder: Reminder,
    /// Due date minus the as-of date, in whole days (negative once past)
    pub days_until: i64,
    pub status: DueStatus,
    pub severity: Severity,
}

/// Message direction in the delivery log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outbound,
    Inbound,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Outbound => "outbound",
            Direction::Inbound => "inbound",
        }
    }

    /// Lenient parse for values read back from storage
    pub fn from_db(value: &str) -> Self {
        match value {
            "inbound" => Direction::Inbound,
            _ => Direction::Outbound,
        }
    }
}

/// Outcome of a single message delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOutcome {
    /// Relay accepted the message
    Sent,
    /// Relay answered with a non-success status
    Failed,
    /// The relay call itself failed (timeout, connection fault)
    Error,
    Unknown,
}

impl DeliveryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryOutcome::Sent => "sent",
            DeliveryOutcome::Failed => "failed",
            DeliveryOutcome::Error => "error",
            DeliveryOutcome::Unknown => "unknown",
        }
    }

    /// Lenient parse for values read back from storage
    pub fn from_db(value: &str) -> Self {
        match value {
            "sent" => DeliveryOutcome::Sent,
            "failed" => DeliveryOutcome::Failed,
            "error" => DeliveryOutcome::Error,
            _ => DeliveryOutcome::Unknown,
        }
    }
}

/// One append-only record of a message delivery attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageLogEntry {
    pub id: i64,
    pub direction: Direction,
    pub phone: Option<String>,
    pub message: String,
    pub status: DeliveryOutcome,
    /// Relay response or error detail, serialized
    pub meta: Option<String>,
    /// RFC 3339 timestamp (UTC)
    pub created_at: String,
}

/// Per-recipient result descriptor returned by batch and single dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchAction {
    pub id: i64,
    pub name: String,
    pub vehicle_number: String,
    pub test_date: String,
    pub days_until: i64,
    pub status: DueStatus,
    pub severity: Severity,
    pub delivery_outcome: DeliveryOutcome,
    /// Relay response body or transport error detail
    pub delivery_detail: serde_json::Value,
}

/// Body for the manual batch-dispatch trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunNowRequest {
    /// Reference date (YYYY-MM-DD); today when omitted
    #[serde(default)]
    pub as_of: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub reminder: Reminder,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderListResponse {
    pub reminders: Vec<ReminderWithStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearRemindersResponse {
    /// Number of reminders removed
    pub removed: u64,
    pub message: String,
}

/// Today's message traffic and the current reminder count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub inbound_today: i64,
    pub outbound_today: i64,
    pub reminders: i64,
}

/// Ordered time buckets with one count per bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesResponse {
    pub labels: Vec<String>,
    pub data: Vec<i64>,
}
