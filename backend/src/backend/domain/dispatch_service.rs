use chrono::NaiveDate;
use log::{error, info};
use std::sync::Arc;

use crate::backend::domain::classification::annotate;
use crate::backend::domain::error::DomainError;
use crate::backend::domain::message::build_reminder_message;
use crate::backend::domain::phone::normalize_phone;
use crate::backend::domain::reminder_service::today;
use crate::backend::relay::MessageRelay;
use crate::backend::storage::{MessageLogRepository, ReminderRepository};
use shared::{DeliveryOutcome, Direction, DispatchAction, ReminderWithStatus};

/// Orchestrates notification dispatch: classify, format, normalize the
/// phone, hand the message to the relay, and record the outcome.
#[derive(Clone)]
pub struct DispatchService {
    reminders: ReminderRepository,
    messages: MessageLogRepository,
    relay: Arc<dyn MessageRelay>,
}

impl DispatchService {
    pub fn new(
        reminders: ReminderRepository,
        messages: MessageLogRepository,
        relay: Arc<dyn MessageRelay>,
    ) -> Self {
        Self {
            reminders,
            messages,
            relay,
        }
    }

    /// Dispatch a notification for every reminder that is due or upcoming
    /// as of the given date (today when not given).
    ///
    /// Expired records are skipped outright: no relay call, no log entry.
    /// A failing recipient never aborts the rest of the batch.
    pub async fn run_now(
        &self,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<DispatchAction>, DomainError> {
        let as_of = as_of.unwrap_or_else(today);
        let rows = self.reminders.list_ordered().await?;

        let mut actions = Vec::new();
        for reminder in rows {
            let Some(entry) = annotate(reminder, as_of) else {
                continue;
            };
            if entry.days_until < 0 {
                continue;
            }

            let action = self.deliver(entry).await;
            info!(
                "[{}] Reminder sent to {} ({}) -> {}",
                action.status.label(),
                action.name,
                action.vehicle_number,
                action.delivery_outcome.as_str()
            );
            actions.push(action);
        }
        Ok(actions)
    }

    /// Dispatch exactly one identified reminder, regardless of its
    /// days-until-due value. Always permitted on demand.
    pub async fn send_one(
        &self,
        id: i64,
        as_of: Option<NaiveDate>,
    ) -> Result<DispatchAction, DomainError> {
        let as_of = as_of.unwrap_or_else(today);
        let reminder = self
            .reminders
            .get(id)
            .await?
            .ok_or(DomainError::NotFound(id))?;

        let stored_date = reminder.test_date.clone();
        let entry =
            annotate(reminder, as_of).ok_or(DomainError::InvalidDueDate(stored_date))?;
        Ok(self.deliver(entry).await)
    }

    /// Format, normalize, relay, then record the attempt.
    ///
    /// The log append sits after the outcome match so no relay exit path
    /// can bypass it; an append failure itself must not lose the result.
    async fn deliver(&self, entry: ReminderWithStatus) -> DispatchAction {
        let reminder = &entry.reminder;
        let message = build_reminder_message(reminder, entry.status);
        let phone = normalize_phone(reminder.phone.as_deref().unwrap_or(""));

        info!("📤 Sending reminder {} to '{}'", reminder.id, phone);
        let (outcome, detail) = match self.relay.send(&phone, &message).await {
            Ok(receipt) => {
                info!(
                    "📥 Relay answered {} for reminder {}",
                    receipt.status, reminder.id
                );
                if receipt.accepted {
                    (DeliveryOutcome::Sent, receipt.detail)
                } else {
                    (DeliveryOutcome::Failed, receipt.detail)
                }
            }
            Err(e) => (
                DeliveryOutcome::Error,
                serde_json::Value::String(e.to_string()),
            ),
        };

        if let Err(e) = self
            .messages
            .append(
                Direction::Outbound,
                &phone,
                &message,
                outcome,
                &detail.to_string(),
            )
            .await
        {
            error!("Failed to record delivery log entry: {}", e);
        }

        DispatchAction {
            id: reminder.id,
            name: reminder.name.clone(),
            vehicle_number: reminder.vehicle_number.clone(),
            test_date: reminder.test_date.clone(),
            days_until: entry.days_until,
            status: entry.status,
            severity: entry.severity,
            delivery_outcome: outcome,
            delivery_detail: detail,
        }
    }
}
