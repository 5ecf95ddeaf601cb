use chrono::{Local, NaiveDate, Utc};
use log::{info, warn};

use crate::backend::domain::classification::{annotate, parse_strict_date};
use crate::backend::domain::error::DomainError;
use crate::backend::storage::ReminderRepository;
use shared::{Reminder, ReminderInput, ReminderWithStatus};

/// Service for managing inspection reminders
#[derive(Clone)]
pub struct ReminderService {
    reminders: ReminderRepository,
}

impl ReminderService {
    /// Create a new ReminderService
    pub fn new(reminders: ReminderRepository) -> Self {
        Self { reminders }
    }

    /// Create a new reminder
    pub async fn add_reminder(&self, input: ReminderInput) -> Result<Reminder, DomainError> {
        info!(
            "Adding reminder: name={}, vehicle={}, test_date={}",
            input.name, input.vehicle_number, input.test_date
        );

        // Reject divergent date formats before anything is persisted
        parse_strict_date(&input.test_date)?;

        let created_at = Utc::now().to_rfc3339();
        let id = self.reminders.insert(&input, &created_at).await?;

        info!("Created reminder {} for {}", id, input.name);

        Ok(Reminder {
            id,
            name: input.name,
            vehicle_number: input.vehicle_number,
            test_number: input.test_number,
            vehicle_class: input.vehicle_class,
            test_date: input.test_date,
            phone: input.phone,
            created_at,
        })
    }

    /// List all reminders ordered ascending by due date, each annotated
    /// with days-until-due, status, and severity computed against `as_of`
    /// (today when not given).
    ///
    /// Rows whose stored date no longer parses are skipped, not errors.
    pub async fn list_reminders(
        &self,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<ReminderWithStatus>, DomainError> {
        let as_of = as_of.unwrap_or_else(today);
        let rows = self.reminders.list_ordered().await?;

        let mut results = Vec::with_capacity(rows.len());
        for reminder in rows {
            let id = reminder.id;
            match annotate(reminder, as_of) {
                Some(entry) => results.push(entry),
                None => warn!("Skipping reminder {} with unparseable test_date", id),
            }
        }
        Ok(results)
    }

    /// Replace all six mutable fields of an existing reminder
    pub async fn update_reminder(
        &self,
        id: i64,
        input: ReminderInput,
    ) -> Result<Reminder, DomainError> {
        info!("Updating reminder {}", id);

        parse_strict_date(&input.test_date)?;

        let existing = self
            .reminders
            .get(id)
            .await?
            .ok_or(DomainError::NotFound(id))?;
        self.reminders.update(id, &input).await?;

        info!("Updated reminder {} ({})", id, input.vehicle_number);

        Ok(Reminder {
            id,
            name: input.name,
            vehicle_number: input.vehicle_number,
            test_number: input.test_number,
            vehicle_class: input.vehicle_class,
            test_date: input.test_date,
            phone: input.phone,
            created_at: existing.created_at,
        })
    }

    /// Delete a reminder by id
    pub async fn delete_reminder(&self, id: i64) -> Result<(), DomainError> {
        let deleted = self.reminders.delete(id).await?;
        if !deleted {
            return Err(DomainError::NotFound(id));
        }
        info!("Deleted reminder {}", id);
        Ok(())
    }

    /// Remove every reminder and reset the id sequence, so the next
    /// insert receives identifier 1. Returns the number removed.
    pub async fn clear_reminders(&self) -> Result<u64, DomainError> {
        let removed = self.reminders.clear().await?;
        info!("Cleared {} reminders, id sequence reset", removed);
        Ok(removed)
    }
}

/// Today's calendar date in local time
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
