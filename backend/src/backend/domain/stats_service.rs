use chrono::{Datelike, Duration, NaiveDate, Utc};
use std::collections::HashMap;

use crate::backend::domain::error::DomainError;
use crate::backend::storage::{MessageLogRepository, ReminderRepository};
use shared::{Direction, StatsResponse, TimeseriesResponse};

/// Reporting window for the outbound message timeseries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeseriesPeriod {
    /// Trailing calendar days, today included
    Day { days: u32 },
    /// Trailing calendar months, the current month included
    Month { months: u32 },
}

/// Service for message-traffic and reminder statistics
#[derive(Clone)]
pub struct StatsService {
    reminders: ReminderRepository,
    messages: MessageLogRepository,
}

impl StatsService {
    pub fn new(reminders: ReminderRepository, messages: MessageLogRepository) -> Self {
        Self {
            reminders,
            messages,
        }
    }

    /// Today's message traffic and the current reminder count
    pub async fn stats(&self) -> Result<StatsResponse, DomainError> {
        let today = Utc::now().date_naive().to_string();
        let inbound_today = self
            .messages
            .count_for_day(Direction::Inbound, &today)
            .await?;
        let outbound_today = self
            .messages
            .count_for_day(Direction::Outbound, &today)
            .await?;
        let reminders = self.reminders.count().await?;

        Ok(StatsResponse {
            inbound_today,
            outbound_today,
            reminders,
        })
    }

    /// Outbound message counts bucketed per day or per month, zero-filled
    /// across the whole requested window
    pub async fn outbound_timeseries(
        &self,
        period: TimeseriesPeriod,
    ) -> Result<TimeseriesResponse, DomainError> {
        let today = Utc::now().date_naive();
        match period {
            TimeseriesPeriod::Day { days } => {
                let days = days.max(1);
                let counts = self.messages.outbound_counts_by_day(days).await?;
                let labels: Vec<String> = (0..i64::from(days))
                    .rev()
                    .map(|i| (today - Duration::days(i)).to_string())
                    .collect();
                Ok(fill_buckets(labels, counts))
            }
            TimeseriesPeriod::Month { months } => {
                let months = months.max(1);
                let counts = self.messages.outbound_counts_by_month(months).await?;
                Ok(fill_buckets(month_labels(today, months), counts))
            }
        }
    }
}

/// Zero-fill the window: every label gets a count, present or not
fn fill_buckets(labels: Vec<String>, counts: Vec<(String, i64)>) -> TimeseriesResponse {
    let by_label: HashMap<String, i64> = counts.into_iter().collect();
    let data = labels
        .iter()
        .map(|label| by_label.get(label).copied().unwrap_or(0))
        .collect();
    TimeseriesResponse { labels, data }
}

/// Last `months` month labels ending with the current one, oldest first
fn month_labels(today: NaiveDate, months: u32) -> Vec<String> {
    let mut labels = Vec::with_capacity(months as usize);
    for i in (0..months as i32).rev() {
        let mut year = today.year();
        let mut month = today.month() as i32 - i;
        while month <= 0 {
            month += 12;
            year -= 1;
        }
        labels.push(format!("{year:04}-{month:02}"));
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::DbConnection;
    use shared::{DeliveryOutcome, ReminderInput};

    async fn setup_test() -> (StatsService, ReminderRepository, MessageLogRepository) {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        let reminders = ReminderRepository::new(db.clone());
        let messages = MessageLogRepository::new(db);
        (
            StatsService::new(reminders.clone(), messages.clone()),
            reminders,
            messages,
        )
    }

    fn input(name: &str) -> ReminderInput {
        ReminderInput {
            name: name.to_string(),
            vehicle_number: "AD 1 XY".to_string(),
            test_number: None,
            vehicle_class: None,
            test_date: "2024-06-15".to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_stats_counts_by_direction_and_day() {
        let (service, reminders, messages) = setup_test().await;

        reminders.insert(&input("One"), "2024-06-01T00:00:00+00:00").await.unwrap();
        reminders.insert(&input("Two"), "2024-06-01T00:00:00+00:00").await.unwrap();

        messages
            .append(Direction::Outbound, "628111", "hi", DeliveryOutcome::Sent, "{}")
            .await
            .unwrap();
        messages
            .append(Direction::Outbound, "628222", "hi", DeliveryOutcome::Failed, "{}")
            .await
            .unwrap();
        messages
            .append(Direction::Inbound, "628333", "yo", DeliveryOutcome::Unknown, "")
            .await
            .unwrap();

        let stats = service.stats().await.expect("Failed to compute stats");
        assert_eq!(stats.outbound_today, 2);
        assert_eq!(stats.inbound_today, 1);
        assert_eq!(stats.reminders, 2);
    }

    #[tokio::test]
    async fn test_daily_timeseries_is_zero_filled() {
        let (service, _, messages) = setup_test().await;

        messages
            .append(Direction::Outbound, "628111", "hi", DeliveryOutcome::Sent, "{}")
            .await
            .unwrap();
        messages
            .append(Direction::Outbound, "628111", "hi again", DeliveryOutcome::Sent, "{}")
            .await
            .unwrap();

        let series = service
            .outbound_timeseries(TimeseriesPeriod::Day { days: 7 })
            .await
            .expect("Failed to build timeseries");

        assert_eq!(series.labels.len(), 7);
        assert_eq!(series.data.len(), 7);
        // Entries were appended just now, so they land in the last bucket
        assert_eq!(
            series.labels.last().unwrap(),
            &Utc::now().date_naive().to_string()
        );
        assert_eq!(*series.data.last().unwrap(), 2);
        assert_eq!(series.data.iter().sum::<i64>(), 2);
    }

    #[tokio::test]
    async fn test_monthly_timeseries_covers_requested_window() {
        let (service, _, messages) = setup_test().await;

        messages
            .append(Direction::Outbound, "628111", "hi", DeliveryOutcome::Sent, "{}")
            .await
            .unwrap();

        let series = service
            .outbound_timeseries(TimeseriesPeriod::Month { months: 3 })
            .await
            .unwrap();

        assert_eq!(series.labels.len(), 3);
        let today = Utc::now().date_naive();
        assert_eq!(
            series.labels.last().unwrap(),
            &format!("{:04}-{:02}", today.year(), today.month())
        );
        assert_eq!(*series.data.last().unwrap(), 1);
    }

    #[test]
    fn test_month_labels_wrap_year_boundaries() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert_eq!(
            month_labels(today, 4),
            vec!["2023-11", "2023-12", "2024-01", "2024-02"]
        );
    }

    #[test]
    fn test_fill_buckets_keeps_label_order() {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let counts = vec![("c".to_string(), 3), ("a".to_string(), 1)];
        let series = fill_buckets(labels, counts);
        assert_eq!(series.data, vec![1, 0, 3]);
    }
}
