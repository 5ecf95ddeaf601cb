use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use sqlx::Row;

use crate::backend::storage::connection::DbConnection;
use shared::{DeliveryOutcome, Direction, MessageLogEntry};

/// Repository for the append-only message delivery log
#[derive(Clone)]
pub struct MessageLogRepository {
    db: DbConnection,
}

impl MessageLogRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Append one delivery attempt. Entries are never updated or deleted.
    pub async fn append(
        &self,
        direction: Direction,
        phone: &str,
        message: &str,
        status: DeliveryOutcome,
        meta: &str,
    ) -> Result<()> {
        // Second precision so SQLite's date() can bucket created_at
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        sqlx::query(
            r#"
            INSERT INTO messages (direction, phone, message, status, meta, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(direction.as_str())
        .bind(phone)
        .bind(message)
        .bind(status.as_str())
        .bind(meta)
        .bind(created_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Count entries for one direction on one calendar day (`YYYY-MM-DD`)
    pub async fn count_for_day(&self, direction: Direction, day: &str) -> Result<i64> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS cnt
            FROM messages
            WHERE direction = ? AND date(created_at) = ?
            "#,
        )
        .bind(direction.as_str())
        .bind(day)
        .fetch_one(self.db.pool())
        .await?;
        Ok(row.get("cnt"))
    }

    /// Outbound counts grouped by day over the trailing window
    pub async fn outbound_counts_by_day(&self, days: u32) -> Result<Vec<(String, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT date(created_at) AS bucket, COUNT(*) AS cnt
            FROM messages
            WHERE direction = 'outbound' AND date(created_at) >= date('now', ?)
            GROUP BY bucket
            ORDER BY bucket
            "#,
        )
        .bind(format!("-{} days", days.saturating_sub(1)))
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| (row.get("bucket"), row.get("cnt")))
            .collect())
    }

    /// Outbound counts grouped by month over the trailing window
    pub async fn outbound_counts_by_month(&self, months: u32) -> Result<Vec<(String, i64)>> {
        let rows = sqlx::query(
            r#"
            SELECT strftime('%Y-%m', created_at) AS bucket, COUNT(*) AS cnt
            FROM messages
            WHERE direction = 'outbound'
              AND date(created_at) >= date('now', 'start of month', ?)
            GROUP BY bucket
            ORDER BY bucket
            "#,
        )
        .bind(format!("-{} months", months.saturating_sub(1)))
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| (row.get("bucket"), row.get("cnt")))
            .collect())
    }

    /// Most recent entries, newest first
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<MessageLogEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, direction, phone, message, status, meta, created_at
            FROM messages
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows
            .iter()
            .map(|row| MessageLogEntry {
                id: row.get("id"),
                direction: Direction::from_db(row.get::<String, _>("direction").as_str()),
                phone: row.get("phone"),
                message: row.get("message"),
                status: DeliveryOutcome::from_db(row.get::<String, _>("status").as_str()),
                meta: row.get("meta"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}
