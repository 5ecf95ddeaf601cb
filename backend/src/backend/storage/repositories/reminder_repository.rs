use anyhow::Result;
use sqlx::Row;

use crate::backend::storage::connection::DbConnection;
use shared::{Reminder, ReminderInput};

/// Repository for reminder records
#[derive(Clone)]
pub struct ReminderRepository {
    db: DbConnection,
}

impl ReminderRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a reminder and return its store-assigned id
    pub async fn insert(&self, input: &ReminderInput, created_at: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO reminders (name, vehicle_number, test_number, vehicle_class, test_date, phone, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.vehicle_number)
        .bind(&input.test_number)
        .bind(&input.vehicle_class)
        .bind(&input.test_date)
        .bind(&input.phone)
        .bind(created_at)
        .execute(self.db.pool())
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Fetch a reminder by id
    pub async fn get(&self, id: i64) -> Result<Option<Reminder>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, vehicle_number, test_number, vehicle_class, test_date, phone, created_at
            FROM reminders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.as_ref().map(map_reminder))
    }

    /// List all reminders ordered ascending by due date
    pub async fn list_ordered(&self) -> Result<Vec<Reminder>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, vehicle_number, test_number, vehicle_class, test_date, phone, created_at
            FROM reminders
            ORDER BY test_date
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(map_reminder).collect())
    }

    /// Replace the six mutable fields of a reminder; true when a row matched
    pub async fn update(&self, id: i64, input: &ReminderInput) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE reminders
            SET name = ?, vehicle_number = ?, test_number = ?, vehicle_class = ?, test_date = ?, phone = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(&input.vehicle_number)
        .bind(&input.test_number)
        .bind(&input.vehicle_class)
        .bind(&input.test_date)
        .bind(&input.phone)
        .bind(id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a reminder; true when a row matched
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every reminder and reset the AUTOINCREMENT sequence so the
    /// next insert receives id 1. Returns the number of rows removed.
    pub async fn clear(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM reminders")
            .execute(self.db.pool())
            .await?;

        // SQLite tracks AUTOINCREMENT state in sqlite_sequence
        sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'reminders'")
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected())
    }

    /// Count all reminders
    pub async fn count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS cnt FROM reminders")
            .fetch_one(self.db.pool())
            .await?;
        Ok(row.get("cnt"))
    }
}

fn map_reminder(row: &sqlx::sqlite::SqliteRow) -> Reminder {
    Reminder {
        id: row.get("id"),
        name: row.get("name"),
        vehicle_number: row.get("vehicle_number"),
        test_number: row.get("test_number"),
        vehicle_class: row.get("vehicle_class"),
        test_date: row.get("test_date"),
        phone: row.get("phone"),
        created_at: row.get("created_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> ReminderRepository {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        ReminderRepository::new(db)
    }

    fn input(name: &str, test_date: &str) -> ReminderInput {
        ReminderInput {
            name: name.to_string(),
            vehicle_number: "AD 1234 XY".to_string(),
            test_number: Some("SKR-0042".to_string()),
            vehicle_class: None,
            test_date: test_date.to_string(),
            phone: Some("081234567".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trip() {
        let repo = setup_test().await;

        let id = repo
            .insert(&input("Budi", "2024-06-15"), "2024-06-01T00:00:00+00:00")
            .await
            .expect("Failed to insert");
        assert_eq!(id, 1);

        let fetched = repo.get(id).await.expect("Failed to get").expect("missing row");
        assert_eq!(fetched.id, 1);
        assert_eq!(fetched.name, "Budi");
        assert_eq!(fetched.test_number.as_deref(), Some("SKR-0042"));
        assert_eq!(fetched.vehicle_class, None);
        assert_eq!(fetched.test_date, "2024-06-15");
        assert_eq!(fetched.created_at, "2024-06-01T00:00:00+00:00");
    }

    #[tokio::test]
    async fn test_get_missing_row() {
        let repo = setup_test().await;
        assert!(repo.get(42).await.expect("Failed to query").is_none());
    }

    #[tokio::test]
    async fn test_list_orders_by_test_date() {
        let repo = setup_test().await;

        repo.insert(&input("B", "2024-08-01"), "t").await.unwrap();
        repo.insert(&input("A", "2024-06-01"), "t").await.unwrap();
        repo.insert(&input("C", "2024-12-01"), "t").await.unwrap();

        let listed = repo.list_ordered().await.expect("Failed to list");
        let dates: Vec<&str> = listed.iter().map(|r| r.test_date.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-01", "2024-08-01", "2024-12-01"]);
    }

    #[tokio::test]
    async fn test_update_reports_row_match() {
        let repo = setup_test().await;

        let id = repo.insert(&input("Budi", "2024-06-15"), "t").await.unwrap();

        let changed = repo
            .update(id, &input("Siti", "2024-07-01"))
            .await
            .expect("Failed to update");
        assert!(changed);
        assert_eq!(repo.get(id).await.unwrap().unwrap().name, "Siti");

        let missed = repo.update(99, &input("Ghost", "2024-07-01")).await.unwrap();
        assert!(!missed);
    }

    #[tokio::test]
    async fn test_delete_reports_row_match() {
        let repo = setup_test().await;

        let id = repo.insert(&input("Budi", "2024-06-15"), "t").await.unwrap();
        assert!(repo.delete(id).await.expect("Failed to delete"));
        assert!(!repo.delete(id).await.expect("Failed to re-delete"));
    }

    #[tokio::test]
    async fn test_clear_resets_the_id_sequence() {
        let repo = setup_test().await;

        repo.insert(&input("One", "2024-06-15"), "t").await.unwrap();
        repo.insert(&input("Two", "2024-06-16"), "t").await.unwrap();

        let removed = repo.clear().await.expect("Failed to clear");
        assert_eq!(removed, 2);
        assert_eq!(repo.count().await.unwrap(), 0);

        let next_id = repo.insert(&input("Fresh", "2024-06-17"), "t").await.unwrap();
        assert_eq!(next_id, 1);
    }

    #[tokio::test]
    async fn test_count() {
        let repo = setup_test().await;
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(&input("One", "2024-06-15"), "t").await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
