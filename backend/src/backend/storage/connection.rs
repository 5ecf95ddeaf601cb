use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // Reminders are keyed by a store-assigned integer id. AUTOINCREMENT
        // (not bare rowid) is required: clear-all resets the sequence via
        // sqlite_sequence so the next insert receives id 1.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reminders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                vehicle_number TEXT NOT NULL,
                test_number TEXT,
                vehicle_class TEXT,
                test_date TEXT NOT NULL,
                phone TEXT,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Listing is always ordered by due date
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_reminders_test_date
            ON reminders(test_date);
            "#,
        )
        .execute(pool)
        .await?;

        // Append-only delivery log
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                direction TEXT NOT NULL,
                phone TEXT,
                message TEXT NOT NULL,
                status TEXT NOT NULL,
                meta TEXT,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Stats queries filter by direction and bucket by created_at
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_messages_direction_created_at
            ON messages(direction, created_at);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}
