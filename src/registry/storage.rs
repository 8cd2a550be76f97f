/// SQLite persistence layer for worker records
///
/// Owns the `workers` table and enforces dense id assignment. Create
/// (count-then-insert) and delete (delete-then-renumber) each run in one
/// transaction, and are serialized against each other by a write lock so that
/// concurrent requests can never leave duplicate ids or gaps.

use crate::config::DatabaseConfig;
use crate::registry::{
    types::{Worker, WorkerFields},
    RegistryError, Result,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::{str::FromStr, sync::Arc};
use tokio::sync::Mutex;

/// Path value that selects a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

const WORKER_COLUMNS: &str = "id, first_name, last_name, address, phone_number, worker_position";

/// SQLite-based worker storage
#[derive(Debug, Clone)]
pub struct WorkerStorage {
    /// Connection pool for the registry database
    pool: SqlitePool,
    /// Serializes multi-statement write sequences
    write_lock: Arc<Mutex<()>>,
}

impl WorkerStorage {
    /// Create storage over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Open the database described by the configuration
    ///
    /// The file is created if missing. `":memory:"` opens a private in-memory
    /// database instead.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        if config.path == IN_MEMORY {
            return Self::in_memory().await;
        }

        tracing::info!("🗄️ Opening worker database: {}", config.path);
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    /// Open a private in-memory database
    ///
    /// Every SQLite connection to `:memory:` is its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    /// Initialize the workers table
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS workers (
                id INTEGER PRIMARY KEY,
                first_name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                address TEXT NOT NULL DEFAULT '',
                phone_number TEXT NOT NULL DEFAULT '',
                worker_position TEXT NOT NULL DEFAULT ''
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List all workers in id order
    pub async fn list_workers(&self) -> Result<Vec<Worker>> {
        let workers = sqlx::query_as::<_, Worker>(&format!(
            "SELECT {} FROM workers ORDER BY id",
            WORKER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(workers)
    }

    /// Number of stored workers
    pub async fn count_workers(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Retrieve a worker by id
    pub async fn get_worker(&self, id: i64) -> Result<Option<Worker>> {
        let worker = sqlx::query_as::<_, Worker>(&format!(
            "SELECT {} FROM workers WHERE id = ?",
            WORKER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(worker)
    }

    /// Append a new worker with id = row count + 1
    pub async fn create_worker(&self, fields: &WorkerFields) -> Result<Worker> {
        let _guard = self.write_lock.lock().await;
        let mut tx = self.pool.begin().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workers")
            .fetch_one(&mut *tx)
            .await?;
        let new_id = count + 1;

        let worker = sqlx::query_as::<_, Worker>(&format!(
            r#"
            INSERT INTO workers (id, first_name, last_name, address, phone_number, worker_position)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            WORKER_COLUMNS
        ))
        .bind(new_id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.address)
        .bind(&fields.phone_number)
        .bind(&fields.worker_position)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!("Inserted worker {}", worker.id);
        Ok(worker)
    }

    /// Overwrite every non-id field of an existing worker
    pub async fn update_worker(&self, id: i64, fields: &WorkerFields) -> Result<Worker> {
        let worker = sqlx::query_as::<_, Worker>(&format!(
            r#"
            UPDATE workers
            SET first_name = ?, last_name = ?, address = ?, phone_number = ?, worker_position = ?
            WHERE id = ?
            RETURNING {}
            "#,
            WORKER_COLUMNS
        ))
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.address)
        .bind(&fields.phone_number)
        .bind(&fields.worker_position)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        worker.ok_or(RegistryError::NotFound(id))
    }

    /// Delete a worker and shift every higher id down by one
    ///
    /// Returns the full list after renumbering.
    pub async fn delete_worker(&self, id: i64) -> Result<Vec<Worker>> {
        let _guard = self.write_lock.lock().await;
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM workers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Err(RegistryError::NotFound(id));
        }

        // Park shifted rows on negative ids first so no intermediate state
        // collides on the primary key, whatever order SQLite visits them in.
        let shifted = sqlx::query("UPDATE workers SET id = -(id - 1) WHERE id > ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE workers SET id = -id WHERE id < 0")
            .execute(&mut *tx)
            .await?;

        let workers = sqlx::query_as::<_, Worker>(&format!(
            "SELECT {} FROM workers ORDER BY id",
            WORKER_COLUMNS
        ))
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            "Deleted worker {} and renumbered {} rows",
            id,
            shifted.rows_affected()
        );
        Ok(workers)
    }

    /// Case-insensitive substring search over all text fields
    ///
    /// A blank term returns every worker. Matching is `Worker::matches`, the same
    /// Unicode case folding the client filter uses, so the term is taken literally.
    pub async fn search_workers(&self, term: &str) -> Result<Vec<Worker>> {
        let workers = self.list_workers().await?;
        if term.trim().is_empty() {
            return Ok(workers);
        }

        Ok(workers
            .into_iter()
            .filter(|worker| worker.matches(term))
            .collect())
    }
}
