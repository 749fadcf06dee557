// Embedded libsql client for the expense database
//
// Thin wrapper owning the database handle and connection. Every domain
// operation is gated behind the ready flag so a failed initialize()
// surfaces as NotReady instead of leaving callers to hit raw SQL errors.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Database file name inside the data directory.
const DB_FILE_NAME: &str = "gastovoz.db";

/// Errors surfaced by the embedded database client.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Database could not be opened or created, or schema setup failed
    #[error("Failed to open expense database: {0}")]
    Open(String),
    /// A statement failed to execute
    #[error("Database query failed: {0}")]
    Query(String),
    /// A uniqueness or integrity constraint was violated
    #[error("Database constraint violated: {0}")]
    Constraint(String),
    /// Operation attempted before initialize() succeeded
    #[error("Expense store is not ready; call initialize() first")]
    NotReady,
}

/// Client for the embedded expense database.
pub struct StoreClient {
    /// Kept alive for the lifetime of the connection.
    _db: libsql::Database,
    conn: libsql::Connection,
    db_path: PathBuf,
    ready: AtomicBool,
}

impl StoreClient {
    /// Open (or create) the database file under the given data directory.
    pub async fn new(data_dir: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&data_dir).map_err(|e| StoreError::Open(e.to_string()))?;
        let db_path = data_dir.join(DB_FILE_NAME);

        let db = libsql::Builder::new_local(&db_path)
            .build()
            .await
            .map_err(|e| StoreError::Open(e.to_string()))?;
        let conn = db.connect().map_err(|e| StoreError::Open(e.to_string()))?;

        Ok(Self {
            _db: db,
            conn,
            db_path,
            ready: AtomicBool::new(false),
        })
    }

    /// Create the schema, run pending migrations and seed default settings.
    /// Idempotent: safe to call repeatedly, also after a previous failure.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        super::schema::initialize_schema(self)
            .await
            .map_err(|e| StoreError::Open(e.to_string()))?;
        self.ready.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Path of the underlying database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Whether initialize() has completed successfully.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Fail fast when initialize() has not completed.
    pub(crate) fn ensure_ready(&self) -> Result<(), StoreError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(StoreError::NotReady)
        }
    }

    pub(crate) async fn execute(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<u64, StoreError> {
        self.conn.execute(sql, params).await.map_err(map_libsql_err)
    }

    pub(crate) async fn query(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<libsql::Rows, StoreError> {
        self.conn.query(sql, params).await.map_err(map_libsql_err)
    }
}

fn map_libsql_err(e: libsql::Error) -> StoreError {
    let message = e.to_string();
    if message.contains("constraint") || message.contains("UNIQUE") {
        StoreError::Constraint(message)
    } else {
        StoreError::Query(message)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
