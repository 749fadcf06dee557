// Database schema definitions and migration system
//
// This module defines the SQLite schema for the expense and settings
// tables and provides a migration system for future schema changes.

use super::client::{StoreClient, StoreError};
use crate::settings::Settings;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// SQL statements to create all tables (each as a separate string)
const CREATE_TABLES: &[&str] = &[
    // Captured expenses; ids are monotonically assigned by SQLite
    r#"CREATE TABLE IF NOT EXISTS expense (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount TEXT NOT NULL,
        payment_method TEXT NOT NULL,
        category TEXT NOT NULL,
        original_category TEXT NOT NULL DEFAULT '',
        raw_text TEXT NOT NULL,
        created_at TEXT NOT NULL
    )"#,
    // Index for newest-first listing
    r#"CREATE INDEX IF NOT EXISTS idx_expense_created_at ON expense(created_at)"#,
    // Settings collections, one JSON document per key
    r#"CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )"#,
];

/// Initialize the database schema.
///
/// Creates all tables if they don't exist, runs any pending migrations and
/// seeds default settings on a fresh database. Called by
/// `StoreClient::initialize` before the client is marked ready.
pub(crate) async fn initialize_schema(client: &StoreClient) -> Result<(), StoreError> {
    // First, ensure schema_version table exists (needed for version checking)
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await?;

    let current_version = get_schema_version(client).await?;

    if current_version == 0 {
        // Fresh database - create all tables
        crate::info!(
            "Initializing expense database schema (version {})",
            SCHEMA_VERSION
        );

        for statement in CREATE_TABLES {
            client.execute(statement, ()).await?;
        }

        set_schema_version(client, SCHEMA_VERSION).await?;

        crate::info!("Expense database schema initialized successfully");
    } else if current_version < SCHEMA_VERSION {
        crate::info!(
            "Migrating expense database from version {} to {}",
            current_version,
            SCHEMA_VERSION
        );
        run_migrations(client, current_version, SCHEMA_VERSION).await?;
        crate::info!("Expense database migration complete");
    } else {
        crate::debug!(
            "Expense database schema is up to date (version {})",
            current_version
        );
    }

    seed_default_settings(client).await
}

/// Get the current schema version from the database.
/// Returns 0 if the schema_version table doesn't exist yet.
async fn get_schema_version(client: &StoreClient) -> Result<i32, StoreError> {
    // Check if schema_version table exists
    let mut rows = client
        .query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='schema_version'",
            (),
        )
        .await?;

    if rows
        .next()
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?
        .is_none()
    {
        return Ok(0);
    }

    let mut rows = client
        .query(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            (),
        )
        .await?;

    match rows
        .next()
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?
    {
        Some(row) => {
            let version: i32 = row.get(0).map_err(|e| StoreError::Query(e.to_string()))?;
            Ok(version)
        }
        None => Ok(0),
    }
}

/// Set the schema version in the database.
async fn set_schema_version(client: &StoreClient, version: i32) -> Result<(), StoreError> {
    client
        .execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await?;
    Ok(())
}

/// Run migrations from one version to another.
async fn run_migrations(
    client: &StoreClient,
    from_version: i32,
    to_version: i32,
) -> Result<(), StoreError> {
    for version in (from_version + 1)..=to_version {
        match version {
            // 2 => migrate_v1_to_v2(client).await?,
            _ => {
                crate::debug!("No migration needed for version {}", version);
            }
        }
        set_schema_version(client, version).await?;
    }
    Ok(())
}

/// Seed the three settings keys with built-in defaults, only when the
/// settings table is empty. User edits survive every later startup.
async fn seed_default_settings(client: &StoreClient) -> Result<(), StoreError> {
    let mut rows = client.query("SELECT COUNT(*) FROM settings", ()).await?;
    let count: i64 = match rows
        .next()
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?
    {
        Some(row) => row.get(0).map_err(|e| StoreError::Query(e.to_string()))?,
        None => 0,
    };

    if count > 0 {
        return Ok(());
    }

    crate::info!("Seeding default settings");
    let defaults = Settings::default();
    super::settings::seed_settings(client, &defaults).await
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
