//! Storage backend traits for expenses and settings.
//!
//! These traits define the interface for storage backends, allowing the
//! capture flow to be decoupled from the specific storage implementation.
//! The primary implementation is StoreClient.

use async_trait::async_trait;

use super::client::StoreClient;
use super::expenses::{ExpenseRecord, ExpenseStoreError, NewExpense};
use super::settings::SettingsStoreError;
use crate::settings::Settings;

/// Backend trait for expense storage operations.
#[async_trait]
pub trait ExpenseStoreBackend: Send + Sync {
    /// Persist a new expense, returning the stored record with its
    /// assigned id and timestamp.
    async fn save_expense(&self, new: NewExpense) -> Result<ExpenseRecord, ExpenseStoreError>;

    /// Full scan, newest first.
    async fn list_expenses(&self) -> Result<Vec<ExpenseRecord>, ExpenseStoreError>;
}

/// Backend trait for reading the settings snapshot.
#[async_trait]
pub trait SettingsStoreBackend: Send + Sync {
    /// Read the current three-key settings snapshot.
    async fn settings_snapshot(&self) -> Result<Settings, SettingsStoreError>;
}

#[async_trait]
impl ExpenseStoreBackend for StoreClient {
    async fn save_expense(&self, new: NewExpense) -> Result<ExpenseRecord, ExpenseStoreError> {
        StoreClient::save_expense(self, new).await
    }

    async fn list_expenses(&self) -> Result<Vec<ExpenseRecord>, ExpenseStoreError> {
        StoreClient::list_expenses(self).await
    }
}

#[async_trait]
impl SettingsStoreBackend for StoreClient {
    async fn settings_snapshot(&self) -> Result<Settings, SettingsStoreError> {
        StoreClient::settings_snapshot(self).await
    }
}
