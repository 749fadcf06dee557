// Settings persistence - three keyed JSON documents in the settings table
//
// Each key is replaced wholesale on write (last-write-wins, no merge);
// reads fall back to the built-in defaults when a key is absent.

use libsql::params;
use std::collections::HashMap;

use super::client::{StoreClient, StoreError};
use crate::settings::{default_mappings, Settings, DEFAULT_CATEGORIES, DEFAULT_PAYMENT_METHODS};

/// Settings collection keys, as stored in the settings table.
pub const KEY_PAYMENT_METHODS: &str = "paymentMethods";
pub const KEY_CATEGORIES: &str = "categories";
pub const KEY_MAPPINGS: &str = "mappings";

/// Error types for settings storage operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsStoreError {
    /// Store used before initialize() succeeded
    #[error("Settings store not ready; initialize the expense store first")]
    NotReady,
    /// Failed to persist a settings value
    #[error("Failed to persist settings: {0}")]
    Persistence(String),
    /// Failed to load or decode a settings value
    #[error("Failed to load settings: {0}")]
    Load(String),
}

impl StoreClient {
    /// Configured payment methods, in matching-priority order.
    pub async fn get_payment_methods(&self) -> Result<Vec<String>, SettingsStoreError> {
        self.ensure_ready()
            .map_err(|_| SettingsStoreError::NotReady)?;
        match self.get_raw(KEY_PAYMENT_METHODS).await? {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| SettingsStoreError::Load(e.to_string()))
            }
            None => Ok(DEFAULT_PAYMENT_METHODS
                .iter()
                .map(|s| s.to_string())
                .collect()),
        }
    }

    /// Replace the payment methods list wholesale.
    pub async fn put_payment_methods(
        &self,
        methods: &[String],
    ) -> Result<(), SettingsStoreError> {
        self.put_json(KEY_PAYMENT_METHODS, methods).await
    }

    /// Configured expense categories.
    pub async fn get_categories(&self) -> Result<Vec<String>, SettingsStoreError> {
        self.ensure_ready()
            .map_err(|_| SettingsStoreError::NotReady)?;
        match self.get_raw(KEY_CATEGORIES).await? {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| SettingsStoreError::Load(e.to_string()))
            }
            None => Ok(DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Replace the categories list wholesale.
    pub async fn put_categories(&self, categories: &[String]) -> Result<(), SettingsStoreError> {
        self.put_json(KEY_CATEGORIES, categories).await
    }

    /// Keyword -> category mappings.
    pub async fn get_mappings(&self) -> Result<HashMap<String, String>, SettingsStoreError> {
        self.ensure_ready()
            .map_err(|_| SettingsStoreError::NotReady)?;
        match self.get_raw(KEY_MAPPINGS).await? {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| SettingsStoreError::Load(e.to_string()))
            }
            None => Ok(default_mappings()),
        }
    }

    /// Replace the keyword mappings wholesale.
    pub async fn put_mappings(
        &self,
        mappings: &HashMap<String, String>,
    ) -> Result<(), SettingsStoreError> {
        self.put_json(KEY_MAPPINGS, mappings).await
    }

    /// Assemble the three collections into a parse-time snapshot.
    pub async fn settings_snapshot(&self) -> Result<Settings, SettingsStoreError> {
        Ok(Settings {
            payment_methods: self.get_payment_methods().await?,
            categories: self.get_categories().await?,
            mappings: self.get_mappings().await?,
        })
    }

    async fn get_raw(&self, key: &str) -> Result<Option<String>, SettingsStoreError> {
        let mut rows = self
            .query(
                "SELECT value FROM settings WHERE key = ?1",
                params![key.to_string()],
            )
            .await
            .map_err(|e| SettingsStoreError::Load(e.to_string()))?;

        match rows
            .next()
            .await
            .map_err(|e| SettingsStoreError::Load(e.to_string()))?
        {
            Some(row) => {
                let value: String = row
                    .get(0)
                    .map_err(|e| SettingsStoreError::Load(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn put_json<T: serde::Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), SettingsStoreError> {
        self.ensure_ready()
            .map_err(|_| SettingsStoreError::NotReady)?;
        let json = serde_json::to_string(value)
            .map_err(|e| SettingsStoreError::Persistence(e.to_string()))?;
        put_raw(self, key, &json)
            .await
            .map_err(|e| SettingsStoreError::Persistence(e.to_string()))
    }
}

/// Replace one settings key wholesale, without the ready check. Used by
/// the public setters and by first-run seeding, which runs before the
/// ready flag is set.
async fn put_raw(client: &StoreClient, key: &str, json: &str) -> Result<(), StoreError> {
    client
        .execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![key.to_string(), json.to_string()],
        )
        .await?;
    Ok(())
}

/// Write all three default collections during schema initialization.
pub(crate) async fn seed_settings(
    client: &StoreClient,
    settings: &Settings,
) -> Result<(), StoreError> {
    let payment_methods = serde_json::to_string(&settings.payment_methods)
        .map_err(|e| StoreError::Query(e.to_string()))?;
    let categories = serde_json::to_string(&settings.categories)
        .map_err(|e| StoreError::Query(e.to_string()))?;
    let mappings = serde_json::to_string(&settings.mappings)
        .map_err(|e| StoreError::Query(e.to_string()))?;

    put_raw(client, KEY_PAYMENT_METHODS, &payment_methods).await?;
    put_raw(client, KEY_CATEGORIES, &categories).await?;
    put_raw(client, KEY_MAPPINGS, &mappings).await?;
    Ok(())
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
