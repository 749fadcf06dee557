// Expense persistence using the embedded database
//
// Amounts are stored as decimal text so values round-trip exactly; ids
// come from SQLite's monotonic rowid allocation, so two concurrent saves
// can never collide.

use libsql::params;
use rust_decimal::Decimal;
use serde::Serialize;

use super::client::StoreClient;

/// Fields supplied by the caller; id and created_at are assigned by the
/// store at persistence time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: Decimal,
    pub payment_method: String,
    pub category: String,
    pub original_category: String,
    pub raw_text: String,
}

/// A persisted expense row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Unique, monotonically assigned by the store, immutable.
    pub id: i64,
    pub amount: Decimal,
    pub payment_method: String,
    pub category: String,
    /// Raw token(s) from the utterance that drove category detection.
    pub original_category: String,
    /// Full original transcribed input, unmodified.
    pub raw_text: String,
    /// RFC 3339, stamped at persistence time.
    pub created_at: String,
}

/// Error types for expense storage operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpenseStoreError {
    /// Store used before initialize() succeeded
    #[error("Expense store not ready; call initialize() first")]
    NotReady,
    /// Failed to persist an expense
    #[error("Failed to persist expense: {0}")]
    Persistence(String),
    /// Failed to load expenses
    #[error("Failed to load expenses: {0}")]
    Load(String),
}

const SELECT_COLUMNS: &str =
    "SELECT id, amount, payment_method, category, original_category, raw_text, created_at FROM expense";

impl StoreClient {
    /// Persist a new expense.
    ///
    /// Assigns the next monotonically increasing id, stamps the creation
    /// time and returns the stored record.
    pub async fn save_expense(&self, new: NewExpense) -> Result<ExpenseRecord, ExpenseStoreError> {
        self.ensure_ready()
            .map_err(|_| ExpenseStoreError::NotReady)?;

        let created_at = chrono::Utc::now().to_rfc3339();

        let mut rows = self
            .query(
                r#"INSERT INTO expense
                   (amount, payment_method, category, original_category, raw_text, created_at)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                   RETURNING id"#,
                params![
                    new.amount.to_string(),
                    new.payment_method.clone(),
                    new.category.clone(),
                    new.original_category.clone(),
                    new.raw_text.clone(),
                    created_at.clone()
                ],
            )
            .await
            .map_err(|e| ExpenseStoreError::Persistence(e.to_string()))?;

        let id: i64 = match rows
            .next()
            .await
            .map_err(|e| ExpenseStoreError::Persistence(e.to_string()))?
        {
            Some(row) => row
                .get(0)
                .map_err(|e| ExpenseStoreError::Persistence(e.to_string()))?,
            None => {
                return Err(ExpenseStoreError::Persistence(
                    "insert returned no id".to_string(),
                ))
            }
        };

        Ok(ExpenseRecord {
            id,
            amount: new.amount,
            payment_method: new.payment_method,
            category: new.category,
            original_category: new.original_category,
            raw_text: new.raw_text,
            created_at,
        })
    }

    /// List all expenses, newest first.
    pub async fn list_expenses(&self) -> Result<Vec<ExpenseRecord>, ExpenseStoreError> {
        self.expense_scan(&format!(
            "{} ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))
        .await
    }

    /// Chronological enumeration (oldest first) used by delimited-text export.
    pub async fn export_snapshot(&self) -> Result<Vec<ExpenseRecord>, ExpenseStoreError> {
        self.expense_scan(&format!(
            "{} ORDER BY created_at ASC, id ASC",
            SELECT_COLUMNS
        ))
        .await
    }

    async fn expense_scan(&self, sql: &str) -> Result<Vec<ExpenseRecord>, ExpenseStoreError> {
        self.ensure_ready()
            .map_err(|_| ExpenseStoreError::NotReady)?;

        let mut rows = self
            .query(sql, ())
            .await
            .map_err(|e| ExpenseStoreError::Load(e.to_string()))?;

        let mut records = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| ExpenseStoreError::Load(e.to_string()))?
        {
            let id: i64 = row.get(0).map_err(|e| ExpenseStoreError::Load(e.to_string()))?;
            let amount_text: String =
                row.get(1).map_err(|e| ExpenseStoreError::Load(e.to_string()))?;
            let amount = amount_text
                .parse::<Decimal>()
                .map_err(|e| ExpenseStoreError::Load(e.to_string()))?;
            let payment_method: String =
                row.get(2).map_err(|e| ExpenseStoreError::Load(e.to_string()))?;
            let category: String =
                row.get(3).map_err(|e| ExpenseStoreError::Load(e.to_string()))?;
            let original_category: String =
                row.get(4).map_err(|e| ExpenseStoreError::Load(e.to_string()))?;
            let raw_text: String =
                row.get(5).map_err(|e| ExpenseStoreError::Load(e.to_string()))?;
            let created_at: String =
                row.get(6).map_err(|e| ExpenseStoreError::Load(e.to_string()))?;

            records.push(ExpenseRecord {
                id,
                amount,
                payment_method,
                category,
                original_category,
                raw_text,
                created_at,
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
#[path = "expenses_test.rs"]
mod tests;
