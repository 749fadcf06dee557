//! Expense store: embedded libsql persistence for expenses and settings.
//!
//! The client opens the database file, `initialize()` creates the schema
//! and seeds default settings on first run, and the expense and settings
//! operations live in their own modules. All operations are async and
//! fail fast with a not-ready error until initialization succeeds.

mod client;
mod expenses;
mod schema;
mod settings;
mod traits;

pub use client::{StoreClient, StoreError};
pub use expenses::{ExpenseRecord, ExpenseStoreError, NewExpense};
pub use settings::{SettingsStoreError, KEY_CATEGORIES, KEY_MAPPINGS, KEY_PAYMENT_METHODS};
pub use traits::{ExpenseStoreBackend, SettingsStoreBackend};
