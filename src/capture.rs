// CaptureService - unified utterance-to-expense flow
// Handles: settings snapshot → parse → event emission → persistence
//
// This service decouples the capture flow from the interface layer, so a
// stdin loop, a hotkey frontend or a wake-word flow share the same logic.

use std::sync::Arc;

use crate::events::{
    CaptureErrorPayload, CaptureEventEmitter, ExpenseParsedPayload, ExpenseSavedPayload,
};
use crate::parser::{self, ParsedExpense};
use crate::store::{ExpenseStoreBackend, NewExpense, SettingsStoreBackend};

/// Errors surfaced by the capture flow
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CaptureError {
    /// No numeric token was found; the expense must not be persisted
    #[error("Utterance has no parseable amount; refusing to save")]
    MissingAmount,
    /// Settings snapshot could not be read
    #[error("Failed to read settings: {0}")]
    Settings(String),
    /// Expense could not be persisted
    #[error("Failed to save expense: {0}")]
    Store(String),
}

/// Service for turning finalized utterances into persisted expenses.
pub struct CaptureService<S, E>
where
    S: ExpenseStoreBackend + SettingsStoreBackend,
    E: CaptureEventEmitter,
{
    store: Arc<S>,
    emitter: Arc<E>,
}

impl<S, E> CaptureService<S, E>
where
    S: ExpenseStoreBackend + SettingsStoreBackend,
    E: CaptureEventEmitter,
{
    /// Create a new CaptureService over a store backend and event emitter
    pub fn new(store: Arc<S>, emitter: Arc<E>) -> Self {
        Self { store, emitter }
    }

    /// Parse one utterance against the current settings snapshot.
    ///
    /// Parsing itself cannot fail; only the settings read can. Emits
    /// expense_parsed on success so the interface layer can show the
    /// result for confirmation.
    pub async fn process_utterance(&self, text: &str) -> Result<ParsedExpense, CaptureError> {
        let settings = match self.store.settings_snapshot().await {
            Ok(settings) => settings,
            Err(e) => {
                let error = CaptureError::Settings(e.to_string());
                self.emitter.emit_capture_error(CaptureErrorPayload {
                    error: error.to_string(),
                });
                return Err(error);
            }
        };

        let parsed = parser::parse(text, &settings);
        crate::debug!(
            "Parsed utterance: amount={:?} method={} category={}",
            parsed.amount,
            parsed.payment_method,
            parsed.category
        );

        self.emitter.emit_expense_parsed(ExpenseParsedPayload {
            amount: parsed.amount,
            payment_method: parsed.payment_method.clone(),
            category: parsed.category.clone(),
            original_category: parsed.original_category.clone(),
            residual_text: parsed.residual_text.clone(),
            raw_text: text.to_string(),
        });

        Ok(parsed)
    }

    /// Persist a parsed expense.
    ///
    /// Refuses when the amount is missing, so an unparsed utterance is
    /// never silently stored with a plausible-looking value. Returns the
    /// store-assigned id.
    pub async fn save_parsed(
        &self,
        parsed: &ParsedExpense,
        raw_text: &str,
    ) -> Result<i64, CaptureError> {
        let amount = parsed.amount.ok_or(CaptureError::MissingAmount)?;

        let record = match self
            .store
            .save_expense(NewExpense {
                amount,
                payment_method: parsed.payment_method.clone(),
                category: parsed.category.clone(),
                original_category: parsed.original_category.clone(),
                raw_text: raw_text.to_string(),
            })
            .await
        {
            Ok(record) => record,
            Err(e) => {
                let error = CaptureError::Store(e.to_string());
                self.emitter.emit_capture_error(CaptureErrorPayload {
                    error: error.to_string(),
                });
                return Err(error);
            }
        };

        crate::info!("Expense {} saved ({})", record.id, record.category);
        self.emitter.emit_expense_saved(ExpenseSavedPayload {
            id: record.id,
            amount: format!("{:.2}", record.amount),
            timestamp: record.created_at.clone(),
        });

        Ok(record.id)
    }
}

#[cfg(test)]
#[path = "capture_test.rs"]
mod tests;
