// Capture events for the surrounding interface layer
// Defines event payloads and emission trait for testability

use rust_decimal::Decimal;
use serde::Serialize;

/// Event names as constants for consistency
pub mod event_names {
    pub const EXPENSE_PARSED: &str = "expense_parsed";
    pub const EXPENSE_SAVED: &str = "expense_saved";
    pub const CAPTURE_ERROR: &str = "capture_error";
}

/// Current time as an RFC 3339 string, for event payloads.
pub fn current_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Payload for expense_parsed event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseParsedPayload {
    /// Parsed amount, absent when the utterance held no numeric token
    pub amount: Option<Decimal>,
    pub payment_method: String,
    pub category: String,
    pub original_category: String,
    /// Utterance words minus the amount tokens
    pub residual_text: String,
    /// Full original utterance
    pub raw_text: String,
}

/// Payload for expense_saved event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSavedPayload {
    /// Store-assigned expense id
    pub id: i64,
    /// Canonical two-decimal display form of the amount
    pub amount: String,
    /// ISO 8601 timestamp stamped at persistence time
    pub timestamp: String,
}

/// Payload for capture_error event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaptureErrorPayload {
    pub error: String,
}

/// Trait for emitting capture events
/// Allows mocking in tests while using the console emitter in the CLI
pub trait CaptureEventEmitter: Send + Sync {
    /// Emit expense_parsed event
    fn emit_expense_parsed(&self, payload: ExpenseParsedPayload);

    /// Emit expense_saved event
    fn emit_expense_saved(&self, payload: ExpenseSavedPayload);

    /// Emit capture_error event
    fn emit_capture_error(&self, payload: CaptureErrorPayload);
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
