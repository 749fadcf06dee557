// gastovoz - voice expense capture core
//
// A spoken utterance, already transcribed to text by an external engine,
// is parsed into a structured expense (amount, payment method, category)
// and persisted in an embedded libsql database. The binary in main.rs is
// a thin stdin-driven capture loop standing in for a voice frontend.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod app;
mod capture;
mod events;
mod export;
mod parser;
mod paths;
mod session;
mod settings;
mod store;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use capture::{CaptureError, CaptureService};
pub use events::{
    current_timestamp, CaptureErrorPayload, CaptureEventEmitter, ExpenseParsedPayload,
    ExpenseSavedPayload,
};
pub use export::{write_csv, ExportError};
pub use parser::{parse, ParsedExpense, DEFAULT_PAYMENT_METHOD, FALLBACK_CATEGORY};
pub use session::{
    SessionManager, SessionState, SessionStateError, SourceError, UtteranceSource,
};
pub use settings::{default_mappings, Settings, DEFAULT_CATEGORIES, DEFAULT_PAYMENT_METHODS};
pub use store::{
    ExpenseRecord, ExpenseStoreBackend, ExpenseStoreError, NewExpense, SettingsStoreBackend,
    SettingsStoreError, StoreClient, StoreError, KEY_CATEGORIES, KEY_MAPPINGS,
    KEY_PAYMENT_METHODS,
};

/// Run the interactive capture loop. The binary entry point delegates here.
#[cfg_attr(coverage_nightly, coverage(off))]
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    app::run().await
}
