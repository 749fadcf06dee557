// CLI capture loop - the thin interface layer around the core
//
// Reads utterances from stdin in place of a live transcription engine and
// drives them through the session state machine and the capture service.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::capture::{CaptureError, CaptureService};
use crate::events::{
    CaptureErrorPayload, CaptureEventEmitter, ExpenseParsedPayload, ExpenseSavedPayload,
};
use crate::export;
use crate::session::{SessionManager, SourceError, UtteranceSource};
use crate::store::StoreClient;

/// Meta-commands understood by the capture loop.
const CMD_LIST: &str = ":lista";
const CMD_CSV: &str = ":csv";
const CMD_QUIT: &str = ":salir";

/// Emits capture events as console lines. Stand-in for the visual
/// feedback layer of a voice frontend.
pub struct ConsoleEmitter;

impl CaptureEventEmitter for ConsoleEmitter {
    fn emit_expense_parsed(&self, payload: ExpenseParsedPayload) {
        match payload.amount {
            Some(amount) => println!(
                "  monto: {:.2}  medio: {}  categoria: {}  detalle: {}",
                amount, payload.payment_method, payload.category, payload.residual_text
            ),
            None => println!("  sin monto reconocible en: \"{}\"", payload.raw_text),
        }
    }

    fn emit_expense_saved(&self, payload: ExpenseSavedPayload) {
        println!("  guardado #{} ({})", payload.id, payload.amount);
    }

    fn emit_capture_error(&self, payload: CaptureErrorPayload) {
        eprintln!("  error: {}", payload.error);
    }
}

/// Stdin-backed utterance source: each line is a finalized utterance.
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UtteranceSource for StdinSource {
    async fn next_utterance(&mut self) -> Result<Option<String>, SourceError> {
        match self.lines.next_line().await {
            Ok(Some(line)) => Ok(Some(line.trim().to_string())),
            Ok(None) => Ok(None),
            Err(e) => Err(SourceError::Failed(e.to_string())),
        }
    }
}

/// Open the database, initialize the schema and return the shared client.
/// Initialization failure is fatal for the session and propagates up.
async fn setup_store() -> Result<Arc<StoreClient>, Box<dyn std::error::Error>> {
    let data_dir = crate::paths::get_data_dir()?;
    let client = StoreClient::new(data_dir).await?;
    crate::info!("Expense database at {:?}", client.db_path());
    client.initialize().await?;
    Ok(Arc::new(client))
}

/// Run the capture loop until EOF or the quit command.
#[cfg_attr(coverage_nightly, coverage(off))]
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    let store = setup_store().await?;
    let service = CaptureService::new(store.clone(), Arc::new(ConsoleEmitter));

    println!("gastovoz - captura de gastos por voz");
    println!(
        "Escribí un gasto (\"{}\" lista, \"{}\" exporta, \"{}\" sale)",
        CMD_LIST, CMD_CSV, CMD_QUIT
    );

    let mut source = StdinSource::new();
    let mut session = SessionManager::new();

    loop {
        session.begin_listening()?;

        let text = match source.next_utterance().await {
            Ok(Some(text)) => {
                session.deliver_result()?;
                text
            }
            Ok(None) => {
                // Source exhausted without a terminal outcome
                session.reset_to_idle();
                break;
            }
            Err(e) => {
                match e {
                    SourceError::TimedOut => session.deliver_timeout()?,
                    SourceError::Failed(_) => session.deliver_error()?,
                }
                crate::warn!("Utterance source failed: {}", e);
                session.reset_to_idle();
                continue;
            }
        };
        session.reset_to_idle();

        if text.is_empty() {
            continue;
        }

        match text.as_str() {
            CMD_QUIT => break,
            CMD_LIST => print_expenses(&store).await,
            CMD_CSV => print_csv(&store).await,
            _ => handle_utterance(&service, &text).await,
        }
    }

    println!("Hasta luego!");
    Ok(())
}

/// Parse one utterance and persist it when an amount was found. The
/// console emitter reports the outcome either way.
async fn handle_utterance(service: &CaptureService<StoreClient, ConsoleEmitter>, text: &str) {
    let parsed = match service.process_utterance(text).await {
        Ok(parsed) => parsed,
        Err(e) => {
            crate::error!("Capture failed: {}", e);
            return;
        }
    };

    match service.save_parsed(&parsed, text).await {
        Ok(_) => {}
        Err(CaptureError::MissingAmount) => {
            crate::debug!("Save withheld, no amount in: {}", text);
        }
        Err(e) => crate::error!("Save failed: {}", e),
    }
}

async fn print_expenses(store: &StoreClient) {
    match store.list_expenses().await {
        Ok(expenses) if expenses.is_empty() => println!("  (sin gastos todavía)"),
        Ok(expenses) => {
            for expense in expenses {
                println!(
                    "  #{} {} {:.2} {} [{}] {}",
                    expense.id,
                    expense.created_at,
                    expense.amount,
                    expense.payment_method,
                    expense.category,
                    expense.raw_text
                );
            }
        }
        Err(e) => crate::error!("Failed to list expenses: {}", e),
    }
}

async fn print_csv(store: &StoreClient) {
    match store.export_snapshot().await {
        Ok(expenses) => {
            if let Err(e) = export::write_csv(&expenses, std::io::stdout()) {
                crate::error!("Export failed: {}", e);
            }
        }
        Err(e) => crate::error!("Failed to read export snapshot: {}", e),
    }
}
