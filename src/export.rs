// Delimited-text export of the expense snapshot
//
// Column order is fixed: date, amount, category, payment method, text.
// Amounts render in their canonical two-decimal display form.

use std::io::Write;

use csv::Writer;

use crate::store::ExpenseRecord;

/// Error types for snapshot export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Failed to write a record or flush the output
    #[error("Failed to write export: {0}")]
    Write(String),
}

/// Header row, in the exported column order.
const HEADER: [&str; 5] = ["fecha", "monto", "categoria", "medio_pago", "texto"];

/// Write the expense snapshot as CSV.
pub fn write_csv<W: Write>(expenses: &[ExpenseRecord], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| ExportError::Write(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record(&[
                expense.created_at.clone(),
                format!("{:.2}", expense.amount),
                expense.category.clone(),
                expense.payment_method.clone(),
                expense.raw_text.clone(),
            ])
            .map_err(|e| ExportError::Write(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Write(e.to_string()))
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
