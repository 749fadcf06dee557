use super::*;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal")
}

fn record(id: i64, created_at: &str, amount: &str, raw_text: &str) -> ExpenseRecord {
    ExpenseRecord {
        id,
        amount: dec(amount),
        payment_method: "Efectivo".to_string(),
        category: "Supermercado".to_string(),
        original_category: "carne".to_string(),
        raw_text: raw_text.to_string(),
        created_at: created_at.to_string(),
    }
}

fn csv_lines(expenses: &[ExpenseRecord]) -> Vec<String> {
    let mut buffer = Vec::new();
    write_csv(expenses, &mut buffer).expect("Export should succeed");
    String::from_utf8(buffer)
        .expect("CSV output should be UTF-8")
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_header_and_column_order() {
    let expenses = [record(
        1,
        "2026-01-02T10:00:00+00:00",
        "5000.50",
        "Carne 5000 con 50 efectivo",
    )];
    let lines = csv_lines(&expenses);

    assert_eq!(lines[0], "fecha,monto,categoria,medio_pago,texto");
    assert_eq!(
        lines[1],
        "2026-01-02T10:00:00+00:00,5000.50,Supermercado,Efectivo,Carne 5000 con 50 efectivo"
    );
}

#[test]
fn test_amount_renders_two_decimals() {
    let expenses = [record(1, "2026-01-02T10:00:00+00:00", "500", "Pan 500")];
    let lines = csv_lines(&expenses);

    assert!(lines[1].contains(",500.00,"), "got: {}", lines[1]);
}

#[test]
fn test_empty_snapshot_writes_only_header() {
    let lines = csv_lines(&[]);
    assert_eq!(lines, vec!["fecha,monto,categoria,medio_pago,texto"]);
}

#[test]
fn test_text_with_delimiter_is_quoted() {
    let expenses = [record(
        1,
        "2026-01-02T10:00:00+00:00",
        "30",
        "pan, leche y fruta",
    )];
    let lines = csv_lines(&expenses);

    assert!(
        lines[1].ends_with("\"pan, leche y fruta\""),
        "got: {}",
        lines[1]
    );
}

#[test]
fn test_rows_preserve_input_order() {
    let expenses = [
        record(1, "2026-01-01T00:00:00+00:00", "1", "a"),
        record(2, "2026-01-02T00:00:00+00:00", "2", "b"),
    ];
    let lines = csv_lines(&expenses);

    assert!(lines[1].ends_with(",a"));
    assert!(lines[2].ends_with(",b"));
}
