use crate::store::{NewExpense, StoreClient};
use rust_decimal::Decimal;
use std::sync::Arc;
use tempfile::TempDir;

async fn setup_client() -> (StoreClient, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let client = StoreClient::new(temp_dir.path().to_path_buf())
        .await
        .expect("Failed to create client");
    client.initialize().await.expect("Failed to initialize");
    (client, temp_dir)
}

fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal")
}

fn expense(raw_text: &str, amount: &str) -> NewExpense {
    NewExpense {
        amount: dec(amount),
        payment_method: "Efectivo".to_string(),
        category: "Supermercado".to_string(),
        original_category: "carne".to_string(),
        raw_text: raw_text.to_string(),
    }
}

#[tokio::test]
async fn test_save_and_list_round_trip() {
    let (client, _temp) = setup_client().await;

    let saved = client
        .save_expense(expense("Carne 5000 con 50 efectivo", "5000.50"))
        .await
        .expect("Failed to save expense");

    assert!(saved.id > 0, "Store should assign a positive id");
    assert!(!saved.created_at.is_empty(), "Store should stamp a date");
    chrono::DateTime::parse_from_rfc3339(&saved.created_at)
        .expect("created_at should be RFC 3339");

    let listed = client.list_expenses().await.expect("Failed to list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], saved);
}

#[tokio::test]
async fn test_amount_round_trips_exactly() {
    let (client, _temp) = setup_client().await;

    for amount in ["5000.50", "0.10", "12.5", "1234567.89"] {
        client
            .save_expense(expense("x", amount))
            .await
            .expect("Failed to save expense");
    }

    let listed = client.list_expenses().await.expect("Failed to list");
    let amounts: Vec<Decimal> = listed.iter().rev().map(|e| e.amount).collect();
    assert_eq!(
        amounts,
        vec![dec("5000.50"), dec("0.10"), dec("12.5"), dec("1234567.89")]
    );
}

#[tokio::test]
async fn test_ids_are_unique_and_monotonic() {
    let (client, _temp) = setup_client().await;

    let first = client
        .save_expense(expense("a", "1"))
        .await
        .expect("Failed to save first");
    let second = client
        .save_expense(expense("b", "2"))
        .await
        .expect("Failed to save second");
    let third = client
        .save_expense(expense("c", "3"))
        .await
        .expect("Failed to save third");

    assert!(first.id < second.id);
    assert!(second.id < third.id);
}

#[tokio::test]
async fn test_concurrent_saves_never_collide_on_id() {
    let (client, _temp) = setup_client().await;
    let client = Arc::new(client);

    let a = client.clone();
    let b = client.clone();
    let (first, second) = tokio::join!(
        a.save_expense(expense("a", "1")),
        b.save_expense(expense("b", "2"))
    );

    let first = first.expect("First concurrent save failed");
    let second = second.expect("Second concurrent save failed");
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_list_newest_first() {
    let (client, _temp) = setup_client().await;

    client.save_expense(expense("a", "1")).await.expect("save a");
    client.save_expense(expense("b", "2")).await.expect("save b");
    client.save_expense(expense("c", "3")).await.expect("save c");

    let listed = client.list_expenses().await.expect("Failed to list");
    let texts: Vec<&str> = listed.iter().map(|e| e.raw_text.as_str()).collect();
    assert_eq!(texts, vec!["c", "b", "a"]);
}

#[tokio::test]
async fn test_export_snapshot_is_chronological() {
    let (client, _temp) = setup_client().await;

    client.save_expense(expense("a", "1")).await.expect("save a");
    client.save_expense(expense("b", "2")).await.expect("save b");

    let snapshot = client
        .export_snapshot()
        .await
        .expect("Failed to read snapshot");
    let texts: Vec<&str> = snapshot.iter().map(|e| e.raw_text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[tokio::test]
async fn test_list_empty_store() {
    let (client, _temp) = setup_client().await;

    let listed = client.list_expenses().await.expect("Failed to list");
    assert!(listed.is_empty());
}
