use crate::settings::{Settings, DEFAULT_CATEGORIES};
use crate::store::StoreClient;
use std::collections::HashMap;
use tempfile::TempDir;

async fn setup_client() -> (StoreClient, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let client = StoreClient::new(temp_dir.path().to_path_buf())
        .await
        .expect("Failed to create client");
    client.initialize().await.expect("Failed to initialize");
    (client, temp_dir)
}

#[tokio::test]
async fn test_fresh_store_returns_defaults() {
    let (client, _temp) = setup_client().await;

    let categories = client.get_categories().await.expect("Failed to read");
    let expected: Vec<String> = DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();
    assert_eq!(categories, expected);
}

#[tokio::test]
async fn test_categories_round_trip_exactly() {
    let (client, _temp) = setup_client().await;

    // No merge and no dedup beyond what the caller supplied
    let custom = vec!["A".to_string(), "A".to_string(), "B".to_string()];
    client
        .put_categories(&custom)
        .await
        .expect("Failed to write categories");

    let read = client.get_categories().await.expect("Failed to read");
    assert_eq!(read, custom);
}

#[tokio::test]
async fn test_put_is_last_write_wins() {
    let (client, _temp) = setup_client().await;

    client
        .put_payment_methods(&["Primero".to_string()])
        .await
        .expect("First write failed");
    client
        .put_payment_methods(&["Segundo".to_string()])
        .await
        .expect("Second write failed");

    let methods = client.get_payment_methods().await.expect("Failed to read");
    assert_eq!(methods, vec!["Segundo".to_string()]);
}

#[tokio::test]
async fn test_mappings_round_trip() {
    let (client, _temp) = setup_client().await;

    let mut mappings = HashMap::new();
    mappings.insert("carne".to_string(), "Supermercado".to_string());
    mappings.insert("taxi".to_string(), "Transporte".to_string());

    client
        .put_mappings(&mappings)
        .await
        .expect("Failed to write mappings");

    let read = client.get_mappings().await.expect("Failed to read");
    assert_eq!(read, mappings);
}

#[tokio::test]
async fn test_empty_mappings_are_preserved() {
    let (client, _temp) = setup_client().await;

    client
        .put_mappings(&HashMap::new())
        .await
        .expect("Failed to write empty mappings");

    let read = client.get_mappings().await.expect("Failed to read");
    assert!(read.is_empty());
}

#[tokio::test]
async fn test_snapshot_assembles_all_three_keys() {
    let (client, _temp) = setup_client().await;

    client
        .put_categories(&["Nueva".to_string()])
        .await
        .expect("Failed to write categories");

    let snapshot = client
        .settings_snapshot()
        .await
        .expect("Failed to read snapshot");

    assert_eq!(snapshot.categories, vec!["Nueva".to_string()]);
    // Untouched keys still carry the seeded defaults
    assert_eq!(
        snapshot.payment_methods,
        Settings::default().payment_methods
    );
    assert_eq!(snapshot.mappings, Settings::default().mappings);
}
