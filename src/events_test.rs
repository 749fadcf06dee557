use super::*;

#[test]
fn test_current_timestamp_is_rfc3339() {
    let timestamp = current_timestamp();
    chrono::DateTime::parse_from_rfc3339(&timestamp)
        .expect("Timestamp should be valid RFC 3339");
}

#[test]
fn test_parsed_payload_serializes_camel_case() {
    let payload = ExpenseParsedPayload {
        amount: Some("12.50".parse().expect("valid decimal")),
        payment_method: "Efectivo".to_string(),
        category: "Comida".to_string(),
        original_category: "comida".to_string(),
        residual_text: "Pan".to_string(),
        raw_text: "Pan 12,5".to_string(),
    };

    let json = serde_json::to_value(&payload).expect("Serialization should succeed");
    assert!(json.get("paymentMethod").is_some());
    assert!(json.get("originalCategory").is_some());
    assert!(json.get("residualText").is_some());
    assert!(json.get("rawText").is_some());
}

#[test]
fn test_parsed_payload_missing_amount_is_null() {
    let payload = ExpenseParsedPayload {
        amount: None,
        payment_method: "Efectivo".to_string(),
        category: "Varios".to_string(),
        original_category: String::new(),
        residual_text: String::new(),
        raw_text: String::new(),
    };

    let json = serde_json::to_value(&payload).expect("Serialization should succeed");
    assert!(json.get("amount").expect("amount key present").is_null());
}

#[test]
fn test_event_names() {
    assert_eq!(event_names::EXPENSE_PARSED, "expense_parsed");
    assert_eq!(event_names::EXPENSE_SAVED, "expense_saved");
    assert_eq!(event_names::CAPTURE_ERROR, "capture_error");
}
