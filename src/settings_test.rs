use super::*;

#[test]
fn test_default_payment_methods_order() {
    let settings = Settings::default();
    assert_eq!(
        settings.payment_methods,
        vec![
            "Transferencia",
            "VisaBBVA",
            "MasterBBVA",
            "Debito",
            "Efectivo"
        ]
    );
}

#[test]
fn test_default_categories_include_fallback() {
    let settings = Settings::default();
    assert!(settings.categories.contains(&"Varios".to_string()));
    assert_eq!(settings.categories.len(), DEFAULT_CATEGORIES.len());
}

#[test]
fn test_default_mappings_target_configured_categories() {
    let settings = Settings::default();
    for target in settings.mappings.values() {
        assert!(
            settings.categories.contains(target),
            "mapping target {} is not a configured category",
            target
        );
    }
}

#[test]
fn test_default_mapping_keys_are_lowercase() {
    for key in default_mappings().keys() {
        assert_eq!(key, &key.to_lowercase());
    }
}

#[test]
fn test_settings_serialize_camel_case() {
    let json = serde_json::to_value(Settings::default()).expect("Serialization should succeed");
    assert!(json.get("paymentMethods").is_some());
    assert!(json.get("categories").is_some());
    assert!(json.get("mappings").is_some());
}

#[test]
fn test_settings_round_trip_through_json() {
    let settings = Settings::default();
    let json = serde_json::to_string(&settings).expect("Serialization should succeed");
    let back: Settings = serde_json::from_str(&json).expect("Deserialization should succeed");
    assert_eq!(back, settings);
}
