// User-configurable capture settings
//
// Three collections drive parsing: payment methods, categories and the
// lowercase keyword -> category mappings. The store owns the persistent
// copy; the parsing engine only ever sees an immutable snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default payment methods, in matching-priority order.
pub const DEFAULT_PAYMENT_METHODS: [&str; 5] = [
    "Transferencia",
    "VisaBBVA",
    "MasterBBVA",
    "Debito",
    "Efectivo",
];

/// Default expense categories.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Comida",
    "Extra",
    "Mascotas",
    "Salud",
    "Servicios",
    "Supermercado",
    "Transporte",
    "Varios",
];

/// Settings snapshot read at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Ordered: position is the matching priority for payment methods.
    pub payment_methods: Vec<String>,
    pub categories: Vec<String>,
    /// Lowercase keyword -> category name.
    pub mappings: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            payment_methods: DEFAULT_PAYMENT_METHODS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            mappings: default_mappings(),
        }
    }
}

/// Seed keyword mappings: words spoken more often than their category name.
pub fn default_mappings() -> HashMap<String, String> {
    let mut mappings = HashMap::new();
    for keyword in ["carne", "verduras", "pan", "leche", "fruta"] {
        mappings.insert(keyword.to_string(), "Supermercado".to_string());
    }
    for keyword in ["colectivo", "taxi", "tren", "subte", "nafta"] {
        mappings.insert(keyword.to_string(), "Transporte".to_string());
    }
    for keyword in ["luz", "gas", "agua", "internet"] {
        mappings.insert(keyword.to_string(), "Servicios".to_string());
    }
    mappings
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
