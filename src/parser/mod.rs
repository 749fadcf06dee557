// Parsing engine - turns one transcribed utterance into a structured expense
//
// Pure and deterministic: identical (text, settings) input always yields
// identical output, and no step can fail. A missing amount, payment method
// or category degrades to a documented fallback instead of an error.

mod amount;
mod matcher;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::settings::Settings;

/// Payment method used when no configured method token appears in the text.
pub const DEFAULT_PAYMENT_METHOD: &str = "Efectivo";

/// Category sentinel used when no category name or keyword matches.
pub const FALLBACK_CATEGORY: &str = "Varios";

/// Structured result of parsing one utterance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedExpense {
    /// Parsed amount. `None` means the text held no numeric token; the
    /// caller must withhold the save action rather than default the value.
    pub amount: Option<Decimal>,
    /// A configured payment method, or the fixed fallback.
    pub payment_method: String,
    /// A configured category, the mapped category, or the fallback sentinel.
    pub category: String,
    /// Raw token that drove category detection (empty on fallback).
    pub original_category: String,
    /// Utterance words minus the amount and connector tokens.
    pub residual_text: String,
}

/// Parse an utterance against a settings snapshot.
pub fn parse(text: &str, settings: &Settings) -> ParsedExpense {
    let words: Vec<&str> = text.split_whitespace().collect();

    let amount_match = amount::extract_amount(&words);
    let consumed: &[usize] = amount_match
        .as_ref()
        .map(|m| m.consumed.as_slice())
        .unwrap_or(&[]);

    let payment_method = matcher::match_payment_method(&words, &settings.payment_methods)
        .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string());

    let (category, original_category) = matcher::detect_category(&words, consumed, settings);

    let residual_text = words
        .iter()
        .enumerate()
        .filter(|(i, _)| !consumed.contains(i))
        .map(|(_, w)| *w)
        .collect::<Vec<_>>()
        .join(" ");

    ParsedExpense {
        amount: amount_match.map(|m| m.value),
        payment_method,
        category,
        original_category,
        residual_text,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
