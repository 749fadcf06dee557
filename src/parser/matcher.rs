// Token matching for payment methods and categories

use crate::settings::Settings;

/// Lowercase and strip all whitespace so configured names and utterance
/// words compare as bare tokens.
fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// First configured method (stored order) with a token-equality match
/// anywhere in the utterance. Settings order is the priority order.
pub(crate) fn match_payment_method(words: &[&str], methods: &[String]) -> Option<String> {
    let normalized_words: Vec<String> = words.iter().map(|w| normalize(w)).collect();
    methods
        .iter()
        .find(|method| {
            let target = normalize(method);
            normalized_words.iter().any(|word| *word == target)
        })
        .cloned()
}

/// Category detection over the utterance words, skipping the indices
/// consumed by amount extraction.
///
/// Direct category-name matches take priority over keyword mappings; the
/// leftmost qualifying word wins within a tier. Returns the category and
/// the raw word that drove the match (empty on fallback).
pub(crate) fn detect_category(
    words: &[&str],
    skip: &[usize],
    settings: &Settings,
) -> (String, String) {
    for (i, word) in words.iter().enumerate() {
        if skip.contains(&i) {
            continue;
        }
        let normalized = normalize(word);
        if let Some(category) = settings
            .categories
            .iter()
            .find(|c| normalize(c) == normalized)
        {
            return (category.clone(), (*word).to_string());
        }
    }

    for (i, word) in words.iter().enumerate() {
        if skip.contains(&i) {
            continue;
        }
        if let Some(mapped) = settings.mappings.get(&normalize(word)) {
            return (mapped.clone(), (*word).to_string());
        }
    }

    (crate::parser::FALLBACK_CATEGORY.to_string(), String::new())
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
