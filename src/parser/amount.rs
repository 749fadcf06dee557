// Amount extraction from utterance words
//
// Two shapes are recognized, in order: the spoken-fraction pattern
// ("5000 con 50" -> 5000.50) and the first generic numeric token, whose
// comma/period separators are disambiguated by position.

use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

/// Connector word between the whole and fractional spoken tokens.
const FRACTION_CONNECTOR: &str = "con";

/// A matched amount plus the word indices it consumed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AmountMatch {
    pub value: Decimal,
    /// Indices of the amount tokens and, for the spoken-fraction pattern,
    /// the connector word. Used to skip these words downstream.
    pub consumed: Vec<usize>,
}

fn numeric_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9][0-9.,]*$").expect("valid regex"))
}

fn integer_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("valid regex"))
}

/// Sentence punctuation glued to a number must not change its value
/// ("12,5." -> "12,5").
fn trim_separators(word: &str) -> &str {
    word.trim_matches(|c| c == '.' || c == ',')
}

pub(crate) fn is_numeric_token(word: &str) -> bool {
    numeric_token_re().is_match(trim_separators(word))
}

fn is_integer_token(word: &str) -> bool {
    integer_token_re().is_match(word)
}

/// Find the amount in the word sequence, spoken-fraction pattern first.
pub(crate) fn extract_amount(words: &[&str]) -> Option<AmountMatch> {
    if let Some(m) = match_spoken_fraction(words) {
        return Some(m);
    }

    let index = words.iter().position(|w| is_numeric_token(w))?;
    let value = normalize_numeric_token(words[index])?;
    Some(AmountMatch {
        value,
        consumed: vec![index],
    })
}

/// Match "<numeric> con <integer>" anywhere in the word sequence.
fn match_spoken_fraction(words: &[&str]) -> Option<AmountMatch> {
    for i in 0..words.len().saturating_sub(2) {
        if is_numeric_token(words[i])
            && words[i + 1].eq_ignore_ascii_case(FRACTION_CONNECTOR)
            && is_integer_token(words[i + 2])
        {
            let whole = normalize_numeric_token(words[i])?;
            let value = whole + Decimal::new(fraction_cents(words[i + 2]) as i64, 2);
            return Some(AmountMatch {
                value,
                consumed: vec![i, i + 1, i + 2],
            });
        }
    }
    None
}

/// Fractional token as hundredths: a single digit is tenths ("5" -> 50),
/// longer tokens keep their first two digits ("505" -> 50).
fn fraction_cents(token: &str) -> u32 {
    let digits: String = token.chars().take(2).collect();
    let value: u32 = digits.parse().unwrap_or(0);
    if digits.len() == 1 {
        value * 10
    } else {
        value
    }
}

/// Normalize a numeric token to a two-decimal value.
///
/// The rightmost comma or period is the decimal separator; every other
/// separator occurrence is grouping and is stripped. A token with no
/// separator parses as a plain integer.
pub(crate) fn normalize_numeric_token(word: &str) -> Option<Decimal> {
    let token = trim_separators(word);
    if !numeric_token_re().is_match(token) {
        return None;
    }

    let normalized: String = match token.rfind(|c| c == '.' || c == ',') {
        Some(decimal_pos) => token
            .char_indices()
            .filter_map(|(i, c)| {
                if c.is_ascii_digit() {
                    Some(c)
                } else if i == decimal_pos {
                    Some('.')
                } else {
                    None
                }
            })
            .collect(),
        None => token.to_string(),
    };

    normalized.parse::<Decimal>().ok().map(|d| d.round_dp(2))
}

#[cfg(test)]
#[path = "amount_test.rs"]
mod tests;
