//! Splitting of the raw "producers" column into individual names

use once_cell::sync::Lazy;
use regex::Regex;

/// Names are separated by a comma or by the word "and" surrounded by whitespace
static PRODUCER_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",|\s+and\s+").expect("producer separator pattern is valid"));

/// Split a raw producers field into names, in left-to-right order
///
/// One layer of surrounding double quotes is removed when both ends carry
/// one; an unbalanced quote is left in place. Tokens are trimmed and empty
/// tokens dropped, so blank input gives an empty list.
pub fn parse_producer_names(raw: &str) -> Vec<String> {
    let mut cleaned = raw.trim();
    if cleaned.len() >= 2 && cleaned.starts_with('"') && cleaned.ends_with('"') {
        cleaned = &cleaned[1..cleaned.len() - 1];
    }

    if cleaned.trim().is_empty() {
        return Vec::new();
    }

    PRODUCER_SEPARATOR
        .split(cleaned)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
