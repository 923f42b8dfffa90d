use crate::spellcheck::WordDictionary;
use tracing::debug;

/// Minimum Jaro-Winkler similarity before a word is rewritten. High on
/// purpose: a missed correction reads better than a mangled word.
const CORRECTION_THRESHOLD: f64 = 0.92;

/// Normalize extracted text: run the spelling pass over the whole text,
/// then drop blank lines and trim the rest.
///
/// Empty input yields empty output. Already-clean, correctly-spelled
/// text comes back unchanged.
pub fn clean(text: &str) -> String {
    let dictionary = WordDictionary::new();
    let corrected = dictionary.correct_text(text, CORRECTION_THRESHOLD);

    let cleaned = corrected
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    debug!(
        "cleaned text: {} chars in, {} chars out",
        text.len(),
        cleaned.len()
    );
    cleaned
}
