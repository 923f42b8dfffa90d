//! Best-effort spelling correction for extracted text.
//!
//! Fuzzy-matches each word against a built-in list of common English
//! words. The pass is heuristic: words close enough to a dictionary
//! entry are rewritten, so unusual proper nouns or technical terms can
//! be altered. Callers opt in via the cleaning stage.

use strsim::jaro_winkler;
use tracing::debug;

/// Words shorter than this are never corrected; fuzzy matching on very
/// short words produces mostly noise.
const MIN_WORD_LEN: usize = 4;

const COMMON_WORDS: &[&str] = &[
    // Function words
    "the", "and", "for", "not", "with", "this", "that", "from", "have",
    "been", "were", "they", "their", "there", "then", "than", "when",
    "where", "which", "while", "what", "will", "would", "could", "should",
    "because", "about", "after", "again", "before", "between", "both",
    "down", "during", "each", "them", "these", "those", "through",
    "under", "until", "over", "only", "other", "into", "just", "like",
    "made", "make", "many", "more", "most", "much", "must", "never",
    "often", "once", "same", "some", "such", "very", "well", "your",
    "every", "also", "still", "even", "here", "does", "being", "its",
    // Everyday vocabulary
    "hello", "world", "people", "house", "water", "earth", "light",
    "night", "morning", "evening", "family", "friend", "children",
    "mother", "father", "young", "great", "little", "small", "large",
    "good", "right", "wrong", "first", "second", "third", "last", "next",
    "time", "year", "years", "place", "work", "life", "hand", "part",
    "thing", "things", "found", "know", "known", "think", "thought",
    "look", "looked", "want", "give", "given", "take", "taken", "come",
    "came", "went", "said", "says", "tell", "told", "free", "full",
    "quick", "brown", "jumps", "jumped", "lazy", "away", "back", "long",
    "today", "together", "something", "nothing", "everything", "anyone",
    "everyone", "another", "around", "along", "always", "almost",
    // Book and document vocabulary
    "book", "books", "chapter", "chapters", "page", "pages", "story",
    "author", "title", "reader", "writing", "written", "words", "word",
    "letter", "letters", "line", "lines", "text", "paragraph",
    "paragraphs", "sentence", "sentences", "document", "documents",
    "number", "numbers", "example", "sample", "simple", "section",
    "content", "contents", "introduction", "conclusion", "beginning",
    "ending", "edition", "volume", "print", "printed", "published",
];

/// Dictionary of correctly-spelled words with fuzzy lookup.
#[derive(Debug, Clone)]
pub struct WordDictionary {
    entries: Vec<String>,
}

impl Default for WordDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl WordDictionary {
    /// Create a dictionary seeded with the built-in word list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: COMMON_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Add a custom entry (stored as given; matching is case-insensitive).
    pub fn add_entry(&mut self, entry: String) {
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Find the best dictionary match for a misspelled word.
    ///
    /// Returns `None` when the word is too short, already a dictionary
    /// entry (case-insensitively), or no entry reaches `threshold`.
    pub fn find_correction(&self, word: &str, threshold: f64) -> Option<String> {
        if word.chars().count() < MIN_WORD_LEN {
            return None;
        }

        if self.entries.iter().any(|e| e.eq_ignore_ascii_case(word)) {
            return None;
        }

        let lowered = word.to_lowercase();
        let mut best_match: Option<(&str, f64)> = None;

        for entry in &self.entries {
            let similarity = jaro_winkler(&lowered, &entry.to_lowercase());
            if similarity >= threshold {
                match best_match {
                    Some((_, best_score)) if similarity <= best_score => {}
                    _ => best_match = Some((entry.as_str(), similarity)),
                }
            }
        }

        best_match.map(|(correction, score)| {
            debug!(
                "spell correction: '{}' -> '{}' (similarity: {:.3})",
                word, correction, score
            );
            match_case(word, correction)
        })
    }

    /// Correct a full text word by word, preserving punctuation and
    /// whitespace. Only alphabetic words are considered.
    #[must_use]
    pub fn correct_text(&self, text: &str, threshold: f64) -> String {
        let mut result = String::with_capacity(text.len());
        let mut current_word = String::new();

        for ch in text.chars() {
            if ch.is_alphanumeric() {
                current_word.push(ch);
            } else {
                self.flush_word(&mut current_word, threshold, &mut result);
                result.push(ch);
            }
        }
        self.flush_word(&mut current_word, threshold, &mut result);

        result
    }

    fn flush_word(&self, word: &mut String, threshold: f64, out: &mut String) {
        if word.is_empty() {
            return;
        }
        let correction = if word.chars().all(char::is_alphabetic) {
            self.find_correction(word, threshold)
        } else {
            None
        };
        match correction {
            Some(corrected) => out.push_str(&corrected),
            None => out.push_str(word),
        }
        word.clear();
    }
}

/// Shape a lowercase dictionary entry to the capitalization of the word
/// it replaces: all-caps stays all-caps, leading capital is kept.
fn match_case(original: &str, correction: &str) -> String {
    let mut chars = original.chars();
    let first_upper = chars.next().is_some_and(char::is_uppercase);
    let rest_upper = chars.clone().any(char::is_alphabetic) && chars.all(char::is_uppercase);

    if first_upper && rest_upper {
        correction.to_uppercase()
    } else if first_upper {
        let mut out = String::with_capacity(correction.len());
        let mut corrected_chars = correction.chars();
        if let Some(first) = corrected_chars.next() {
            out.extend(first.to_uppercase());
        }
        out.push_str(corrected_chars.as_str());
        out
    } else {
        correction.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.92;

    #[test]
    fn test_exact_match_no_correction() {
        let dict = WordDictionary::new();

        assert_eq!(dict.find_correction("hello", THRESHOLD), None);
        assert_eq!(dict.find_correction("Hello", THRESHOLD), None);
        assert_eq!(dict.find_correction("HELLO", THRESHOLD), None);
    }

    #[test]
    fn test_similar_word_correction() {
        let dict = WordDictionary::new();

        assert_eq!(
            dict.find_correction("helo", THRESHOLD),
            Some("hello".to_string())
        );
        assert_eq!(
            dict.find_correction("wrold", THRESHOLD),
            Some("world".to_string())
        );
        assert_eq!(
            dict.find_correction("chaptr", THRESHOLD),
            Some("chapter".to_string())
        );
    }

    #[test]
    fn test_capitalization_is_preserved() {
        let dict = WordDictionary::new();

        assert_eq!(
            dict.find_correction("Helo", THRESHOLD),
            Some("Hello".to_string())
        );
        assert_eq!(
            dict.find_correction("WROLD", THRESHOLD),
            Some("WORLD".to_string())
        );
    }

    #[test]
    fn test_short_words_are_skipped() {
        let dict = WordDictionary::new();

        assert_eq!(dict.find_correction("teh", THRESHOLD), None);
        assert_eq!(dict.find_correction("an", THRESHOLD), None);
    }

    #[test]
    fn test_correct_full_text() {
        let dict = WordDictionary::new();

        assert_eq!(
            dict.correct_text("Helo wrold, this is a test.", THRESHOLD),
            "Hello world, this is a test."
        );
    }

    #[test]
    fn test_preserves_punctuation_and_whitespace() {
        let dict = WordDictionary::new();

        let input = "  Helo,\n\twrold!  ";
        let output = dict.correct_text(input, THRESHOLD);
        assert_eq!(output, "  Hello,\n\tworld!  ");
    }

    #[test]
    fn test_no_false_positives_on_clean_text() {
        let dict = WordDictionary::new();

        let input = "the quick brown fox jumps over the lazy dog";
        assert_eq!(dict.correct_text(input, THRESHOLD), input);
    }

    #[test]
    fn test_words_with_digits_untouched() {
        let dict = WordDictionary::new();

        assert_eq!(dict.correct_text("chap01 wor1d", THRESHOLD), "chap01 wor1d");
    }

    #[test]
    fn test_threshold_filtering() {
        let dict = WordDictionary::new();

        assert_eq!(dict.find_correction("zzzz", THRESHOLD), None);
        assert!(dict.find_correction("wrold", 0.80).is_some());
    }

    #[test]
    fn test_custom_entry() {
        let mut dict = WordDictionary::new();
        dict.add_entry("gutenberg".to_string());

        assert_eq!(
            dict.find_correction("Gutenburg", THRESHOLD),
            Some("Gutenberg".to_string())
        );
    }
}
