/// Keyword extraction for lexical matching.
///
/// Lowercases the text, splits it into word tokens and drops stop-words and
/// tokens of two characters or fewer.
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Articles
        "the", "a", "an",
        // Conjunctions
        "and", "or", "but",
        // Prepositions
        "in", "on", "at", "to", "for", "of", "with", "by",
        // Auxiliary and modal verbs
        "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
        "will", "would", "could", "should", "may", "might", "can",
        // Demonstratives and pronouns
        "this", "that", "these", "those", "we", "our", "us", "they", "them", "their",
    ]
    .into_iter()
    .collect()
});

/// Minimum token length, in characters, for a token to count as a keyword.
const MIN_KEYWORD_CHARS: usize = 3;

/// Extract keywords from free text, preserving their order of appearance.
///
/// Duplicates are kept; each occurrence weighs into the lexical average.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !is_stop_word(word) && word.chars().count() >= MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Lowercased word tokens with no filtering, used by token-based similarity.
pub(crate) fn word_tokens(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_stop_words_short_tokens_and_punctuation() {
        let keywords = extract_keywords("Our support agents are overwhelmed by repetitive questions!");
        assert_eq!(
            keywords,
            vec!["support", "agents", "overwhelmed", "repetitive", "questions"]
        );
    }

    #[test]
    fn stop_word_only_input_is_empty() {
        assert!(extract_keywords("the a an").is_empty());
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("  ,.;  ").is_empty());
    }

    #[test]
    fn keeps_order_and_duplicates() {
        assert_eq!(
            extract_keywords("Data entry, manual data entry"),
            vec!["data", "entry", "manual", "data", "entry"]
        );
    }

    #[test]
    fn hyphenated_words_split() {
        assert_eq!(extract_keywords("open-ended e-commerce"), vec!["open", "ended", "commerce"]);
    }

    #[test]
    fn non_ascii_length_counts_characters() {
        // Three characters, five bytes.
        assert_eq!(extract_keywords("été"), vec!["été"]);
    }

    #[test]
    fn stop_word_table_size() {
        assert_eq!(STOP_WORDS.len(), 43);
        assert!(is_stop_word("their"));
        assert!(!is_stop_word("support"));
    }
}
