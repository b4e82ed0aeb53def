//! Word tokenization and token filtering.
//!
//! The tokenizer is the root of every metric: it lowercases the input and
//! extracts `\b\w+\b` runs, so punctuation never becomes part of a token.
//! Filtering helpers build on it for stopword removal, punctuation
//! stripping, pronoun counting, and average word length.

use std::collections::HashSet;

use regex::Regex;

/// Pattern for word tokens: runs of word characters bounded by word boundaries.
const WORD_PATTERN: &str = r"\b\w+\b";

/// Pattern for first-person pronouns, matched case-insensitively on whole words.
const PRONOUN_PATTERN: &str = r"(?i)\b(i|we|my|ours|us)\b";

/// Splits raw text into lowercase word tokens.
///
/// Pure and deterministic: the same text always yields the same token
/// sequence, in document order. Empty or whitespace-only text yields an
/// empty vector.
///
/// # Example
///
/// ```rust
/// use metior_core::tokenize::tokenize;
///
/// assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let word_regex = Regex::new(WORD_PATTERN).unwrap();
    let lowered = text.to_lowercase();

    word_regex
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Strips leading and trailing ASCII punctuation from a word.
///
/// Interior punctuation is left alone; a punctuation-only word collapses
/// to the empty string.
pub fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Drops tokens present in the stopword set.
///
/// Membership is tested on the raw token, without punctuation stripping.
pub fn remove_stopwords(tokens: &[String], stopwords: &HashSet<String>) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| !stopwords.contains(token.as_str()))
        .cloned()
        .collect()
}

/// Strips punctuation from each token, then drops stopwords.
///
/// The punctuation-stripped value is what gets tested against the stopword
/// set and what is kept in the result.
pub fn clean_tokens(tokens: &[String], stopwords: &HashSet<String>) -> Vec<String> {
    tokens
        .iter()
        .map(|token| strip_punctuation(token))
        .filter(|token| !stopwords.contains(*token))
        .map(str::to_string)
        .collect()
}

/// Counts content-bearing words: tokenize, strip punctuation, drop stopwords.
///
/// This is the `WORD COUNT` column of the output record.
pub fn count_cleaned_words(text: &str, stopwords: &HashSet<String>) -> usize {
    clean_tokens(&tokenize(text), stopwords).len()
}

/// Counts first-person pronouns in the raw text.
///
/// Whole-word, case-insensitive matches against {i, we, my, ours, us};
/// substrings inside longer words ("us" in "discuss") do not count.
pub fn count_personal_pronouns(text: &str) -> usize {
    let pronoun_regex = Regex::new(PRONOUN_PATTERN).unwrap();
    pronoun_regex.find_iter(text).count()
}

/// Mean character length over tokens.
///
/// Returns 0.0 for a document with no tokens.
pub fn average_word_length(text: &str) -> f64 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let total_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
    total_chars as f64 / tokens.len() as f64
}
