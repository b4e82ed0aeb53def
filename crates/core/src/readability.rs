//! Gunning Fog readability metrics.
//!
//! Sentences are split on a period followed by optional whitespace; both
//! the sentence count and the word count are floored at 1 so the ratios
//! stay finite on degenerate input.

use std::collections::HashSet;

use regex::Regex;

use crate::syllable::count_complex_words;
use crate::tokenize::tokenize;

/// Sentence boundary: a period and any following whitespace.
const SENTENCE_PATTERN: &str = r"\.\s*";

/// The four Fog-related outputs.
///
/// `avg_words_per_sentence` always equals `avg_sentence_length`; the
/// output table stores them under two different column names, so both are
/// kept as separate fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogMetrics {
    /// Words per sentence.
    pub avg_sentence_length: f64,
    /// Fraction of words that are complex (0.0 to 1.0).
    pub pct_complex_words: f64,
    /// `0.4 * (avg_sentence_length + pct_complex_words)`.
    pub fog_index: f64,
    /// Duplicate of `avg_sentence_length` under its own column name.
    pub avg_words_per_sentence: f64,
}

/// Computes the Fog metrics for a text.
pub fn fog_metrics(text: &str, stopwords: &HashSet<String>) -> FogMetrics {
    let sentence_regex = Regex::new(SENTENCE_PATTERN).unwrap();
    let num_sentences = sentence_regex.split(text).count().max(1);

    let num_words = tokenize(text).len().max(1);
    let num_complex = count_complex_words(text, stopwords);

    let avg_sentence_length = num_words as f64 / num_sentences as f64;
    let pct_complex_words = num_complex as f64 / num_words as f64;
    let fog_index = 0.4 * (avg_sentence_length + pct_complex_words);

    FogMetrics {
        avg_sentence_length,
        pct_complex_words,
        fog_index,
        avg_words_per_sentence: avg_sentence_length,
    }
}
