//! Syllable estimation and complex-word detection.
//!
//! The estimator is a vowel-group heuristic with one policy layered on
//! top: a single trailing "es" or "ed" suffix is stripped before
//! estimating, which counteracts the heuristic's habit of over-counting
//! those inflections. A word with more than two estimated syllables that
//! is not a stopword counts as complex for the Fog index.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::Result;
use crate::tokenize::tokenize;

/// Counts vowel groups in an already-lowercased word.
///
/// Consecutive vowels (including `y`) count as one group. A silent
/// trailing `e` is discounted unless the word ends in `-le` or the `e`
/// is the only vowel.
fn vowel_groups(word: &str) -> usize {
    let mut groups = 0;
    let mut in_group = false;

    for c in word.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !in_group {
            groups += 1;
        }
        in_group = is_vowel;
    }

    if word.ends_with('e') && !word.ends_with("le") && groups > 1 {
        groups -= 1;
    }

    groups
}

/// Estimates the syllable count of a word.
///
/// Strips one trailing "es" or "ed" suffix before running the vowel-group
/// heuristic, so "boxes" is estimated on "box" and "jumped" on "jump".
/// Returns at least 1 for any non-empty word and 0 for the empty string.
pub fn estimate_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let lowered = word.to_lowercase();
    let stem = lowered
        .strip_suffix("es")
        .or_else(|| lowered.strip_suffix("ed"))
        .unwrap_or(&lowered);

    vowel_groups(stem).max(1)
}

/// Tests whether a word is complex: more than two estimated syllables and
/// not a stopword. Membership uses the raw token, not a stripped form.
pub fn is_complex(word: &str, stopwords: &HashSet<String>) -> bool {
    estimate_syllables(word) > 2 && !stopwords.contains(word)
}

/// Counts complex words in a text.
pub fn count_complex_words(text: &str, stopwords: &HashSet<String>) -> usize {
    tokenize(text)
        .iter()
        .filter(|word| is_complex(word, stopwords))
        .count()
}

/// Per-document word → syllable-count mapping.
///
/// Entries keep the insertion order of each word's first occurrence, with
/// duplicate tokens collapsed to a single entry. Persisted as an auxiliary
/// artifact (`word: count` lines), independent of the metric record.
#[derive(Debug, Clone, Default)]
pub struct SyllableReport {
    entries: Vec<(String, usize)>,
}

impl SyllableReport {
    /// Builds the report for a text by estimating every distinct token.
    pub fn from_text(text: &str) -> Self {
        let mut entries = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for word in tokenize(text) {
            if !counts.contains_key(&word) {
                let count = estimate_syllables(&word);
                counts.insert(word.clone(), count);
                entries.push((word, count));
            }
        }

        Self { entries }
    }

    /// The `(word, count)` entries in first-occurrence order.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Total syllables over distinct words; the `SYLLABLE PER WORD` column.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Writes the report artifact to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for SyllableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, count) in &self.entries {
            writeln!(f, "{}: {}", word, count)?;
        }
        Ok(())
    }
}
