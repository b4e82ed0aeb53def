//! Sentiment scoring: positive/negative hit counts, polarity, subjectivity.
//!
//! The negative score is stored *negated* (always ≤ 0), and the polarity
//! and subjectivity formulas consume it as-is. That diverges from the
//! textbook versions, which expect two non-negative scores; the convention
//! is preserved verbatim because the output schema depends on it, and the
//! tests below pin the divergent values.

use std::collections::HashSet;

/// Additive epsilon protecting every score denominator from zero.
pub const EPSILON: f64 = 1e-6;

/// Counts sentiment hits over a token sequence.
///
/// Returns `(positive, negative)` where positive is the number of tokens in
/// the positive set and negative is the *negated* number of tokens in the
/// negative set.
pub fn sentiment_scores(
    tokens: &[String],
    positive_words: &HashSet<String>,
    negative_words: &HashSet<String>,
) -> (i64, i64) {
    let positive = tokens
        .iter()
        .filter(|token| positive_words.contains(token.as_str()))
        .count() as i64;
    let negative = tokens
        .iter()
        .filter(|token| negative_words.contains(token.as_str()))
        .count() as i64;

    (positive, -negative)
}

/// Polarity: `(pos - neg) / (pos + neg + ε)`.
///
/// `neg` is already non-positive, so the numerator adds the raw hit counts
/// while the denominator subtracts them.
pub fn polarity_score(positive: i64, negative: i64) -> f64 {
    let pos = positive as f64;
    let neg = negative as f64;
    (pos - neg) / (pos + neg + EPSILON)
}

/// Subjectivity: `(pos + neg) / (total_words + ε)`.
pub fn subjectivity_score(positive: i64, negative: i64, total_words: usize) -> f64 {
    (positive as f64 + negative as f64) / (total_words as f64 + EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_sentiment_scores_sign_convention() {
        let positive = word_set(&["good", "great"]);
        let negative = word_set(&["bad", "awful"]);
        let toks = tokens(&["good", "bad", "awful", "neutral", "great", "good"]);

        let (pos, neg) = sentiment_scores(&toks, &positive, &negative);
        assert_eq!(pos, 3);
        assert_eq!(neg, -2);
    }

    #[test]
    fn test_sentiment_scores_empty() {
        let (pos, neg) = sentiment_scores(&[], &word_set(&["good"]), &word_set(&["bad"]));
        assert_eq!((pos, neg), (0, 0));
    }

    // The negated-negative convention makes these values diverge from the
    // textbook formula ((3-2)/(3+2)); pinned here, not "fixed".
    #[test]
    fn test_polarity_preserves_negated_convention() {
        let value = polarity_score(3, -2);
        assert!((value - 4.999995).abs() < 1e-5, "got {}", value);
    }

    #[test]
    fn test_polarity_zero_scores() {
        assert_eq!(polarity_score(0, 0), 0.0);
    }

    #[test]
    fn test_subjectivity_zero_everything() {
        // 0 / ε must be exactly zero, not an error
        assert_eq!(subjectivity_score(0, 0, 0), 0.0);
    }

    #[test]
    fn test_subjectivity_negative_hits_reduce_score() {
        let value = subjectivity_score(3, -2, 10);
        assert!((value - 0.1).abs() < 1e-6, "got {}", value);
    }
}
