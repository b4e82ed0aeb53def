//! Per-document metric computation.
//!
//! [`analyze_text`] ties the tokenizer, lexicons, syllable estimator, and
//! scoring functions together: the text is tokenized once, the
//! stopword-filtered token list is computed once, and every metric is
//! derived from those shared intermediates.

use serde::Serialize;

use crate::lexicon::Lexicons;
use crate::readability::fog_metrics;
use crate::sentiment::{polarity_score, sentiment_scores, subjectivity_score};
use crate::syllable::{SyllableReport, count_complex_words};
use crate::tokenize::{
    average_word_length, count_cleaned_words, count_personal_pronouns, remove_stopwords, tokenize,
};

/// The tabular-store columns, in output order.
pub const METRIC_COLUMNS: [&str; 13] = [
    "WORD COUNT",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// One document's worth of metrics.
///
/// Serde renames carry the exact store column names, case and spacing
/// included, so a serialized record lines up with the table schema.
/// `negative_score` is always ≤ 0 (negated hit count) and
/// `avg_words_per_sentence` always equals `avg_sentence_length`; both
/// quirks are part of the schema contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord {
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: i64,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: i64,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub pct_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub total_syllables: usize,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl MetricRecord {
    /// Column name / rendered value pairs, in [`METRIC_COLUMNS`] order.
    ///
    /// This is what the tabular store writes into a row.
    pub fn fields(&self) -> [(&'static str, String); 13] {
        [
            ("WORD COUNT", self.word_count.to_string()),
            ("POSITIVE SCORE", self.positive_score.to_string()),
            ("NEGATIVE SCORE", self.negative_score.to_string()),
            ("POLARITY SCORE", self.polarity_score.to_string()),
            ("SUBJECTIVITY SCORE", self.subjectivity_score.to_string()),
            ("AVG SENTENCE LENGTH", self.avg_sentence_length.to_string()),
            (
                "PERCENTAGE OF COMPLEX WORDS",
                self.pct_complex_words.to_string(),
            ),
            ("FOG INDEX", self.fog_index.to_string()),
            (
                "AVG NUMBER OF WORDS PER SENTENCE",
                self.avg_words_per_sentence.to_string(),
            ),
            ("COMPLEX WORD COUNT", self.complex_word_count.to_string()),
            ("SYLLABLE PER WORD", self.total_syllables.to_string()),
            ("PERSONAL PRONOUNS", self.personal_pronouns.to_string()),
            ("AVG WORD LENGTH", self.avg_word_length.to_string()),
        ]
    }

    /// The record as a JSON object keyed by column name.
    pub fn to_json(&self) -> serde_json::Value {
        // Serialize on a plain struct cannot fail
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// The full result of analyzing one document.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    /// The thirteen named metrics.
    pub record: MetricRecord,
    /// The auxiliary word → syllable-count artifact.
    pub syllables: SyllableReport,
}

/// Computes every metric for a document.
///
/// Pure function of the text and lexicons: identical input always
/// produces an identical analysis. Degenerate input (empty text, all
/// stopwords) yields zero counts and finite ratios rather than an error.
pub fn analyze_text(text: &str, lexicons: &Lexicons) -> DocumentAnalysis {
    let tokens = tokenize(text);
    let content_tokens = remove_stopwords(&tokens, &lexicons.stopwords);

    let word_count = count_cleaned_words(text, &lexicons.stopwords);

    let syllables = SyllableReport::from_text(text);
    let total_syllables = syllables.total();

    let (positive_score, negative_score) =
        sentiment_scores(&content_tokens, &lexicons.positive, &lexicons.negative);
    let polarity = polarity_score(positive_score, negative_score);
    let subjectivity = subjectivity_score(positive_score, negative_score, content_tokens.len());

    let fog = fog_metrics(text, &lexicons.stopwords);

    let record = MetricRecord {
        word_count,
        positive_score,
        negative_score,
        polarity_score: polarity,
        subjectivity_score: subjectivity,
        avg_sentence_length: fog.avg_sentence_length,
        pct_complex_words: fog.pct_complex_words,
        fog_index: fog.fog_index,
        avg_words_per_sentence: fog.avg_words_per_sentence,
        complex_word_count: count_complex_words(text, &lexicons.stopwords),
        total_syllables,
        personal_pronouns: count_personal_pronouns(text),
        avg_word_length: average_word_length(text),
    };

    DocumentAnalysis { record, syllables }
}
