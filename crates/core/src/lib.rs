pub mod config;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod lexicon;
pub mod metrics;
pub mod pipeline;
pub mod readability;
pub mod sentiment;
pub mod source;
pub mod store;
pub mod syllable;
pub mod tokenize;

pub use config::Config;
pub use error::{MetiorError, Result};
pub use extract::{ExtractedArticle, extract_article};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_html};
pub use lexicon::{Lexicons, load_stopword_files, load_word_set};
pub use metrics::{DocumentAnalysis, METRIC_COLUMNS, MetricRecord, analyze_text};
#[cfg(feature = "fetch")]
pub use pipeline::scrape_batch;
pub use pipeline::{AnalyzeSummary, ScrapeSummary, analyze_batch};
pub use readability::{FogMetrics, fog_metrics};
pub use sentiment::{EPSILON, polarity_score, sentiment_scores, subjectivity_score};
pub use source::{SourceDocument, read_documents};
pub use store::TabularStore;
pub use syllable::{SyllableReport, count_complex_words, estimate_syllables, is_complex};
pub use tokenize::{
    average_word_length, clean_tokens, count_cleaned_words, count_personal_pronouns,
    remove_stopwords, strip_punctuation, tokenize,
};
