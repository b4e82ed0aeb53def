//! Run configuration.
//!
//! A single YAML file names every path the pipeline touches: lexicon
//! files, the article and syllable-report directories, the log file, and
//! the tabular store. There are no other runtime options.
//!
//! ```yaml
//! stopword_files:
//!   - dict/stopwords_generic.txt
//!   - dict/stopwords_names.txt
//! positive_words: dict/positive-words.txt
//! negative_words: dict/negative-words.txt
//! articles_dir: out/articles
//! syllables_dir: out/syllables
//! log_dir: out/logs
//! log_file: out/logs/metior.log
//! store_file: data/output.csv
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{MetiorError, Result};

/// Paths for one pipeline run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Stopword lexicon files; their union forms the stopword set.
    pub stopword_files: Vec<PathBuf>,
    /// Positive-word lexicon file.
    pub positive_words: PathBuf,
    /// Negative-word lexicon file.
    pub negative_words: PathBuf,
    /// Directory of scraped article `.txt` files (scrape output, analyze input).
    pub articles_dir: PathBuf,
    /// Directory receiving per-document syllable reports.
    pub syllables_dir: PathBuf,
    /// Directory for log output.
    pub log_dir: PathBuf,
    /// Log file path.
    pub log_file: PathBuf,
    /// The CSV tabular store, keyed by `URL_ID`.
    pub store_file: PathBuf,
}

impl Config {
    /// Loads and parses the YAML configuration file.
    ///
    /// A missing file or invalid YAML is fatal; nothing in the pipeline
    /// can run without its paths.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| {
            MetiorError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            MetiorError::ConfigError(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}
