//! Lexicon loading: stopword, positive, and negative word sets.
//!
//! Lexicon files are plain UTF-8 text, one word per line. Words are
//! trimmed and lowercase-normalized on load so they match the lowercase
//! token stream; duplicates collapse under set semantics. Lexicons are
//! loaded once per run and immutable afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::{MetiorError, Result};

/// Loads a single word-set file into a lowercase-normalized set.
///
/// A missing or unreadable file is fatal: the batch cannot score anything
/// without its dictionaries.
pub fn load_word_set(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path).map_err(|source| MetiorError::LexiconError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect())
}

/// Unions multiple stopword files into a single set.
pub fn load_stopword_files(paths: &[PathBuf]) -> Result<HashSet<String>> {
    let mut combined = HashSet::new();
    for path in paths {
        combined.extend(load_word_set(path)?);
    }
    Ok(combined)
}

/// The three word sets the metrics engine scores against.
#[derive(Debug, Clone)]
pub struct Lexicons {
    /// Combined stopword set from all configured stopword files.
    pub stopwords: HashSet<String>,
    /// Positive sentiment words.
    pub positive: HashSet<String>,
    /// Negative sentiment words.
    pub negative: HashSet<String>,
}

impl Lexicons {
    /// Loads all lexicons named by the configuration.
    pub fn load(config: &Config) -> Result<Self> {
        Ok(Self {
            stopwords: load_stopword_files(&config.stopword_files)?,
            positive: load_word_set(&config.positive_words)?,
            negative: load_word_set(&config.negative_words)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lexicon_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_word_set_normalizes_case() {
        let file = lexicon_file("THE\nAnd\nof\n");
        let set = load_word_set(file.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.contains("of"));
    }

    #[test]
    fn test_load_word_set_skips_blank_lines_and_collapses_duplicates() {
        let file = lexicon_file("good\n\ngood\n  great  \n");
        let set = load_word_set(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("great"));
    }

    #[test]
    fn test_load_word_set_missing_file() {
        let result = load_word_set(Path::new("/nonexistent/words.txt"));
        assert!(matches!(result, Err(MetiorError::LexiconError { .. })));
    }

    #[test]
    fn test_load_stopword_files_unions() {
        let first = lexicon_file("a\nb\n");
        let second = lexicon_file("b\nc\n");
        let set =
            load_stopword_files(&[first.path().to_path_buf(), second.path().to_path_buf()]).unwrap();
        assert_eq!(set.len(), 3);
    }
}
