//! Error types for metior operations.
//!
//! This module defines the main error type [`MetiorError`] which represents
//! all possible errors that can occur while loading lexicons and
//! configuration, fetching articles, and updating the tabular store.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the metrics pipeline.
///
/// Per-document problems (undecodable article files, unknown identifiers in
/// the store) are recovered inside the batch loop and never surface here;
/// this enum covers the failures that abort a run.
#[derive(Error, Debug)]
pub enum MetiorError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and non-success response statuses.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[cfg(feature = "fetch")]
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[cfg(feature = "fetch")]
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned when a CSS selector is invalid or extraction cannot make
    /// sense of the markup.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// A lexicon file could not be read.
    ///
    /// The batch cannot proceed without its stopword and sentiment
    /// dictionaries, so this is fatal.
    #[error("Failed to read lexicon {path}: {source}")]
    LexiconError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file errors (missing file or invalid YAML).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// CSV errors from the tabular store.
    #[error("Tabular store error: {0}")]
    CsvError(#[from] csv::Error),

    /// The tabular store is missing a required column.
    #[error("Tabular store is missing the {0} column")]
    MissingColumn(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    ///
    /// Wraps standard I/O errors for everything outside lexicon loading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for MetiorError.
///
/// This is a convenience alias for `std::result::Result<T, MetiorError>`.
pub type Result<T> = std::result::Result<T, MetiorError>;
