//! The document source: scraped article text files on disk.
//!
//! The analyzer does not care how the articles were obtained; it reads
//! `(identifier, text)` pairs from a directory of `*.txt` files, where the
//! identifier is the file stem. Files that fail to decode as UTF-8 are
//! logged and skipped so one bad download never sinks the batch.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::{MetiorError, Result};

/// One article ready for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// Identifier derived from the file stem; matches `URL_ID` in the store.
    pub id: String,
    /// The raw extracted article text.
    pub text: String,
}

/// Reads every `.txt` file in a directory, in directory-listing order.
///
/// A missing directory is fatal; an undecodable file is a per-document
/// warning and a skip.
pub fn read_documents(dir: &Path) -> Result<Vec<SourceDocument>> {
    if !dir.is_dir() {
        return Err(MetiorError::FileNotFound(dir.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }

        let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        match fs::read(&path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => documents.push(SourceDocument { id: id.to_string(), text }),
                Err(_) => {
                    warn!(document = id, path = %path.display(), "failed to decode, skipping file");
                }
            },
            Err(err) => {
                warn!(document = id, error = %err, "failed to read, skipping file");
            }
        }
    }

    Ok(documents)
}
