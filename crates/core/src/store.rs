//! The tabular result store.
//!
//! A CSV table keyed by its `URL_ID` column. The whole table is loaded
//! into memory, rows are updated in place by identifier, and the file is
//! rewritten once at the end of the batch via a temp-file rename so an
//! interrupted run never leaves a truncated table behind. Rows whose
//! identifier is never updated, and columns the pipeline does not know
//! about, pass through untouched.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::metrics::{METRIC_COLUMNS, MetricRecord};
use crate::{MetiorError, Result};

/// Identifier column every store must have.
const ID_COLUMN: &str = "URL_ID";

/// Source-URL column, used by the scraping pass.
const URL_COLUMN: &str = "URL";

/// An in-memory, identifier-indexed CSV table.
#[derive(Debug, Clone)]
pub struct TabularStore {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl TabularStore {
    /// Loads the table, indexing rows by their `URL_ID` value.
    ///
    /// Metric columns missing from the file are appended with empty cells
    /// so updates always have somewhere to land; everything else is kept
    /// exactly as read.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MetiorError::FileNotFound(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
        let mut headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let id_col = headers
            .iter()
            .position(|h| h == ID_COLUMN)
            .ok_or_else(|| MetiorError::MissingColumn(ID_COLUMN.to_string()))?;

        let mut rows = Vec::new();
        let mut index = HashMap::new();
        for record in reader.records() {
            let mut row: Vec<String> = record?.iter().map(str::to_string).collect();
            // short rows are padded so column positions stay valid
            row.resize(headers.len(), String::new());
            if let Some(id) = row.get(id_col) {
                index.insert(id.clone(), rows.len());
            }
            rows.push(row);
        }

        for column in METRIC_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                headers.push(column.to_string());
                for row in &mut rows {
                    row.push(String::new());
                }
            }
        }

        Ok(Self { path: path.to_path_buf(), headers, rows, index })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether an identifier has a row in the table.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Writes a metric record into the row matching `id`.
    ///
    /// Returns false when the identifier has no row; per the pipeline
    /// contract that document's metrics are silently not written.
    pub fn update(&mut self, id: &str, record: &MetricRecord) -> bool {
        let Some(&row_idx) = self.index.get(id) else {
            return false;
        };

        for (column, value) in record.fields() {
            // every metric column exists after load()
            if let Some(col_idx) = self.headers.iter().position(|h| h == column) {
                self.rows[row_idx][col_idx] = value;
            }
        }
        true
    }

    /// `(URL_ID, URL)` pairs for every row that has both cells non-empty.
    ///
    /// Fails when the table has no `URL` column at all.
    pub fn url_entries(&self) -> Result<Vec<(String, String)>> {
        let id_col = self.column(ID_COLUMN).expect("URL_ID checked at load");
        let url_col = self
            .column(URL_COLUMN)
            .ok_or_else(|| MetiorError::MissingColumn(URL_COLUMN.to_string()))?;

        Ok(self
            .rows
            .iter()
            .filter_map(|row| {
                let id = row.get(id_col)?;
                let url = row.get(url_col)?;
                if id.is_empty() || url.is_empty() {
                    None
                } else {
                    Some((id.clone(), url.clone()))
                }
            })
            .collect())
    }

    /// Flushes the table atomically: write a sibling temp file, then rename
    /// it over the original.
    pub fn save(&self) -> Result<()> {
        let tmp_path = self.path.with_extension("csv.tmp");

        let mut writer = csv::Writer::from_path(&tmp_path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
