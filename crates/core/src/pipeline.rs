//! Batch orchestration: scrape articles, then analyze them.
//!
//! Both passes are strictly sequential and share the same recovery rule:
//! a failure scoped to one document or URL is logged with its identifier
//! and skipped, while anything the whole batch depends on (lexicons,
//! configuration, the tabular store) aborts the run. Metric updates are
//! accumulated in memory and flushed to the store once at the end;
//! syllable reports are written incrementally as each document finishes.

use std::fs;

use tracing::{debug, info, warn};

use crate::Result;
use crate::config::Config;
use crate::lexicon::Lexicons;
use crate::metrics::analyze_text;
use crate::source::read_documents;
use crate::store::TabularStore;

#[cfg(feature = "fetch")]
use crate::extract::extract_article;
#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_html};
#[cfg(feature = "fetch")]
use tracing::error;

/// Outcome of an analysis batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeSummary {
    /// Documents read and analyzed.
    pub documents: usize,
    /// Store rows actually updated (documents whose id matched a row).
    pub updated: usize,
}

/// Outcome of a scraping batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// URL entries found in the store.
    pub total: usize,
    /// Articles fetched, extracted, and written to disk.
    pub saved: usize,
    /// URLs that failed to fetch or extract.
    pub failed: usize,
}

/// Analyzes every article in the configured directory and flushes the
/// metric records into the tabular store.
///
/// Documents whose identifier has no store row still get their syllable
/// report; their metrics are silently not written.
pub fn analyze_batch(config: &Config, lexicons: &Lexicons) -> Result<AnalyzeSummary> {
    fs::create_dir_all(&config.syllables_dir)?;

    let documents = read_documents(&config.articles_dir)?;
    let mut store = TabularStore::load(&config.store_file)?;
    info!(documents = documents.len(), rows = store.len(), "starting analysis batch");

    let mut updated = 0;
    for doc in &documents {
        let analysis = analyze_text(&doc.text, lexicons);
        let record = &analysis.record;

        let report_path = config
            .syllables_dir
            .join(format!("syllable_counts_{}.txt", doc.id));
        if let Err(err) = analysis.syllables.save(&report_path) {
            warn!(document = %doc.id, error = %err, "failed to write syllable report");
        }

        info!(
            document = %doc.id,
            word_count = record.word_count,
            positive_score = record.positive_score,
            negative_score = record.negative_score,
            polarity = record.polarity_score,
            subjectivity = record.subjectivity_score,
            fog_index = record.fog_index,
            complex_words = record.complex_word_count,
            syllables = record.total_syllables,
            pronouns = record.personal_pronouns,
            avg_word_length = record.avg_word_length,
            "document analyzed"
        );

        if store.update(&doc.id, record) {
            updated += 1;
        } else {
            debug!(document = %doc.id, "identifier not in store, metrics not written");
        }
    }

    store.save()?;
    info!(updated, "analysis batch complete, store flushed");

    Ok(AnalyzeSummary { documents: documents.len(), updated })
}

/// Fetches and extracts every article listed in the store's `URL` column,
/// writing one `{URL_ID}.txt` file per article.
#[cfg(feature = "fetch")]
pub async fn scrape_batch(config: &Config, fetch_config: &FetchConfig) -> Result<ScrapeSummary> {
    fs::create_dir_all(&config.articles_dir)?;

    let store = TabularStore::load(&config.store_file)?;
    let entries = store.url_entries()?;
    info!(urls = entries.len(), "starting scrape batch");

    let mut saved = 0;
    let mut failed = 0;
    for (id, url) in &entries {
        let html = match fetch_html(url, fetch_config).await {
            Ok(html) => html,
            Err(err) => {
                error!(document = %id, url = %url, error = %err, "fetch failed");
                failed += 1;
                continue;
            }
        };

        let article = match extract_article(&html) {
            Ok(article) => article,
            Err(err) => {
                error!(document = %id, error = %err, "extraction failed");
                failed += 1;
                continue;
            }
        };

        let path = config.articles_dir.join(format!("{}.txt", id));
        match fs::write(&path, article.to_text()) {
            Ok(()) => {
                info!(document = %id, path = %path.display(), "article saved");
                saved += 1;
            }
            Err(err) => {
                error!(document = %id, error = %err, "failed to write article");
                failed += 1;
            }
        }
    }

    Ok(ScrapeSummary { total: entries.len(), saved, failed })
}
