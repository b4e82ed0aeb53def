//! Library API integration tests
use std::fs;
use std::path::Path;

use metior_core::*;
use tempfile::TempDir;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

/// Copies the fixture workspace into a tempdir so batches can mutate it.
fn fixture_workspace() -> (TempDir, Config) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    for name in ["stopwords.txt", "positive-words.txt", "negative-words.txt", "store.csv"] {
        fs::copy(get_fixture_path(name), root.join(name)).unwrap();
    }
    fs::create_dir_all(root.join("articles")).unwrap();
    fs::copy(
        get_fixture_path("articles/blackassign0001.txt"),
        root.join("articles/blackassign0001.txt"),
    )
    .unwrap();

    let config = Config {
        stopword_files: vec![root.join("stopwords.txt")],
        positive_words: root.join("positive-words.txt"),
        negative_words: root.join("negative-words.txt"),
        articles_dir: root.join("articles"),
        syllables_dir: root.join("syllables"),
        log_dir: root.join("logs"),
        log_file: root.join("logs/metior.log"),
        store_file: root.join("store.csv"),
    };

    (dir, config)
}

#[test]
fn test_analyze_batch_updates_fixture_store() {
    let (_dir, config) = fixture_workspace();
    let lexicons = Lexicons::load(&config).unwrap();

    let summary = analyze_batch(&config, &lexicons).unwrap();
    assert_eq!(summary.documents, 1);
    assert_eq!(summary.updated, 1);

    let store = fs::read_to_string(&config.store_file).unwrap();
    assert!(store.contains("WORD COUNT"));
    assert!(store.contains("FOG INDEX"));
    // the second fixture row has no article and keeps its empty cells
    assert!(store.contains("blackassign0002"));
}

#[test]
fn test_analyze_batch_writes_syllable_artifact() {
    let (_dir, config) = fixture_workspace();
    let lexicons = Lexicons::load(&config).unwrap();
    analyze_batch(&config, &lexicons).unwrap();

    let artifact = config
        .syllables_dir
        .join("syllable_counts_blackassign0001.txt");
    assert!(artifact.exists());

    let lines = fs::read_to_string(&artifact).unwrap();
    // every line is "word: count"
    for line in lines.lines() {
        let (word, count) = line.split_once(": ").expect("malformed report line");
        assert!(!word.is_empty());
        assert!(count.parse::<usize>().unwrap() >= 1);
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let (_dir, config) = fixture_workspace();
    let lexicons = Lexicons::load(&config).unwrap();

    analyze_batch(&config, &lexicons).unwrap();
    let first = fs::read_to_string(&config.store_file).unwrap();

    analyze_batch(&config, &lexicons).unwrap();
    let second = fs::read_to_string(&config.store_file).unwrap();

    assert_eq!(first, second, "re-running the batch must not change the store");
}

#[test]
fn test_analyze_text_against_fixture_lexicons() {
    let (_dir, config) = fixture_workspace();
    let lexicons = Lexicons::load(&config).unwrap();

    let text = fs::read_to_string(config.articles_dir.join("blackassign0001.txt")).unwrap();
    let analysis = analyze_text(&text, &lexicons);
    let record = &analysis.record;

    assert!(record.word_count > 0);
    assert!(record.positive_score >= 0);
    assert!(record.negative_score <= 0);
    assert!(record.polarity_score.is_finite());
    assert!(record.subjectivity_score.is_finite());
    assert!(record.fog_index.is_finite());
    assert_eq!(record.avg_sentence_length, record.avg_words_per_sentence);
    assert_eq!(record.total_syllables, analysis.syllables.total());
}

#[test]
fn test_all_stopword_document_scores_zero() {
    let (_dir, config) = fixture_workspace();
    let lexicons = Lexicons::load(&config).unwrap();

    let analysis = analyze_text("The and of is a the.", &lexicons);
    assert_eq!(analysis.record.positive_score, 0);
    assert_eq!(analysis.record.negative_score, 0);
    assert_eq!(analysis.record.polarity_score, 0.0);
    assert_eq!(analysis.record.subjectivity_score, 0.0);
}

#[test]
fn test_extract_article_fixture() {
    let html = fs::read_to_string(get_fixture_path("article.html")).unwrap();
    let article = extract_article(&html).unwrap();

    assert_eq!(article.title, "Rise of Text Analytics");
    assert!(article.body.contains("automated pipelines"));
    assert!(article.body.contains("  - sentiment scoring"));
    assert!(!article.body.contains("All rights reserved"));

    let rendered = article.to_text();
    assert!(rendered.starts_with("Title: Rise of Text Analytics\n\n"));
}

#[test]
fn test_store_load_from_fixture() {
    let store = TabularStore::load(Path::new(&get_fixture_path("store.csv"))).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.contains("blackassign0001"));

    let entries = store.url_entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].0, "blackassign0001");
}
