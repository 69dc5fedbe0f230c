use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use kana_cli::commands::config_ops::load_settings;
use kana_cli::commands::expand_ops::expand_report;
use kana_cli::commands::replay_ops::{replay, QueueOrder};
use kana_cli::commands::rules_ops::rules_summary;
use kana_cli::commands::words_ops::{load_words, words_summary};
use kana_cli::commands::{load_table, CliError};
use kana_core::rules::{RuleTable, SkipReason};
use kana_session::KeyOutcome;

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn default_table() -> Arc<RuleTable> {
    Arc::new(load_table(None).unwrap().0)
}

// --- rules ---

#[test]
fn test_rules_summary_reports_skipped_lines() {
    let file = write_temp("# test rules\na あ\nbad\nkk っ k extra\ni い\n");
    let summary = rules_summary(file.path()).unwrap();
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.fragments, 2);
    assert_eq!(summary.fragment_lengths, vec![1]);

    let lines: Vec<usize> = summary.skipped.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![3, 4]);
    assert_eq!(summary.skipped[0].reason, SkipReason::MissingKana);
    assert_eq!(summary.skipped[1].reason, SkipReason::TrailingTokens(4));
}

#[test]
fn test_load_table_from_file() {
    let file = write_temp("si し\nshi し\n");
    let (table, report) = load_table(Some(file.path())).unwrap();
    assert!(report.is_clean());
    assert_eq!(table.get("し").unwrap().len(), 2);
}

#[test]
fn test_missing_rules_file() {
    let err = load_table(Some(Path::new("/nonexistent/kana/rules.txt"))).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
}

// --- expand ---

#[test]
fn test_expand_report_marks_shortest() {
    let table = default_table();
    let report = expand_report("し", &table);
    assert_eq!(report.display, "si");
    assert!(!report.truncated);

    let shi = report.options.iter().find(|o| o.romaji == "shi").unwrap();
    assert!(!shi.shortest);
    let si = report.options.iter().find(|o| o.romaji == "si").unwrap();
    assert!(si.shortest);
}

#[test]
fn test_expand_report_serializes() {
    let table = default_table();
    let report = expand_report("あ", &table);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["kana"], "あ");
    assert_eq!(json["display"], "a");
    assert_eq!(json["options"][0]["shortest"], true);
}

// --- words ---

#[test]
fn test_words_summary() {
    let file = write_temp("猫\nねこ\n\nひとり\n\n寿司\nすし\n");
    let summary = words_summary(file.path(), &default_table()).unwrap();
    assert_eq!(summary.words.len(), 2);
    assert_eq!(summary.words[0].word.headword, "猫");
    assert_eq!(summary.words[0].display, "neko");
    assert!(summary.words[0].kana_only);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].line, 4);
}

#[test]
fn test_words_summary_flags_non_kana_reading() {
    let file = write_temp("東京\n東京\n");
    let summary = words_summary(file.path(), &default_table()).unwrap();
    assert!(!summary.words[0].kana_only);
    assert_eq!(summary.words[0].display, "東京");
}

// --- settings ---

#[test]
fn test_load_settings_valid() {
    let file = write_temp(
        "[expand]\nmax_options = 32\n\n[session]\nshuffle_words = false\n",
    );
    let s = load_settings(file.path()).unwrap();
    assert_eq!(s.expand.max_options, 32);
    assert!(!s.session.shuffle_words);
}

#[test]
fn test_load_settings_invalid_value() {
    let file = write_temp("[expand]\nmax_options = 0\n\n[session]\nshuffle_words = true\n");
    let err = load_settings(file.path()).unwrap_err();
    assert!(matches!(err, CliError::Settings(_)));
    assert!(err.to_string().contains("expand.max_options"));
}

// --- replay ---

fn two_words() -> Vec<kana_core::words::Word> {
    let file = write_temp("愛\nあい\n\n詩\nし\n");
    load_words(file.path()).unwrap().words
}

#[test]
fn test_replay_counts() {
    let report = replay(two_words(), default_table(), "aixsi", QueueOrder::InOrder).unwrap();
    let outcomes: Vec<KeyOutcome> = report.steps.iter().map(|s| s.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            KeyOutcome::Partial,
            KeyOutcome::Complete,
            KeyOutcome::Mismatch,
            KeyOutcome::Partial,
            KeyOutcome::Complete,
        ]
    );
    assert_eq!(report.steps[1].completed.as_deref(), Some("愛"));
    assert_eq!(report.steps[2].word, "詩");

    let s = report.stats;
    assert_eq!(s.keystrokes, 5);
    assert_eq!(s.accepted, 4);
    assert_eq!(s.misses, 1);
    assert_eq!(s.completed_words, 2);
    assert!((report.accuracy - 80.0).abs() < 1e-9);
}

#[test]
fn test_replay_skips_unconsumed_keys() {
    let report = replay(two_words(), default_table(), "a\u{7}i", QueueOrder::InOrder).unwrap();
    assert_eq!(report.steps.len(), 2);
    assert_eq!(report.stats.keystrokes, 2);
}

#[test]
fn test_replay_without_keys_is_perfect() {
    let report = replay(two_words(), default_table(), "", QueueOrder::InOrder).unwrap();
    assert!(report.steps.is_empty());
    assert_eq!(report.accuracy, 100.0);
}

#[test]
fn test_replay_seed_is_reproducible() {
    let words = || {
        let file = write_temp("一\nいち\n\n二\nに\n\n三\nさん\n\n四\nよん\n");
        load_words(file.path()).unwrap().words
    };
    let a = replay(words(), default_table(), "xxxx", QueueOrder::Seeded(9)).unwrap();
    let b = replay(words(), default_table(), "xxxx", QueueOrder::Seeded(9)).unwrap();
    let word_of = |r: &kana_cli::commands::replay_ops::ReplayReport| {
        r.steps.iter().map(|s| s.word.clone()).collect::<Vec<_>>()
    };
    assert_eq!(word_of(&a), word_of(&b));
}

#[test]
fn test_replay_with_no_words_fails() {
    let err = replay(Vec::new(), default_table(), "a", QueueOrder::InOrder).unwrap_err();
    assert!(matches!(err, CliError::Session(_)));
}
