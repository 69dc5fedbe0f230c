use std::path::Path;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use kana_core::rules::RuleTable;
use kana_core::unicode::is_kana_reading;
use kana_core::words::{parse_words, SkippedParagraph, Word, WordParseReport};

use super::expand_ops::expand_report;
use super::{load_table, pad_to_width, print_json, read_text, CliError};

#[derive(Debug, Serialize)]
pub struct WordRow {
    #[serde(flatten)]
    pub word: Word,
    pub display: String,
    /// False when the reading holds characters other than kana.
    pub kana_only: bool,
    pub options: usize,
    pub truncated: bool,
}

#[derive(Debug, Serialize)]
pub struct WordsSummary {
    pub words: Vec<WordRow>,
    pub skipped: Vec<SkippedParagraph>,
}

pub fn load_words(file: &Path) -> Result<WordParseReport, CliError> {
    Ok(parse_words(&read_text(file)?))
}

pub fn words_summary(file: &Path, table: &RuleTable) -> Result<WordsSummary, CliError> {
    let WordParseReport { words, skipped } = load_words(file)?;
    let words = words
        .into_iter()
        .map(|word| {
            let report = expand_report(&word.kana, table);
            WordRow {
                display: report.display,
                kana_only: is_kana_reading(&word.kana),
                options: report.options.len(),
                truncated: report.truncated,
                word,
            }
        })
        .collect();
    Ok(WordsSummary { words, skipped })
}

pub fn words_check(file: &str, rules: Option<&str>, json: bool) {
    let (table, _) = die!(load_table(rules.map(Path::new)), "Error: {}");
    let summary = die!(words_summary(Path::new(file), &table), "Error: {}");
    if json {
        die!(print_json(&summary), "Error: {}");
        return;
    }

    let head_width = summary
        .words
        .iter()
        .map(|r| r.word.headword.width())
        .max()
        .unwrap_or(0);
    let kana_width = summary
        .words
        .iter()
        .map(|r| r.word.kana.width())
        .max()
        .unwrap_or(0);
    for row in &summary.words {
        println!(
            "{}  {}  {} ({} options{}{})",
            pad_to_width(&row.word.headword, head_width),
            pad_to_width(&row.word.kana, kana_width),
            row.display,
            row.options,
            if row.truncated { ", truncated" } else { "" },
            if row.kana_only { "" } else { ", non-kana reading" }
        );
    }
    for s in &summary.skipped {
        println!("skipped paragraph at line {}: {}", s.line, s.text);
    }
    println!(
        "{}: {} words, {} skipped",
        if summary.skipped.is_empty() { "OK" } else { "WARN" },
        summary.words.len(),
        summary.skipped.len()
    );
}
