use std::path::Path;

use serde::Serialize;

use kana_core::rules::{RuleParseReport, SkippedLine};

use super::{load_table, print_json};

#[derive(Debug, Serialize)]
pub struct RulesSummary {
    pub accepted: usize,
    pub fragments: usize,
    pub fragment_lengths: Vec<usize>,
    pub skipped: Vec<SkippedLine>,
}

pub fn rules_summary(file: &Path) -> Result<RulesSummary, super::CliError> {
    let (table, report) = load_table(Some(file))?;
    let RuleParseReport { entries, skipped } = report;
    Ok(RulesSummary {
        accepted: entries.len(),
        fragments: table.len(),
        fragment_lengths: table.fragment_lengths().to_vec(),
        skipped,
    })
}

pub fn rules_check(file: &str, json: bool) {
    let summary = die!(rules_summary(Path::new(file)), "Error: {}");
    if json {
        die!(print_json(&summary), "Error: {}");
        return;
    }

    for s in &summary.skipped {
        println!("line {:>4}: {}  ({})", s.line, s.text, s.reason);
    }
    println!(
        "{}: {} rules, {} fragments (lengths {:?}), {} skipped",
        if summary.skipped.is_empty() { "OK" } else { "WARN" },
        summary.accepted,
        summary.fragments,
        summary.fragment_lengths,
        summary.skipped.len()
    );
}

pub fn rules_export() {
    print!("{}", kana_core::rules::default_rules_text());
}
