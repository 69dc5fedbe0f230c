use std::path::Path;

use serde::Serialize;

use kana_core::expand::Expander;
use kana_core::rules::RuleTable;
use kana_core::select::{minimal_subset, pick_representative};

use super::{load_table, print_json};

#[derive(Debug, Serialize)]
pub struct ExpandedOption {
    pub romaji: String,
    pub shortest: bool,
}

#[derive(Debug, Serialize)]
pub struct ExpandReport {
    pub kana: String,
    pub display: String,
    pub options: Vec<ExpandedOption>,
    pub truncated: bool,
}

pub fn expand_report(kana: &str, table: &RuleTable) -> ExpandReport {
    let expansion = Expander::new(table).expand(kana);
    let shortest = minimal_subset(&expansion.options);
    let display = pick_representative(&shortest, "")
        .unwrap_or_default()
        .to_string();
    let options = expansion
        .options
        .into_iter()
        .map(|romaji| ExpandedOption {
            shortest: shortest.contains(&romaji),
            romaji,
        })
        .collect();
    ExpandReport {
        kana: kana.to_string(),
        display,
        options,
        truncated: expansion.truncated,
    }
}

pub fn expand_cmd(kana: &str, rules: Option<&str>, json: bool) {
    let (table, _) = die!(load_table(rules.map(Path::new)), "Error: {}");
    let report = expand_report(kana, &table);
    if json {
        die!(print_json(&report), "Error: {}");
        return;
    }

    println!("{} → {}", report.kana, report.display);
    for option in &report.options {
        let mark = if option.shortest { '*' } else { ' ' };
        println!("  {mark} {}", option.romaji);
    }
    let shortest = report.options.iter().filter(|o| o.shortest).count();
    println!("{} options, {} shortest", report.options.len(), shortest);
    if report.truncated {
        println!("(truncated at expand.max_options)");
    }
}
