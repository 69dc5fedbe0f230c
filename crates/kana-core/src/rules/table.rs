use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, debug_span};

use super::parse::{parse_rules, RuleLine, RuleParseReport};
use super::DEFAULT_RULES;

/// A single spelling of a kana fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEntry {
    pub romaji: String,
    pub kana: String,
    pub next_trigger: Option<String>,
    /// Remainders of longer rules that start with `romaji`, ordered by
    /// (length, text). If the following text starts with one of them the
    /// longer rule was meant, so this entry does not apply.
    pub blocked_prefixes: Vec<String>,
}

impl RuleEntry {
    /// Romaji contributed by this entry. A triggered entry drops its trailing
    /// trigger characters, since the next segment types them.
    pub fn emitted(&self) -> &str {
        match &self.next_trigger {
            Some(trigger) => {
                let keep = self.romaji.len().saturating_sub(trigger.len());
                &self.romaji[..keep]
            }
            None => &self.romaji,
        }
    }

    /// Check whether this entry may precede `suffix`, the romaji of the rest
    /// of the reading. Returns the text to prepend when it may.
    pub fn apply(&self, suffix: &str) -> Option<&str> {
        if let Some(trigger) = &self.next_trigger {
            if !suffix.starts_with(trigger.as_str()) {
                return None;
            }
        }
        if self
            .blocked_prefixes
            .iter()
            .any(|p| suffix.starts_with(p.as_str()))
        {
            return None;
        }
        Some(self.emitted())
    }
}

/// Kana fragment → spelling variants, built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    fragments: BTreeMap<String, Vec<RuleEntry>>,
    /// Distinct fragment lengths in characters, longest first.
    fragment_lengths: Vec<usize>,
}

impl RuleTable {
    /// Build a table from rule text, discarding the parse report.
    pub fn from_text(text: &str) -> Self {
        Self::parse(text).0
    }

    /// Build a table from rule text and return the parse report alongside.
    pub fn parse(text: &str) -> (Self, RuleParseReport) {
        let report = parse_rules(text);
        let table = Self::from_lines(report.entries.iter().cloned());
        (table, report)
    }

    pub fn from_lines(lines: impl IntoIterator<Item = RuleLine>) -> Self {
        let _span = debug_span!("build_rule_table").entered();

        let lines: Vec<RuleLine> = lines.into_iter().collect();
        let blocked = blocked_prefixes(&lines);
        let mut entries: Vec<RuleEntry> = lines
            .into_iter()
            .zip(blocked)
            .map(|(line, blocked_prefixes)| RuleEntry {
                romaji: line.romaji,
                kana: line.kana,
                next_trigger: line.next_trigger,
                blocked_prefixes,
            })
            .collect();

        // Longer kana first, then longer romaji. Stable, so file order breaks ties.
        entries.sort_by(|a, b| {
            b.kana
                .chars()
                .count()
                .cmp(&a.kana.chars().count())
                .then_with(|| b.romaji.len().cmp(&a.romaji.len()))
        });

        let mut fragments: BTreeMap<String, Vec<RuleEntry>> = BTreeMap::new();
        for entry in entries {
            let variants = fragments.entry(entry.kana.clone()).or_default();
            let exists = variants
                .iter()
                .any(|v| v.romaji == entry.romaji && v.next_trigger == entry.next_trigger);
            if !exists {
                variants.push(entry);
            }
        }

        let mut fragment_lengths: Vec<usize> = fragments
            .keys()
            .map(|k| k.chars().count())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        fragment_lengths.sort_unstable_by(|a, b| b.cmp(a));

        debug!(
            fragments = fragments.len(),
            lengths = ?fragment_lengths,
            "rule table built"
        );
        Self {
            fragments,
            fragment_lengths,
        }
    }

    /// Get or build the table for the embedded default rules.
    pub fn default_table() -> &'static RuleTable {
        static INSTANCE: OnceLock<RuleTable> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::from_text(DEFAULT_RULES))
    }

    pub fn get(&self, fragment: &str) -> Option<&[RuleEntry]> {
        self.fragments.get(fragment).map(Vec::as_slice)
    }

    pub fn fragment_lengths(&self) -> &[usize] {
        &self.fragment_lengths
    }

    /// Number of distinct kana fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// All entries, grouped by fragment in code-point order.
    pub fn entries(&self) -> impl Iterator<Item = &RuleEntry> {
        self.fragments.values().flatten()
    }
}

/// For each line, collect the remainders of every longer romaji it prefixes.
fn blocked_prefixes(lines: &[RuleLine]) -> Vec<Vec<String>> {
    // Romaji is ASCII, so every byte index is a char boundary.
    let mut by_prefix: HashMap<&str, HashSet<&str>> = HashMap::new();
    for line in lines {
        let romaji = line.romaji.as_str();
        for end in 1..=romaji.len() {
            by_prefix.entry(&romaji[..end]).or_default().insert(romaji);
        }
    }

    lines
        .iter()
        .map(|line| {
            let own = line.romaji.as_str();
            let mut blocked: Vec<String> = by_prefix
                .get(own)
                .into_iter()
                .flatten()
                .filter(|longer| longer.len() > own.len())
                .map(|longer| longer[own.len()..].to_string())
                .collect();
            blocked.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
            blocked.dedup();
            blocked
        })
        .collect()
}
