//! Enumerate every romaji spelling of a kana reading.
//!
//! The reading is segmented against a [`RuleTable`] from its last character
//! back to its first. The set of spellings reachable from a position only
//! depends on the text after it, so each position is solved once per call and
//! kept only while an earlier position can still reach it.

use indexmap::IndexSet;
use tracing::{debug, debug_span, warn};

use crate::rules::RuleTable;
use crate::settings::settings;
use crate::unicode::katakana_to_hiragana;

/// All spellings of one reading, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub options: IndexSet<String>,
    /// Set when some position hit the combination cap and lost its longest
    /// spellings.
    pub truncated: bool,
}

pub struct Expander<'t> {
    table: &'t RuleTable,
    max_options: usize,
}

impl<'t> Expander<'t> {
    /// Create an expander capped at `settings().expand.max_options`.
    pub fn new(table: &'t RuleTable) -> Self {
        Self {
            table,
            max_options: settings().expand.max_options,
        }
    }

    /// Override the per-position combination cap. Zero is treated as one.
    pub fn max_options(mut self, max_options: usize) -> Self {
        self.max_options = max_options.max(1);
        self
    }

    pub fn expand(&self, kana: &str) -> Expansion {
        let _span = debug_span!("expand", kana).entered();

        let folded = katakana_to_hiragana(kana);
        let chars: Vec<char> = folded.chars().collect();
        let mut search = Search {
            table: self.table,
            chars: &chars,
            max_options: self.max_options,
            truncated: false,
        };
        let mut options = search.run();

        if options.is_empty() {
            debug!("no complete spelling, passing reading through");
            options.insert(folded);
        }
        debug!(options = options.len(), truncated = search.truncated);
        Expansion {
            options,
            truncated: search.truncated,
        }
    }
}

/// Expand `kana` with the default combination cap.
///
/// Never returns an empty set: when no spelling covers the whole reading the
/// folded reading itself is the only option.
pub fn expand(kana: &str, table: &RuleTable) -> IndexSet<String> {
    Expander::new(table).expand(kana).options
}

struct Search<'a> {
    table: &'a RuleTable,
    chars: &'a [char],
    max_options: usize,
    truncated: bool,
}

impl<'a> Search<'a> {
    fn run(&mut self) -> IndexSet<String> {
        let n = self.chars.len();
        // A position looks ahead by at most the longest fragment, or by one
        // character when it passes through.
        let reach = self
            .table
            .fragment_lengths()
            .first()
            .copied()
            .unwrap_or(1)
            .max(1);

        let mut memo: Vec<Option<IndexSet<String>>> = vec![None; n + 1];
        memo[n] = Some(IndexSet::from([String::new()]));
        for pos in (0..n).rev() {
            let results = self.at(pos, &memo);
            memo[pos] = Some(results);
            if let Some(stale) = memo.get_mut(pos + reach) {
                *stale = None;
            }
        }
        memo.into_iter().next().flatten().unwrap_or_default()
    }

    /// Spellings of `chars[pos..]`, given the solved positions after `pos`.
    fn at(&mut self, pos: usize, memo: &[Option<IndexSet<String>>]) -> IndexSet<String> {
        let table = self.table;
        let chars = self.chars;
        let mut results = IndexSet::new();
        let mut matched = false;

        for &len in table.fragment_lengths() {
            if pos + len > chars.len() {
                continue;
            }
            let fragment: String = chars[pos..pos + len].iter().collect();
            let Some(variants) = table.get(&fragment) else {
                continue;
            };
            matched = true;

            let Some(suffixes) = memo[pos + len].as_ref() else {
                continue;
            };
            for variant in variants {
                for suffix in suffixes {
                    if let Some(head) = variant.apply(suffix) {
                        let mut option = String::with_capacity(head.len() + suffix.len());
                        option.push_str(head);
                        option.push_str(suffix);
                        results.insert(option);
                    }
                }
            }
        }

        // Only a character no fragment starts with is copied through. A
        // matched position whose variants are all rejected stays empty.
        if !matched {
            if let Some(suffixes) = memo[pos + 1].as_ref() {
                let c = chars[pos];
                for suffix in suffixes {
                    let mut option = String::with_capacity(c.len_utf8() + suffix.len());
                    option.push(c);
                    option.push_str(suffix);
                    results.insert(option);
                }
            }
        }

        self.cap(pos, results)
    }

    /// Keep at most `max_options` spellings, preferring the shortest.
    fn cap(&mut self, pos: usize, results: IndexSet<String>) -> IndexSet<String> {
        if results.len() <= self.max_options {
            return results;
        }
        warn!(
            pos,
            found = results.len(),
            max_options = self.max_options,
            "spelling combinations capped"
        );
        self.truncated = true;
        let mut kept: Vec<String> = results.into_iter().collect();
        kept.sort_by_key(|s| s.chars().count());
        kept.truncate(self.max_options);
        kept.into_iter().collect()
    }
}
