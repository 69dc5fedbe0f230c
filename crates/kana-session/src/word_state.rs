//! Per-word keystroke matching.
//!
//! A word accepts a keystroke only if the typed text stays a prefix of one of
//! its shortest spellings. Longer spellings are listed for display but never
//! credited.

use indexmap::IndexSet;
use tracing::debug;

use kana_core::expand::Expander;
use kana_core::rules::RuleTable;
use kana_core::select::{minimal_subset, pick_representative};

use crate::types::{KeyOutcome, MatchPhase};

#[derive(Debug, Clone)]
pub struct WordTypingState {
    kana: String,
    full_options: IndexSet<String>,
    shortest_options: IndexSet<String>,
    typed: String,
    display: String,
    truncated: bool,
}

impl WordTypingState {
    /// Expand `kana` against `table` and get ready for the first keystroke.
    pub fn start(kana: &str, table: &RuleTable) -> Self {
        let expansion = Expander::new(table).expand(kana);
        let shortest_options = minimal_subset(&expansion.options);
        let shown = pick_representative(&shortest_options, "")
            .unwrap_or_default()
            .to_string();
        debug!(
            kana,
            options = expansion.options.len(),
            shortest = shortest_options.len(),
            shown = %shown,
            "word loaded"
        );
        Self {
            kana: kana.to_string(),
            full_options: expansion.options,
            shortest_options,
            typed: String::new(),
            display: shown,
            truncated: expansion.truncated,
        }
    }

    /// Feed one keystroke. `c` is expected to be normalized already
    /// (see [`kana_core::unicode::normalize_keystroke`]).
    pub fn apply(&mut self, c: char) -> KeyOutcome {
        if self.is_complete() {
            return KeyOutcome::Mismatch;
        }

        let mut candidate = String::with_capacity(self.typed.len() + c.len_utf8());
        candidate.push_str(&self.typed);
        candidate.push(c);

        if !self
            .shortest_options
            .iter()
            .any(|o| o.starts_with(candidate.as_str()))
        {
            return KeyOutcome::Mismatch;
        }

        self.typed = candidate;
        if self.shortest_options.contains(&self.typed) {
            self.display.clone_from(&self.typed);
            KeyOutcome::Complete
        } else {
            if let Some(rep) = pick_representative(&self.shortest_options, &self.typed) {
                self.display = rep.to_string();
            }
            KeyOutcome::Partial
        }
    }

    pub fn phase(&self) -> MatchPhase {
        if self.is_complete() {
            MatchPhase::Complete
        } else if self.typed.is_empty() {
            MatchPhase::Idle
        } else {
            MatchPhase::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.shortest_options.contains(&self.typed)
    }

    pub fn kana(&self) -> &str {
        &self.kana
    }

    /// Every spelling, including the longer ones that are never credited.
    pub fn full_options(&self) -> &IndexSet<String> {
        &self.full_options
    }

    pub fn shortest_options(&self) -> &IndexSet<String> {
        &self.shortest_options
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// The spelling to show: the shortest option consistent with what has
    /// been typed so far.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether expansion hit the combination cap for this word.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

/// Value-passing form of [`WordTypingState::apply`].
pub fn apply_keystroke(mut state: WordTypingState, c: char) -> (WordTypingState, KeyOutcome) {
    let outcome = state.apply(c);
    (state, outcome)
}
