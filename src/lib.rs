//! Kana→romaji typing engine.
//!
//! `kana_core` enumerates the romaji spellings of a reading against a rule
//! table; `kana_session` matches keystrokes against them word by word.

pub use kana_core;
pub use kana_session;

pub use kana_core::expand::{expand, Expander, Expansion};
pub use kana_core::rules::RuleTable;
pub use kana_core::words::{parse_words, Word};
pub use kana_session::{
    apply_keystroke, KeyEvent, KeyOutcome, KeyResponse, TypingSession, WordQueue,
    WordTypingState,
};

mod trace_init;
pub use trace_init::{init_tracing, DEFAULT_TRACE_FILTER, TRACE_FILE};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn default_table_drives_a_session() {
        let words = parse_words("寿司\nすし\n").words;
        let table = Arc::new(RuleTable::default_table().clone());
        let mut session = TypingSession::with_queue(WordQueue::in_order(words), table);
        session.start().unwrap();

        let outcomes: Vec<KeyOutcome> = "susi"
            .chars()
            .filter_map(|c| session.handle_key(KeyEvent::Char(c)).outcome)
            .collect();
        assert_eq!(outcomes.last(), Some(&KeyOutcome::Complete));
        assert!(!outcomes.contains(&KeyOutcome::Mismatch));
    }

    #[test]
    fn trace_filter_covers_engine_crates() {
        assert!(TRACE_FILE.ends_with(".jsonl"));
        for target in ["kanatype", "kana_core", "kana_session"] {
            assert!(DEFAULT_TRACE_FILTER.contains(&format!("{target}=debug")));
        }
    }
}
