//! Drive a typing session from a scripted keystroke string.
//!
//! The session itself keeps no score; the counters here are the caller's
//! bookkeeping, the way a game front end would keep them.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use kana_core::rules::RuleTable;
use kana_core::words::Word;
use kana_session::{KeyEvent, KeyOutcome, TypingSession, WordQueue};

use super::words_ops::load_words;
use super::{load_table, print_json, CliError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplayStats {
    /// Keys the session consumed.
    pub keystrokes: usize,
    /// Keys credited as `Partial` or `Complete`.
    pub accepted: usize,
    pub misses: usize,
    pub completed_words: usize,
}

impl ReplayStats {
    pub fn record(&mut self, outcome: KeyOutcome) {
        self.keystrokes += 1;
        match outcome {
            KeyOutcome::Partial => self.accepted += 1,
            KeyOutcome::Complete => {
                self.accepted += 1;
                self.completed_words += 1;
            }
            KeyOutcome::Mismatch => self.misses += 1,
        }
    }

    /// Percentage of keystrokes that were not misses; 100 before any key.
    pub fn accuracy(&self) -> f64 {
        if self.keystrokes == 0 {
            return 100.0;
        }
        (self.keystrokes - self.misses) as f64 / self.keystrokes as f64 * 100.0
    }
}

#[derive(Debug, Serialize)]
pub struct ReplayStep {
    pub key: char,
    pub outcome: KeyOutcome,
    /// Headword being typed when the key arrived.
    pub word: String,
    pub typed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<ReplayStep>,
    pub stats: ReplayStats,
    pub accuracy: f64,
}

pub enum QueueOrder {
    InOrder,
    Seeded(u64),
    Random,
}

pub fn replay(
    words: Vec<Word>,
    table: Arc<RuleTable>,
    keys: &str,
    order: QueueOrder,
) -> Result<ReplayReport, CliError> {
    let queue = match order {
        QueueOrder::InOrder => WordQueue::in_order(words),
        QueueOrder::Seeded(seed) => WordQueue::seeded(words, seed),
        QueueOrder::Random => WordQueue::new(words),
    };
    let mut session = TypingSession::with_queue(queue, table);
    session.start()?;

    let mut stats = ReplayStats::default();
    let mut steps = Vec::new();
    for key in keys.chars() {
        let word = session
            .current()
            .map(|c| c.word.headword.clone())
            .unwrap_or_default();
        let resp = session.handle_key(KeyEvent::Char(key));
        let Some(outcome) = resp.outcome else {
            continue;
        };
        stats.record(outcome);
        steps.push(ReplayStep {
            key,
            outcome,
            word,
            typed: session
                .current()
                .map(|c| c.typing.typed().to_string())
                .unwrap_or_default(),
            completed: resp.completed.map(|w| w.headword),
        });
    }

    Ok(ReplayReport {
        steps,
        accuracy: stats.accuracy(),
        stats,
    })
}

pub struct ReplayArgs<'a> {
    pub words: &'a str,
    pub rules: Option<&'a str>,
    pub keys: &'a str,
    pub seed: Option<u64>,
    pub no_shuffle: bool,
    pub json: bool,
}

pub fn replay_cmd(args: ReplayArgs<'_>) {
    let (table, _) = die!(load_table(args.rules.map(Path::new)), "Error: {}");
    let words = die!(load_words(Path::new(args.words)), "Error: {}").words;
    let order = match (args.no_shuffle, args.seed) {
        (true, _) => QueueOrder::InOrder,
        (false, Some(seed)) => QueueOrder::Seeded(seed),
        (false, None) => QueueOrder::Random,
    };
    let report = die!(
        replay(words, Arc::new(table), args.keys, order),
        "Error: {}"
    );

    if args.json {
        die!(print_json(&report), "Error: {}");
        return;
    }

    for step in &report.steps {
        let outcome = match step.outcome {
            KeyOutcome::Partial => "ok",
            KeyOutcome::Mismatch => "MISS",
            KeyOutcome::Complete => "done",
        };
        match &step.completed {
            Some(done) => println!("{:?} {outcome:<4} {done}", step.key),
            None => println!("{:?} {outcome:<4} {} [{}]", step.key, step.word, step.typed),
        }
    }
    let s = &report.stats;
    println!(
        "keystrokes={} accepted={} misses={} words={} accuracy={:.1}%",
        s.keystrokes, s.accepted, s.misses, s.completed_words, report.accuracy
    );
}
