//! Stateful typing session driving per-word keystroke matching.
//!
//! `TypingSession` owns the word queue and the current word, processes each
//! keystroke, and returns responses the caller turns into scoring and display
//! updates. Scores and timers stay with the caller.

mod key_handlers;
mod queue;
pub mod render;
mod types;
mod word_state;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;

use kana_core::rules::RuleTable;
use kana_core::words::Word;

pub use queue::WordQueue;
pub use render::{classify, CharCell, CharClass};
pub use types::{KeyEvent, KeyOutcome, KeyResponse, MatchPhase, SessionError, SideEffects};
pub use word_state::{apply_keystroke, WordTypingState};

/// The word being typed and its matching state.
#[derive(Debug, Clone)]
pub struct ActiveWord {
    pub word: Word,
    pub typing: WordTypingState,
}

impl ActiveWord {
    /// Display spelling classified against what has been typed.
    pub fn cells(&self) -> Vec<CharCell> {
        classify(self.typing.display(), self.typing.typed())
    }
}

enum SessionState {
    Idle,
    Active(ActiveWord),
    Ended,
}

pub struct TypingSession {
    table: Arc<RuleTable>,
    queue: WordQueue,
    state: SessionState,
}

impl TypingSession {
    /// Create an idle session over `words` with the `[session]` settings.
    pub fn new(words: Vec<Word>, table: Arc<RuleTable>) -> Self {
        Self::with_queue(WordQueue::new(words), table)
    }

    /// Create an idle session with a prepared queue.
    pub fn with_queue(queue: WordQueue, table: Arc<RuleTable>) -> Self {
        Self {
            table,
            queue,
            state: SessionState::Idle,
        }
    }

    /// Begin typing. A session restarted after [`end`](Self::end) goes back
    /// to the first word of the queue.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.is_ended() {
            self.queue.rewind();
        }
        self.load_next()?;
        debug!(words = self.queue.len(), "session started");
        Ok(())
    }

    /// End the session. Returns `true` if it was active.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        if was_active {
            debug!("session ended");
        }
        self.state = SessionState::Ended;
        was_active
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.state, SessionState::Ended)
    }

    pub fn current(&self) -> Option<&ActiveWord> {
        match &self.state {
            SessionState::Active(active) => Some(active),
            SessionState::Idle | SessionState::Ended => None,
        }
    }

    pub fn queue(&self) -> &WordQueue {
        &self.queue
    }

    fn load_next(&mut self) -> Result<(), SessionError> {
        let word = self.queue.next_word().cloned().ok_or(SessionError::NoWords)?;
        let typing = WordTypingState::start(&word.kana, &self.table);
        self.state = SessionState::Active(ActiveWord { word, typing });
        Ok(())
    }
}
