use kana_core::words::Word;
use serde::Serialize;

/// Input delivered to [`TypingSession::handle_key`](crate::TypingSession::handle_key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    Enter,
    Escape,
}

/// Result of feeding one keystroke to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyOutcome {
    /// Accepted; the word is not finished yet.
    Partial,
    /// Rejected; nothing changed.
    Mismatch,
    /// Accepted and the typed text now equals a shortest spelling.
    Complete,
}

/// Where a word is in its typing lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Idle,
    InProgress,
    Complete,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("word list is empty")]
    NoWords,
}

/// Orthogonal side-effects that accompany a response.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SideEffects {
    pub session_started: bool,
    pub session_ended: bool,
    /// The current word was completed and the next one loaded.
    pub word_advanced: bool,
}

/// Response from `handle_key`, returned to the caller.
#[derive(Debug, Clone)]
pub struct KeyResponse {
    pub consumed: bool,
    /// Set for every keystroke applied to a word.
    pub outcome: Option<KeyOutcome>,
    /// The word that was just finished, when `outcome` is `Complete`.
    pub completed: Option<Word>,
    pub side_effects: SideEffects,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            outcome: None,
            completed: None,
            side_effects: SideEffects::default(),
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}
