use tracing::{debug, debug_span, warn};

use kana_core::unicode::normalize_keystroke;

use super::types::{KeyEvent, KeyOutcome, KeyResponse};
use super::{SessionState, TypingSession};

impl TypingSession {
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        let active = self.is_active();
        let resp = match event {
            KeyEvent::Char(c) if active => self.handle_char(c),
            KeyEvent::Escape if active => self.handle_escape(),
            KeyEvent::Enter | KeyEvent::Char(' ') if !active => self.handle_start(),
            _ => KeyResponse::not_consumed(),
        };

        debug!(consumed = resp.consumed, outcome = ?resp.outcome);
        resp
    }

    fn handle_char(&mut self, c: char) -> KeyResponse {
        let Some(c) = normalize_keystroke(c) else {
            return KeyResponse::not_consumed();
        };
        let SessionState::Active(current) = &mut self.state else {
            return KeyResponse::not_consumed();
        };

        let outcome = current.typing.apply(c);
        let mut resp = KeyResponse::consumed();
        resp.outcome = Some(outcome);

        if outcome == KeyOutcome::Complete {
            resp.completed = Some(current.word.clone());
            // The queue held this word, so it cannot be empty now.
            if self.load_next().is_ok() {
                resp.side_effects.word_advanced = true;
            } else {
                self.state = SessionState::Ended;
                resp.side_effects.session_ended = true;
            }
        }
        resp
    }

    fn handle_escape(&mut self) -> KeyResponse {
        let mut resp = KeyResponse::consumed();
        resp.side_effects.session_ended = self.end();
        resp
    }

    fn handle_start(&mut self) -> KeyResponse {
        match self.start() {
            Ok(()) => {
                let mut resp = KeyResponse::consumed();
                resp.side_effects.session_started = true;
                resp
            }
            Err(e) => {
                warn!(error = %e, "cannot start session");
                KeyResponse::not_consumed()
            }
        }
    }
}
