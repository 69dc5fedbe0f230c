
use std::sync::Arc;

use kana_core::rules::RuleTable;
use kana_core::words::Word;

use super::{KeyEvent, KeyResponse, TypingSession, WordQueue};

pub(super) const TEST_RULES: &str = "\
a あ
i い
u う
si し
shi し
ci し
ka か
ku く
sa さ
ki き
kya きゃ
xya ゃ
n ん
nn ん
na な
kk っ k
xtu っ
";

pub(super) fn make_test_table() -> Arc<RuleTable> {
    Arc::new(RuleTable::from_text(TEST_RULES))
}

pub(super) fn word(headword: &str, kana: &str) -> Word {
    Word {
        headword: headword.to_string(),
        kana: kana.to_string(),
    }
}

pub(super) fn make_test_words() -> Vec<Word> {
    vec![
        word("愛", "あい"),
        word("詩", "し"),
        word("カナ", "かな"),
        word("客", "きゃく"),
        word("作家", "さっか"),
    ]
}

/// Idle session over `words` in list order.
pub(super) fn make_session(words: Vec<Word>) -> TypingSession {
    TypingSession::with_queue(WordQueue::in_order(words), make_test_table())
}

pub(super) fn type_string(session: &mut TypingSession, s: &str) -> Vec<KeyResponse> {
    s.chars()
        .map(|ch| session.handle_key(KeyEvent::Char(ch)))
        .collect()
}
