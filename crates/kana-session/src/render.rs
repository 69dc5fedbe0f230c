//! Per-character classification of the target spelling for display.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CharClass {
    Correct,
    Incorrect,
    /// The next character to type.
    Cursor,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharCell {
    pub ch: char,
    pub class: CharClass,
}

/// Classify each character of `target` against the `typed` prefix.
///
/// Typed characters past the end of `target` are not represented.
pub fn classify(target: &str, typed: &str) -> Vec<CharCell> {
    let mut typed = typed.chars();
    let mut cursor_placed = false;
    target
        .chars()
        .map(|ch| {
            let class = match typed.next() {
                Some(t) if t == ch => CharClass::Correct,
                Some(_) => CharClass::Incorrect,
                None if !cursor_placed => {
                    cursor_placed = true;
                    CharClass::Cursor
                }
                None => CharClass::Pending,
            };
            CharCell { ch, class }
        })
        .collect()
}
