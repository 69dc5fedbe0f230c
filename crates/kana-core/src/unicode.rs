//! Character-level Unicode classification and folding for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes rarely-used symbols
/// (゠ U+30A0, ヿ U+30FF) but no unassigned codepoints.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Offset between a katakana letter and its hiragana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// Map one katakana letter to hiragana.
///
/// Only ァ..ヶ (U+30A1..U+30F6) and the iteration marks ヽヾ have hiragana
/// counterparts. ー, ・, ヷ..ヺ and ヿ are passed through unchanged.
pub fn fold_katakana_char(c: char) -> char {
    match c {
        '\u{30A1}'..='\u{30F6}' | '\u{30FD}'..='\u{30FE}' => {
            char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
        }
        _ => c,
    }
}

/// Convert a katakana string to hiragana.
/// Non-katakana characters (ー, ASCII, kanji, etc.) are passed through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(fold_katakana_char).collect()
}

/// Fold full-width ASCII (U+FF01..U+FF5E) and the ideographic space to their
/// half-width forms. IMEs left in full-width mode deliver keystrokes this way.
pub fn to_half_width_ascii(c: char) -> char {
    match c {
        '\u{3000}' => ' ',
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    }
}

/// Normalize a raw keystroke character for matching.
///
/// Returns `None` unless the folded character is printable ASCII.
pub fn normalize_keystroke(c: char) -> Option<char> {
    let c = to_half_width_ascii(c).to_ascii_lowercase();
    (' '..='~').contains(&c).then_some(c)
}

/// Check that a reading consists of kana only.
///
/// Anything else has no rule and is passed through verbatim when expanded,
/// so the typist would have to enter it literally.
pub fn is_kana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || is_katakana(c))
}
