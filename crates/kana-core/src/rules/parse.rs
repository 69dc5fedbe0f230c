use serde::Serialize;

use crate::unicode::katakana_to_hiragana;

/// One accepted rule line, normalized but not yet linked to its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleLine {
    /// Lowercase ASCII keystrokes.
    pub romaji: String,
    /// Hiragana fragment produced by `romaji`.
    pub kana: String,
    /// Lowercase text that must follow for this variant to apply.
    pub next_trigger: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum SkipReason {
    #[error("expected `<romaji> <kana> [<trigger>]`, found a single token")]
    MissingKana,
    #[error("found {0} tokens, at most 3 are allowed")]
    TrailingTokens(usize),
    #[error("romaji must be ASCII: {0}")]
    NonAsciiRomaji(String),
    #[error("trigger must be ASCII: {0}")]
    NonAsciiTrigger(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// Outcome of parsing rule text: accepted entries in file order plus every
/// rejected line. Blank and comment lines appear in neither list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleParseReport {
    pub entries: Vec<RuleLine>,
    pub skipped: Vec<SkippedLine>,
}

impl RuleParseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

fn is_comment_or_blank(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//")
}

fn parse_line(trimmed: &str) -> Result<RuleLine, SkipReason> {
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let (romaji, kana, trigger) = match tokens.as_slice() {
        [_] => return Err(SkipReason::MissingKana),
        [romaji, kana] => (*romaji, *kana, None),
        [romaji, kana, trigger] => (*romaji, *kana, Some(*trigger)),
        _ => return Err(SkipReason::TrailingTokens(tokens.len())),
    };

    if !romaji.is_ascii() {
        return Err(SkipReason::NonAsciiRomaji(romaji.to_string()));
    }
    if let Some(t) = trigger.filter(|t| !t.is_ascii()) {
        return Err(SkipReason::NonAsciiTrigger(t.to_string()));
    }

    Ok(RuleLine {
        romaji: romaji.to_ascii_lowercase(),
        kana: katakana_to_hiragana(kana),
        next_trigger: trigger.map(str::to_ascii_lowercase),
    })
}

/// Tokenize rule text, one `<romaji> <kana> [<trigger>]` rule per line.
///
/// Never fails: malformed lines are collected in [`RuleParseReport::skipped`].
pub fn parse_rules(text: &str) -> RuleParseReport {
    let mut report = RuleParseReport::default();
    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if is_comment_or_blank(trimmed) {
            continue;
        }
        match parse_line(trimmed) {
            Ok(entry) => report.entries.push(entry),
            Err(reason) => report.skipped.push(SkippedLine {
                line: i + 1,
                text: trimmed.to_string(),
                reason,
            }),
        }
    }
    report
}
