//! Kana→romaji rule tables.
//!
//! Rule text holds one `<romaji> <kana> [<trigger>]` rule per line. Parsing
//! is line-granular and never fails; rejected lines are reported. The built
//! [`RuleTable`] groups spellings by kana fragment and records which shorter
//! spellings collide with longer ones.

mod parse;
mod table;

pub use parse::{parse_rules, RuleLine, RuleParseReport, SkipReason, SkippedLine};
pub use table::{RuleEntry, RuleTable};

pub(crate) const DEFAULT_RULES: &str = include_str!("default_rules.txt");

/// Returns the embedded default rule text.
pub fn default_rules_text() -> &'static str {
    DEFAULT_RULES
}
