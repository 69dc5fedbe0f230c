use std::fs;
use std::path::Path;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use kana_core::rules::{RuleParseReport, RuleTable};
use kana_core::settings::SettingsError;
use kana_session::SessionError;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod expand_ops;
pub mod replay_ops;
pub mod rules_ops;
pub mod words_ops;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Load a rule table from `path`, or the embedded default table when `None`.
pub fn load_table(path: Option<&Path>) -> Result<(RuleTable, RuleParseReport), CliError> {
    match path {
        Some(p) => Ok(RuleTable::parse(&read_text(p)?)),
        None => Ok(RuleTable::parse(kana_core::rules::default_rules_text())),
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Pad `s` with spaces to `width` terminal columns. Wide kana and kanji count
/// as two columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    let pad = width.saturating_sub(s.width());
    out.extend(std::iter::repeat(' ').take(pad));
    out
}
