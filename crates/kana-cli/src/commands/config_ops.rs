use std::path::Path;

use kana_core::settings::{self, Settings};

use super::{read_text, CliError};

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn load_settings(file: &Path) -> Result<Settings, CliError> {
    let content = read_text(file)?;
    Ok(settings::parse_settings_toml(&content)?)
}

pub fn settings_validate(file: &str) {
    let s = die!(load_settings(Path::new(file)), "Error: {}");
    println!(
        "OK: expand.max_options={}, session.shuffle_words={}, session.reshuffle_on_wrap={}",
        s.expand.max_options, s.session.shuffle_words, s.session.reshuffle_on_wrap
    );
}

/// Install `file` as the process-wide settings before anything reads them.
pub fn apply_settings(file: &str) {
    let content = die!(read_text(Path::new(file)), "Error: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}
