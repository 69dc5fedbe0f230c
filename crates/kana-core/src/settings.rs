//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let custom = CUSTOM_TOML.get().and_then(|s| parse_settings_toml(s).ok());
        // The embedded default is checked by build.rs, so only a custom file can fail here,
        // and init_custom already validated it.
        custom.unwrap_or_else(|| parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap_or_default())
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub expand: ExpandSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpandSettings {
    pub max_options: usize,
}

impl Default for ExpandSettings {
    fn default() -> Self {
        Self { max_options: 8192 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub shuffle_words: bool,
    #[serde(default = "default_true")]
    pub reshuffle_on_wrap: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            shuffle_words: true,
            reshuffle_on_wrap: true,
        }
    }
}

fn default_true() -> bool {
    true
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(expand.max_options);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.expand.max_options, 8192);
        assert!(s.session.shuffle_words);
        assert!(s.session.reshuffle_on_wrap);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[expand]
max_options = 64

[session]
shuffle_words = false
reshuffle_on_wrap = false
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.expand.max_options, 64);
        assert!(!s.session.shuffle_words);
        assert!(!s.session.reshuffle_on_wrap);
    }

    #[test]
    fn reshuffle_on_wrap_defaults_to_true() {
        let toml = r#"
[expand]
max_options = 64

[session]
shuffle_words = false
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.session.reshuffle_on_wrap);
    }

    #[test]
    fn error_zero_max_options() {
        let toml = r#"
[expand]
max_options = 0

[session]
shuffle_words = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("expand.max_options"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[expand]
max_options = 10
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn global_settings_use_embedded_default() {
        assert!(settings().expand.max_options > 0);
    }
}
