//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;
use time::format_description::OwnedFormatItem;

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
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
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

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub suggest: SuggestSettings,
    pub date: DateSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestSettings {
    /// Options shown per company prompt. The engine returns the full match
    /// list; this caps presentation only.
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateSettings {
    /// time-crate format description for the date field.
    pub format: String,
    /// Parsed format, populated at load.
    #[serde(skip)]
    format_parsed: Option<OwnedFormatItem>,
}

impl DateSettings {
    pub fn format_items(&self) -> &OwnedFormatItem {
        self.format_parsed
            .as_ref()
            .expect("date format parsed at settings load")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.date.format_parsed = Some(parse_date_format(&s.date.format)?);
    Ok(s)
}

fn parse_date_format(format: &str) -> Result<OwnedFormatItem, SettingsError> {
    time::format_description::parse_owned::<2>(format).map_err(|e| SettingsError::InvalidValue {
        field: "date.format".to_string(),
        reason: e.to_string(),
    })
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.suggest.max_results == 0 {
        return Err(SettingsError::InvalidValue {
            field: "suggest.max_results".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toml_parses() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.suggest.max_results, 10);
        assert_eq!(s.date.format, "[year]/[month]/[day]");
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let toml = "[suggest]\nmax_results = 0\n[date]\nformat = \"[year]/[month]/[day]\"\n";
        assert!(matches!(
            parse_settings_toml(toml),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let toml = "[suggest]\nmax_results = 10\n[date]\nformat = \"[not-a-component]\"\n";
        assert!(matches!(
            parse_settings_toml(toml),
            Err(SettingsError::InvalidValue { .. })
        ));
    }
}
