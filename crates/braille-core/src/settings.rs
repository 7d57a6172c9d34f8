//! Global settings loaded from TOML, following the same OnceLock pattern as the character table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::cell;
use crate::MissPolicy;

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
    pub encode: EncodeSettings,
    pub gesture: GestureSettings,
    pub session: SessionSettings,
}

impl Settings {
    /// Miss policy for typed and spoken text.
    pub fn text_policy(&self) -> MissPolicy {
        match self.encode.unmapped {
            Unmapped::Passthrough => MissPolicy::Passthrough,
            Unmapped::Placeholder => MissPolicy::Placeholder(self.encode.placeholder),
        }
    }

    /// Miss policy for gesture labels.
    pub fn gesture_policy(&self) -> MissPolicy {
        MissPolicy::Placeholder(self.gesture.placeholder)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unmapped {
    Passthrough,
    Placeholder,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncodeSettings {
    pub unmapped: Unmapped,
    pub placeholder: char,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GestureSettings {
    pub placeholder: char,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub history_size: usize,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_cell {
        ($section:ident . $field:ident) => {
            if !cell::is_cell(s.$section.$field) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be a Braille cell (U+2800..U+28FF)".to_string(),
                });
            }
        };
    }

    check_cell!(encode.placeholder);
    check_cell!(gesture.placeholder);

    if s.session.history_size == 0 {
        return Err(SettingsError::InvalidValue {
            field: "session.history_size".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}
