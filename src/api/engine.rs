use std::sync::Arc;

use braille_core::palette::{palette, PaletteKey};
use braille_core::settings::{self, parse_settings_toml, Settings, SettingsError};
use braille_core::{decode_with, encode_with, CharacterMap, MissPolicy, TableError};
use braille_session::TranslationSession;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("character table: {0}")]
    Table(#[from] TableError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
}

/// Shared table + settings. Cheap to clone and safe to use from any thread.
#[derive(Debug, Clone)]
pub struct BrailleEngine {
    table: Arc<CharacterMap>,
    settings: Arc<Settings>,
}

impl BrailleEngine {
    pub fn new(table: Arc<CharacterMap>, settings: Settings) -> Self {
        Self {
            table,
            settings: Arc::new(settings),
        }
    }

    /// Engine over the global table and settings.
    pub fn with_globals() -> Self {
        Self::new(
            CharacterMap::shared(),
            settings::settings().clone(),
        )
    }

    /// Build from TOML sources; `None` selects the embedded default.
    pub fn from_toml(table: Option<&str>, settings: Option<&str>) -> Result<Self, EngineError> {
        debug!(
            custom_table = table.is_some(),
            custom_settings = settings.is_some(),
            "building engine"
        );
        let table = CharacterMap::from_toml(table.unwrap_or(braille_core::table::default_toml()))?;
        let settings = parse_settings_toml(settings.unwrap_or(settings::DEFAULT_SETTINGS_TOML))?;
        Ok(Self::new(Arc::new(table), settings))
    }

    /// Encode with the configured miss policy for text input.
    pub fn encode(&self, text: &str) -> String {
        encode_with(&self.table, text, self.settings.text_policy())
    }

    pub fn encode_with_policy(&self, text: &str, policy: MissPolicy) -> String {
        encode_with(&self.table, text, policy)
    }

    pub fn decode(&self, braille: &str) -> String {
        decode_with(&self.table, braille)
    }

    pub fn palette(&self) -> Vec<PaletteKey> {
        palette(&self.table)
    }

    pub fn table(&self) -> &CharacterMap {
        &self.table
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn new_session(&self) -> TranslationSession {
        TranslationSession::new(Arc::clone(&self.table), (*self.settings).clone())
    }
}
