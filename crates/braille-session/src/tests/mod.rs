
use braille_core::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};
use braille_core::CharacterMap;

use super::TranslationSession;

pub(super) fn make_session() -> TranslationSession {
    TranslationSession::with_globals()
}

pub(super) fn make_session_with_settings(toml: &str) -> TranslationSession {
    let settings = parse_settings_toml(toml).unwrap();
    TranslationSession::new(CharacterMap::shared(), settings)
}

pub(super) fn default_settings_toml() -> String {
    DEFAULT_SETTINGS_TOML.to_string()
}
