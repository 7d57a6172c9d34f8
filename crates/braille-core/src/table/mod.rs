//! The character table: source symbols to Braille cell sequences and back.
//!
//! The default table is embedded TOML; a custom one can be installed with
//! [`CharacterMap::init_custom`] before the first [`CharacterMap::global`] call.

mod config;
mod map;

pub use config::{parse_table_toml, TableError};
pub use map::{CharacterMap, Iter};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_table.toml");

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
