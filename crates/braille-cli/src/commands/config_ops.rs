use std::fs;
use std::io;

use braille_core::settings::{self, Settings, SettingsError};
use braille_core::table::{self, TableError};
use braille_core::CharacterMap;

use super::die;

#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn read(file: &str) -> Result<String, ConfigFileError> {
    fs::read_to_string(file).map_err(|source| ConfigFileError::Io {
        path: file.to_string(),
        source,
    })
}

pub fn load_table(file: &str) -> Result<CharacterMap, ConfigFileError> {
    Ok(CharacterMap::from_toml(&read(file)?)?)
}

pub fn load_settings(file: &str) -> Result<Settings, ConfigFileError> {
    Ok(settings::parse_settings_toml(&read(file)?)?)
}

pub fn table_export() {
    print!("{}", table::default_toml());
}

pub fn table_validate(file: &str) {
    let table = die!(load_table(file), "Error: {}");
    println!(
        "OK: {} mappings, longest sequence {} cells",
        table.len(),
        table.max_cells()
    );
}

/// Install a custom character table for the rest of the process.
pub fn table_install(file: &str) {
    let content = die!(read(file), "Error: {}");
    die!(CharacterMap::init_custom(content), "Error: {}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(load_settings(file), "Error: {}");
    println!(
        "OK: encode.unmapped={:?}, gesture.placeholder={}, session.history_size={}",
        s.encode.unmapped, s.gesture.placeholder, s.session.history_size
    );
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn load_default_table_file() {
        let f = write_temp(table::default_toml());
        let table = load_table(f.path().to_str().unwrap()).unwrap();
        assert_eq!(table.len(), 48);
        assert_eq!(table.max_cells(), 2);
    }

    #[test]
    fn load_invalid_table_file() {
        let f = write_temp("[mappings]\nab = \"⠁\"\n");
        let err = load_table(f.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigFileError::Table(TableError::NotSingleChar(_))));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_table(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigFileError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn load_default_settings_file() {
        let f = write_temp(settings::default_toml());
        let s = load_settings(f.path().to_str().unwrap()).unwrap();
        assert_eq!(s.session.history_size, 5);
    }

    #[test]
    fn load_invalid_settings_file() {
        let toml = settings::default_toml().replace("history_size = 5", "history_size = 0");
        let f = write_temp(&toml);
        let err = load_settings(f.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            ConfigFileError::Settings(SettingsError::InvalidValue { .. })
        ));
    }
}
