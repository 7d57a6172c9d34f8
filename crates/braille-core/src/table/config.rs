use std::collections::BTreeMap;

use serde::Deserialize;

use crate::cell;

#[derive(Deserialize)]
struct TableConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be a single character: {0:?}")]
    NotSingleChar(String),
    #[error("uppercase key {0:?}: lookups are lowercased")]
    UppercaseKey(char),
    #[error("empty value for key: {0:?}")]
    EmptyValue(char),
    #[error("value for {symbol:?} contains non-Braille character {found:?}")]
    NonCellValue { symbol: char, found: char },
    #[error("character table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a `BTreeMap<symbol, cells>` sorted by symbol.
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<char, String>, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(TableError::Empty);
    }

    let mut result = BTreeMap::new();
    for (key, value) in config.mappings {
        let mut chars = key.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(TableError::NotSingleChar(key)),
        };
        check_entry(symbol, &value)?;
        result.insert(symbol, value);
    }

    Ok(result)
}

/// Checks shared by TOML parsing and `CharacterMap::from_mappings`.
pub(crate) fn check_entry(symbol: char, cells: &str) -> Result<(), TableError> {
    if symbol.is_uppercase() {
        return Err(TableError::UppercaseKey(symbol));
    }
    if cells.is_empty() {
        return Err(TableError::EmptyValue(symbol));
    }
    if let Some(found) = cells.chars().find(|&c| !cell::is_cell(c)) {
        return Err(TableError::NonCellValue { symbol, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[mappings]
a = "⠁"
"1" = "⠼⠁"
"#;
        let map = parse_table_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&'a'], "⠁");
        assert_eq!(map[&'1'], "⠼⠁");
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_table_toml(super::super::DEFAULT_TOML).unwrap();
        // 26 letters + 10 digits + 11 punctuation + space
        assert_eq!(map.len(), 48);
        assert_eq!(map[&'"'], "⠄⠄");
        assert_eq!(map[&' '], "⠀");
    }

    #[test]
    fn error_empty_mappings() {
        let err = parse_table_toml("[mappings]\n").unwrap_err();
        assert!(matches!(err, TableError::Empty));
    }

    #[test]
    fn error_multi_char_key() {
        let toml = r#"
[mappings]
ab = "⠁"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::NotSingleChar(ref k) if k == "ab"));
    }

    #[test]
    fn error_uppercase_key() {
        let toml = r#"
[mappings]
A = "⠁"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::UppercaseKey('A')));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[mappings]
a = ""
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::EmptyValue('a')));
    }

    #[test]
    fn error_non_cell_value() {
        let toml = r#"
[mappings]
a = "⠁x"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            TableError::NonCellValue {
                symbol: 'a',
                found: 'x'
            }
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_table_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
