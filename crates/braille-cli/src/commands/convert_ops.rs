use serde::Serialize;

use braille_core::cell::{self, FULL_CELL};
use braille_core::{decode, encode, encode_with, CharacterMap, MissPolicy};

use super::pad;

#[derive(Debug, Serialize, PartialEq)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CellDots {
    pub cell: char,
    pub dots: Vec<u8>,
}

pub fn encode_text(text: &str, placeholder: bool) -> Conversion {
    let output = if placeholder {
        encode_with(
            CharacterMap::global(),
            text,
            MissPolicy::Placeholder(FULL_CELL),
        )
    } else {
        encode(text)
    };
    Conversion {
        input: text.to_string(),
        output,
    }
}

pub fn decode_braille(braille: &str) -> Conversion {
    Conversion {
        input: braille.to_string(),
        output: decode(braille),
    }
}

/// Raised dots for each cell; non-cell characters are skipped.
pub fn cell_dots(braille: &str) -> Vec<CellDots> {
    braille
        .chars()
        .filter_map(|c| cell::dots(c).map(|dots| CellDots { cell: c, dots }))
        .collect()
}

pub fn encode_cmd(text: &str, placeholder: bool, json: bool) {
    print_conversion(&encode_text(text, placeholder), json);
}

pub fn decode_cmd(braille: &str, json: bool) {
    print_conversion(&decode_braille(braille), json);
}

pub fn dots_cmd(braille: &str, json: bool) {
    let cells = cell_dots(braille);
    if json {
        println!("{}", serde_json::to_string(&cells).unwrap_or_default());
        return;
    }
    for c in &cells {
        let dots: Vec<String> = c.dots.iter().map(u8::to_string).collect();
        let decoded = decode(&c.cell.to_string());
        println!("{}  {}  dots {}", c.cell, pad(&decoded, 2), dots.join("-"));
    }
}

pub fn palette_cmd() {
    for key in braille_core::palette::palette(CharacterMap::global()) {
        println!("{}{}", pad(&key.cells, 4), key.label);
    }
}

/// Verify the round-trip law and phrase consistency against the active table.
///
/// Returns the list of failures; empty means everything agrees.
pub fn check() -> Vec<String> {
    let table = CharacterMap::global();
    let mut failures = Vec::new();

    for (symbol, cells) in table.iter() {
        let s = symbol.to_string();
        let encoded = encode(&s);
        if encoded != cells {
            failures.push(format!("encode({s:?}) = {encoded:?}, table has {cells:?}"));
        }
        let decoded = decode(&encoded);
        if decoded != s {
            failures.push(format!("decode({encoded:?}) = {decoded:?}, expected {s:?}"));
        }
    }

    for (phrase, braille) in braille_core::phrases::iter() {
        let encoded = encode(phrase);
        if encoded != braille {
            failures.push(format!("phrase {phrase:?}: table {braille:?}, encode {encoded:?}"));
        }
    }

    failures
}

pub fn check_cmd() {
    let failures = check();
    if failures.is_empty() {
        println!(
            "OK: {} symbols, {} phrases",
            CharacterMap::global().len(),
            braille_core::phrases::COMMON_PHRASES.len()
        );
        return;
    }
    for f in &failures {
        eprintln!("FAIL: {f}");
    }
    std::process::exit(1);
}

fn print_conversion(c: &Conversion, json: bool) {
    if json {
        println!("{}", serde_json::to_string(c).unwrap_or_default());
    } else {
        println!("{}", c.output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_text() {
        assert_eq!(encode_text("ab1", false).output, "⠁⠃⠼⠁");
        assert_eq!(encode_text("a@", false).output, "⠁@");
        assert_eq!(encode_text("a@", true).output, "⠁⠿");
    }

    #[test]
    fn test_decode_braille() {
        let c = decode_braille("⠁⠀⠃");
        assert_eq!(c.input, "⠁⠀⠃");
        assert_eq!(c.output, "a b");
    }

    #[test]
    fn test_conversion_json() {
        let json = serde_json::to_string(&decode_braille("⠼⠑")).unwrap();
        assert_eq!(json, r#"{"input":"⠼⠑","output":"5"}"#);
    }

    #[test]
    fn test_cell_dots() {
        let dots = cell_dots("⠼x⠁");
        assert_eq!(
            dots,
            vec![
                CellDots {
                    cell: '⠼',
                    dots: vec![3, 4, 5, 6]
                },
                CellDots {
                    cell: '⠁',
                    dots: vec![1]
                },
            ]
        );
    }

    #[test]
    fn test_check_default_table() {
        assert!(check().is_empty(), "{:?}", check());
    }
}
