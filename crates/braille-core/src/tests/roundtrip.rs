//! Property-based tests for the encode/decode round-trip law.

use proptest::prelude::*;

use crate::table::CharacterMap;
use crate::{decode, encode};

/// Every mapped symbol except the apostrophe, plus their uppercase forms.
///
/// Two apostrophes in a row encode to the same cells as a double quote,
/// so `'` only round-trips when the next character is not `'` or `"`.
fn arb_mapped_char() -> impl Strategy<Value = char> {
    let symbols: Vec<char> = CharacterMap::global()
        .iter()
        .map(|(c, _)| c)
        .filter(|&c| c != '\'')
        .collect();
    prop_oneof![
        4 => prop::sample::select(symbols),
        1 => prop::sample::select(('A'..='Z').collect::<Vec<_>>()),
    ]
}

fn arb_unmapped_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['@', '#', '&', '/', 'é', 'ß', '中', '🙂', '\n', '\t'])
}

#[test]
fn every_symbol_round_trips() {
    for (symbol, _) in CharacterMap::global().iter() {
        let s = symbol.to_string();
        assert_eq!(decode(&encode(&s)), s, "symbol {symbol:?}");
    }
    for upper in 'A'..='Z' {
        let s = upper.to_string();
        assert_eq!(decode(&encode(&s)), s.to_lowercase());
    }
}

#[test]
fn apostrophe_between_letters_round_trips() {
    assert_eq!(decode(&encode("don't")), "don't");
    assert_eq!(decode(&encode("'quoted'")), "'quoted'");
}

#[test]
fn sentence_round_trips() {
    let text = "Hello, World! It's 2024 (really): \"yes\"; ok? - 9";
    assert_eq!(decode(&encode(text)), text.to_lowercase());
}

proptest! {
    #[test]
    fn mapped_text_round_trips(chars in prop::collection::vec(arb_mapped_char(), 0..64)) {
        let text: String = chars.into_iter().collect();
        prop_assert_eq!(decode(&encode(&text)), text.to_lowercase());
    }

    #[test]
    fn encode_never_shrinks(text in ".{0,64}") {
        prop_assert!(encode(&text).chars().count() >= text.chars().count());
    }

    #[test]
    fn decode_is_total(text in "[\u{2800}-\u{28FF}a-z@ ]{0,64}") {
        let out = decode(&text);
        // Every cell yields at most one character.
        prop_assert!(out.chars().count() <= text.chars().count());
    }

    #[test]
    fn unmapped_passes_through(
        prefix in prop::collection::vec(arb_mapped_char(), 0..8),
        odd in arb_unmapped_char(),
        suffix in prop::collection::vec(arb_mapped_char(), 0..8),
    ) {
        let prefix: String = prefix.into_iter().collect();
        let suffix: String = suffix.into_iter().collect();
        let text = format!("{prefix}{odd}{suffix}");
        let encoded = encode(&text);
        prop_assert!(encoded.contains(odd));
        prop_assert_eq!(decode(&encoded), text.to_lowercase());
    }
}
