//! Keys for composing Braille by hand: one per letter, space, and digit.

use crate::table::CharacterMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteKey {
    pub cells: String,
    pub label: String,
}

/// Letters a-z, then space, then digits 1-9 and 0.
///
/// Symbols missing from `table` are left out.
pub fn palette(table: &CharacterMap) -> Vec<PaletteKey> {
    let letters = ('a'..='z').map(|c| (c, c.to_string()));
    let space = std::iter::once((' ', "space".to_string()));
    let digits = "1234567890".chars().map(|c| (c, c.to_string()));

    letters
        .chain(space)
        .chain(digits)
        .filter_map(|(symbol, label)| {
            table.encode_symbol(symbol).map(|cells| PaletteKey {
                cells: cells.to_string(),
                label,
            })
        })
        .collect()
}
