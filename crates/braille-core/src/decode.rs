use crate::table::CharacterMap;

/// What the scanner consumes at one position.
#[derive(Debug, PartialEq)]
enum Step {
    /// `len` bytes of cells matched `symbol`.
    Matched { symbol: char, len: usize },
    /// No mapping; emit the cell itself.
    Passthrough(char),
}

/// Transliterate Braille back to text with the global table.
///
/// Cells without a mapping are copied through unchanged. Case is not
/// recovered: `decode(&encode(s)) == s.to_lowercase()` for mapped input.
pub fn decode(braille: &str) -> String {
    decode_with(CharacterMap::global(), braille)
}

pub fn decode_with(table: &CharacterMap, braille: &str) -> String {
    let mut out = String::with_capacity(braille.len());
    let mut rest = braille;

    while let Some(step) = next_step(table, rest) {
        match step {
            Step::Matched { symbol, len } => {
                out.push(symbol);
                rest = &rest[len..];
            }
            Step::Passthrough(c) => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

/// Decide what to consume at the head of `rest`; `None` at end of input.
///
/// The longest mapped sequence wins, so a numeric indicator followed by an
/// a-j cell reads as a digit. A trailing indicator, or one before a cell
/// that completes no sequence, falls through as a single passthrough cell
/// and the next cell is scanned on its own.
fn next_step(table: &CharacterMap, rest: &str) -> Option<Step> {
    let head = rest.chars().next()?;
    Some(match table.longest_match(rest) {
        Some((symbol, len)) => Step::Matched { symbol, len },
        None => Step::Passthrough(head),
    })
}
