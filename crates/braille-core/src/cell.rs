//! Single Braille cells in the Unicode Braille Patterns block (U+2800..U+28FF).
//!
//! Dot numbering follows the standard 2×4 layout: dots 1-3 run down the
//! left column, 4-6 down the right, 7 and 8 form the bottom row. Dot `n`
//! is bit `n - 1` of the offset from U+2800.

/// Empty cell, used for the space character.
pub const BLANK: char = '\u{2800}';

/// Dots 3-4-5-6: marks the following a-j cell as a digit.
pub const NUMERIC_INDICATOR: char = '\u{283C}';

/// All six dots raised. Rendered for characters that have no mapping.
pub const FULL_CELL: char = '\u{283F}';

const BLOCK_START: u32 = 0x2800;
const BLOCK_END: u32 = 0x28FF;

pub fn is_cell(c: char) -> bool {
    (BLOCK_START..=BLOCK_END).contains(&(c as u32))
}

/// Build a cell from raised dot numbers. Order and repeats don't matter.
///
/// Returns `None` if any dot is outside 1..=8.
pub fn from_dots(dots: &[u8]) -> Option<char> {
    let mut mask: u32 = 0;
    for &dot in dots {
        if !(1..=8).contains(&dot) {
            return None;
        }
        mask |= 1 << (dot - 1);
    }
    char::from_u32(BLOCK_START + mask)
}

/// Raised dot numbers of a cell, ascending. `None` for non-cells.
pub fn dots(c: char) -> Option<Vec<u8>> {
    if !is_cell(c) {
        return None;
    }
    let mask = c as u32 - BLOCK_START;
    Some((1..=8u8).filter(|d| mask & (1 << (d - 1)) != 0).collect())
}
