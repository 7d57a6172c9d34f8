use crate::table::CharacterMap;

/// What to emit for a character the table has no entry for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissPolicy {
    /// Copy the character into the output unchanged.
    #[default]
    Passthrough,
    /// Emit this cell instead.
    Placeholder(char),
}

/// Transliterate text to Braille with the global table.
///
/// The whole input is lowercased first. Characters without a mapping are copied
/// through unchanged, so this never fails.
pub fn encode(text: &str) -> String {
    encode_with(CharacterMap::global(), text, MissPolicy::Passthrough)
}

pub fn encode_with(table: &CharacterMap, text: &str, policy: MissPolicy) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.to_lowercase().chars() {
        match (table.encode_symbol(ch), policy) {
            (Some(cells), _) => out.push_str(cells),
            (None, MissPolicy::Passthrough) => out.push(ch),
            (None, MissPolicy::Placeholder(cell)) => out.push(cell),
        }
    }
    out
}
