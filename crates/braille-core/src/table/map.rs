use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use lexime_trie::{DoubleArray, TrieSearch};
use tracing::warn;

use super::config::{check_entry, parse_table_toml, TableError};
use super::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Immutable symbol ⇄ cell-sequence table.
///
/// The reverse index is a double-array trie over the cell sequences, built
/// by inverting the forward map in ascending symbol order. When two symbols
/// share a cell sequence the first one (lowest code point) keeps it; the
/// default table has no such collisions.
pub struct CharacterMap {
    forward: BTreeMap<char, String>,
    reverse: DoubleArray<u8>,
    /// Symbol for each trie value id, in sorted cell-sequence order.
    reverse_symbols: Vec<char>,
    /// Length in cells of the longest reverse entry.
    max_cells: usize,
}

impl CharacterMap {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static CharacterMap {
        Self::global_arc()
    }

    /// Shared handle to the global table, without copying it.
    pub fn shared() -> Arc<CharacterMap> {
        Arc::clone(Self::global_arc())
    }

    fn global_arc() -> &'static Arc<CharacterMap> {
        static INSTANCE: OnceLock<Arc<CharacterMap>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = CharacterMap::from_toml(toml_str).expect("character table TOML must be valid");
            Arc::new(map)
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        Self::from_mappings(parse_table_toml(toml_str)?)
    }

    /// Build from symbol → cells pairs, applying the same checks as TOML input.
    pub fn from_mappings(forward: BTreeMap<char, String>) -> Result<Self, TableError> {
        if forward.is_empty() {
            return Err(TableError::Empty);
        }
        for (&symbol, cells) in &forward {
            check_entry(symbol, cells)?;
        }

        // BTreeMap<String, _> iterates in byte order, as DoubleArray::build needs.
        let mut inverted: BTreeMap<&str, char> = BTreeMap::new();
        for (&symbol, cells) in &forward {
            match inverted.entry(cells.as_str()) {
                btree_map::Entry::Occupied(kept) => {
                    warn!(%cells, kept = %kept.get(), skipped = %symbol, "duplicate cell sequence");
                }
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(symbol);
                }
            }
        }

        let keys: Vec<&[u8]> = inverted.keys().map(|k| k.as_bytes()).collect();
        let reverse = DoubleArray::<u8>::build(&keys);
        let reverse_symbols: Vec<char> = inverted.values().copied().collect();
        let max_cells = inverted
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(1);

        Ok(Self {
            forward,
            reverse,
            reverse_symbols,
            max_cells,
        })
    }

    /// Cells for a source symbol. Callers lowercase first.
    pub fn encode_symbol(&self, symbol: char) -> Option<&str> {
        self.forward.get(&symbol).map(String::as_str)
    }

    /// Source symbol for an exact cell sequence.
    pub fn decode_cells(&self, cells: &str) -> Option<char> {
        let pr = self.reverse.probe(cells.as_bytes());
        pr.value.map(|id| self.reverse_symbols[id as usize])
    }

    /// Longest cell sequence at the start of `braille` that has a mapping.
    ///
    /// Returns the symbol and the matched length in bytes.
    pub fn longest_match(&self, braille: &str) -> Option<(char, usize)> {
        self.reverse
            .common_prefix_search(braille.as_bytes())
            .max_by_key(|m| m.len)
            .map(|m| (self.reverse_symbols[m.value_id as usize], m.len))
    }

    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Forward entries in ascending symbol order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.forward.iter(),
        }
    }
}

impl fmt::Debug for CharacterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterMap")
            .field("forward", &self.forward)
            .field("max_cells", &self.max_cells)
            .finish_non_exhaustive()
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, char, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (char, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&c, s)| (c, s.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
